//! Module `scanner` implements a one‑pass, streaming lexer for Lox source.
//!
//! It transforms a `&str` into a sequence of `Token<'a>`s, skipping whitespace
//! and comments, and emitting exactly one `EOF` token at the end. Designed as
//! a `FusedIterator`, it can be chained safely with other iterator adapters.
//!
//! # Public API
//!
//! - `Scanner::new(src: &'a str) -> Scanner<'a>`
//!   Create a new lexer over the input buffer.
//!
//! - `impl Iterator for Scanner<'a>`
//!   Yields `Result<Token<'a>, LoxError>` on each `.next()`. Errors do not
//!   stop the scan: the next call resumes after the offending input, so every
//!   problem in a source is reported.
//!
//! - `scan(src: &'a str) -> ScanOutcome<'a>`
//!   Drains a scanner, splitting tokens from errors.
//!
//! # Token Recognition
//!
//! - Single‑character tokens: `(`, `)`, `{`, `}`, `,`, `.`, `-`, `+`, `;`, `*`.
//! - Two‑character operators: `!=`, `==`, `<=`, `>=`.
//! - String literals: `"` … `"`, multi‑line allowed; unterminated strings are
//!   reported at the line of the opening quote and produce no token.
//! - Numeric literals: integer and optional fractional part, parsed to an
//!   arbitrary‑precision `BigDecimal`, so no literal is ever rounded. A `.` is
//!   only part of the number when a digit follows it; `.5` is `DOT` `NUMBER`.
//! - Identifiers/keywords: alphanumeric/_ sequences, resolved via a
//!   perfect‑hash `KEYWORDS` map.
//!
//! # Example
//!
//! ```rust
//! use lox_expr::scanner::Scanner;
//!
//! for result in Scanner::new("print 123; // example") {
//!     match result {
//!         Ok(token) => println!("{}", token),
//!         Err(err) => eprintln!("{}", err),
//!     }
//! }
//! ```

use crate::error::{LoxError, Result};
use crate::token::{Literal, Token, TokenType};
use bigdecimal::BigDecimal;
use log::{debug, info};
use memchr::memchr;
use phf::phf_map;
use std::iter::FusedIterator;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Static keyword map (compile‑time perfect hash)
// ─────────────────────────────────────────────────────────────────────────────

static KEYWORDS: phf::Map<&'static [u8], TokenType> = phf_map! {
    b"and"    => TokenType::AND,
    b"class"  => TokenType::CLASS,
    b"else"   => TokenType::ELSE,
    b"false"  => TokenType::FALSE,
    b"fun"    => TokenType::FUN,
    b"for"    => TokenType::FOR,
    b"if"     => TokenType::IF,
    b"nil"    => TokenType::NIL,
    b"or"     => TokenType::OR,
    b"print"  => TokenType::PRINT,
    b"return" => TokenType::RETURN,
    b"super"  => TokenType::SUPER,
    b"this"   => TokenType::THIS,
    b"true"   => TokenType::TRUE,
    b"var"    => TokenType::VAR,
    b"while"  => TokenType::WHILE,
};

/// A single pass **scanner / lexer**. The lifetime `'a` ties every emitted
/// token’s `lexeme` slice back to the original source buffer.
pub struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    start: usize, // index of the *first* byte of the current lexeme
    curr: usize,  // index *one past* the last byte examined
    line: usize,  // 1‑based line counter (\n increments)
    pending: Option<(TokenType, Option<Literal<'a>>)>, // recognised token waiting to be emitted
}

impl<'a> Scanner<'a> {
    /// Create a new lexer over `src`.
    #[inline]
    pub fn new(src: &'a str) -> Self {
        info!("Scanner created over {} bytes", src.len());

        Self {
            src,
            bytes: src.as_bytes(),
            start: 0,
            curr: 0,
            line: 1,
            pending: None,
        }
    }

    // ───────────────────────────── primitive helpers ────────────────────────

    #[inline(always)]
    const fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.len()
    }

    /// Advance one byte and return it. Callers guard with `is_at_end`.
    #[inline(always)]
    fn advance(&mut self) -> u8 {
        let b = self.bytes[self.curr];
        self.curr += 1;
        b
    }

    /// Peek at the current byte without consuming it. Returns `0` past EOF.
    #[inline(always)]
    fn peek(&self) -> u8 {
        self.bytes.get(self.curr).copied().unwrap_or(0)
    }

    #[inline(always)]
    fn peek_next(&self) -> u8 {
        self.bytes.get(self.curr + 1).copied().unwrap_or(0)
    }

    /// Conditionally consume a byte **iff** it matches `expected`.
    #[inline(always)]
    fn match_byte(&mut self, expected: u8) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    #[inline(always)]
    fn emit(&mut self, tt: TokenType) {
        self.pending = Some((tt, None));
    }

    /// Pick `long` when the next byte is `=`, `short` otherwise.
    #[inline(always)]
    fn emit_if_equal(&mut self, long: TokenType, short: TokenType) {
        let tt = if self.match_byte(b'=') { long } else { short };

        self.emit(tt);
    }

    // ───────────────────────────── core lexing ─────────────────────────────

    /// Scan a *single* lexeme starting at `self.curr`. Whitespace and comments
    /// leave `pending` empty.
    fn scan_token(&mut self) -> Result<()> {
        let b = self.advance();

        match b {
            // ── single‑character punctuators ──────────────────────────────
            b'(' => self.emit(TokenType::LEFT_PAREN),
            b')' => self.emit(TokenType::RIGHT_PAREN),
            b'{' => self.emit(TokenType::LEFT_BRACE),
            b'}' => self.emit(TokenType::RIGHT_BRACE),
            b',' => self.emit(TokenType::COMMA),
            b'.' => self.emit(TokenType::DOT),
            b'-' => self.emit(TokenType::MINUS),
            b'+' => self.emit(TokenType::PLUS),
            b';' => self.emit(TokenType::SEMICOLON),
            b'*' => self.emit(TokenType::STAR),

            // ── one‑ or two‑character operators ─────────────────────────
            b'!' => self.emit_if_equal(TokenType::BANG_EQUAL, TokenType::BANG),
            b'=' => self.emit_if_equal(TokenType::EQUAL_EQUAL, TokenType::EQUAL),
            b'<' => self.emit_if_equal(TokenType::LESS_EQUAL, TokenType::LESS),
            b'>' => self.emit_if_equal(TokenType::GREATER_EQUAL, TokenType::GREATER),

            // ── whitespace / newline ─────────────────────────────────────
            b' ' | b'\r' | b'\t' => {}

            b'\n' => {
                self.line += 1;
            }

            // ── comments (// … until newline) ────────────────────────────
            b'/' => {
                if self.match_byte(b'/') {
                    // The newline itself is left for the main loop so the
                    // line counter stays in one place.
                    self.curr = match memchr(b'\n', &self.bytes[self.curr..]) {
                        Some(pos) => self.curr + pos,
                        None => self.len(),
                    };
                } else {
                    self.emit(TokenType::SLASH);
                }
            }

            b'"' => return self.parse_string(),

            b'0'..=b'9' => return self.parse_number(),

            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.parse_identifier(),

            // ── unexpected character ─────────────────────────────────────
            _ => {
                // Report the whole character, not just its first byte.
                let c: char = self.src[self.start..].chars().next().unwrap_or('\u{fffd}');
                self.curr = self.start + c.len_utf8();

                return Err(LoxError::lex(
                    self.line,
                    format!("Unexpected character: {}", c),
                ));
            }
        }

        Ok(())
    }

    /// Parse a double‑quoted string literal. `self.start` points to the
    /// opening `"`; on success `self.curr` points past the closing one.
    fn parse_string(&mut self) -> Result<()> {
        let opened_on: usize = self.line;

        while !self.is_at_end() && self.peek() != b'"' {
            if self.advance() == b'\n' {
                self.line += 1;
            }
        }

        if self.is_at_end() {
            return Err(LoxError::lex(opened_on, "Unterminated string."));
        }

        self.advance(); // closing quote

        let src: &'a str = self.src;
        let contents: &'a str = &src[self.start + 1..self.curr - 1];

        self.pending = Some((TokenType::STRING, Some(Literal::Str(contents))));

        Ok(())
    }

    /// Parse a numeric literal (`123`, `3.14`). Fractions are optional.
    fn parse_number(&mut self) -> Result<()> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance(); // "."

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text: &str = &self.src[self.start..self.curr];

        // Any digit run with an optional fraction parses; the error arm only
        // keeps this path free of panics.
        let n: BigDecimal = BigDecimal::from_str(text).map_err(|e| {
            debug!("BigDecimal rejected {:?}: {}", text, e);

            LoxError::lex(self.line, format!("Invalid number literal: {}", text))
        })?;

        self.pending = Some((TokenType::NUMBER, Some(Literal::Number(n))));

        Ok(())
    }

    /// Parse an identifier and decide if it is a **keyword** or a generic
    /// `IDENTIFIER` token.
    fn parse_identifier(&mut self) {
        while {
            let c: u8 = self.peek();
            c.is_ascii_alphanumeric() || c == b'_'
        } {
            self.advance();
        }

        let slice: &[u8] = &self.bytes[self.start..self.curr];

        let tt: TokenType = KEYWORDS
            .get(slice)
            .copied()
            .unwrap_or(TokenType::IDENTIFIER);

        self.emit(tt);
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.curr <= self.len() {
            // Emit exactly one EOF, then stay exhausted.
            if self.curr == self.len() {
                self.curr += 1;
                return Some(Ok(Token::eof(self.line)));
            }

            self.start = self.curr;
            self.pending = None;

            if let Err(e) = self.scan_token() {
                return Some(Err(e));
            }

            if let Some((tt, literal)) = self.pending.take() {
                let src: &'a str = self.src;
                let lexeme: &'a str = &src[self.start..self.curr];

                return Some(Ok(Token::with_literal(tt, lexeme, literal, self.line)));
            }
            // whitespace / comment
        }

        None
    }
}

impl<'a> FusedIterator for Scanner<'a> {}

/// Everything one scanning pass produced. The token list always ends with
/// `EOF`, even when errors were reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome<'a> {
    pub tokens: Vec<Token<'a>>,
    pub errors: Vec<LoxError>,
}

impl<'a> ScanOutcome<'a> {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `src` to completion, collecting every token and every error.
pub fn scan(src: &str) -> ScanOutcome<'_> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut errors: Vec<LoxError> = Vec::new();

    for result in Scanner::new(src) {
        match result {
            Ok(token) => tokens.push(token),
            Err(e) => errors.push(e),
        }
    }

    info!(
        "Scan finished: {} token(s), {} error(s)",
        tokens.len(),
        errors.len()
    );

    ScanOutcome { tokens, errors }
}
