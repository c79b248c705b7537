use log::debug;
use bigdecimal::BigDecimal;
use std::fmt;

use crate::value::format_number_literal;

/// The different kinds of tokens recognized by the Lox scanner.
///
/// Variant names are exactly what `tokenize` prints in its first column.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// '('
    LEFT_PAREN,

    /// ')'
    RIGHT_PAREN,

    /// '{'
    LEFT_BRACE,

    /// '}'
    RIGHT_BRACE,

    /// ','
    COMMA,

    /// '.'
    DOT,

    /// '-'
    MINUS,

    /// '+'
    PLUS,

    /// ';'
    SEMICOLON,

    /// '/'
    SLASH,

    /// '*'
    STAR,

    /// '!'
    BANG,

    /// '!='
    BANG_EQUAL,

    /// '='
    EQUAL,

    /// '=='
    EQUAL_EQUAL,

    /// '>'
    GREATER,

    /// '>='
    GREATER_EQUAL,

    /// '<'
    LESS,

    /// '<='
    LESS_EQUAL,

    /// A user‑defined identifier
    IDENTIFIER,

    /// A string literal; the contents live in [`Token::literal`]
    STRING,

    /// A numeric literal; the value lives in [`Token::literal`]
    NUMBER,

    AND,
    CLASS,
    ELSE,
    FALSE,
    FUN,
    FOR,
    IF,
    NIL,
    OR,
    PRINT,
    RETURN,
    SUPER,
    THIS,
    TRUE,
    VAR,
    WHILE,

    /// End‑of‑file marker
    EOF,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Payload carried by `STRING` and `NUMBER` tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal<'a> {
    /// String contents without the surrounding quotes.
    Str(&'a str),

    Number(BigDecimal),
}

impl<'a> fmt::Display for Literal<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),

            Literal::Number(n) => f.write_str(&format_number_literal(n)),
        }
    }
}

/// A scanned token: its kind, the original lexeme, the literal payload (for
/// strings and numbers) and the line where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    /// The category of this token.
    pub token_type: TokenType,

    /// The exact substring from the source that produced this token.
    pub lexeme: &'a str,

    pub literal: Option<Literal<'a>>,

    /// 1‑based line number in the source.
    pub line: usize,
}

impl<'a> Token<'a> {
    /// Create a token without a literal payload.
    pub fn new(token_type: TokenType, lexeme: &'a str, line: usize) -> Self {
        Self::with_literal(token_type, lexeme, None, line)
    }

    pub fn with_literal(
        token_type: TokenType,
        lexeme: &'a str,
        literal: Option<Literal<'a>>,
        line: usize,
    ) -> Self {
        debug!(
            "Creating new token: type={:?}, lexeme={}, line={}",
            token_type, lexeme, line
        );

        Self {
            token_type,
            lexeme,
            literal,
            line,
        }
    }

    /// The end-of-input marker.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenType::EOF, "", line)
    }
}

/// `tokenize` rendering: `KIND lexeme literal`, with `null` for tokens
/// without a payload.
impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.token_type, self.lexeme, literal),

            None => write!(f, "{} {} null", self.token_type, self.lexeme),
        }
    }
}
