/*!
Recursive‑descent parser for a single Lox expression.

Definitions
-----------
* **n** = number of tokens (including the sole EOF).

Each token is consumed at most once, so parsing is **Θ(n)**; the AST holds at
most one node per token. Call‑stack depth follows syntactic nesting (unary
operators and groups) and is capped at [`MAX_DEPTH`]. Binary chains are built
in a loop, so `1 + 1 + … + 1` has no length limit.

### Logging Policy

| Location                     | Level  | Purpose                                   |
|------------------------------|--------|-------------------------------------------|
| `Parser::new`, `parse`       | `info` | Lifecycle milestones.                     |
| Error paths (`consume`, etc.)| `debug`| Context before returning structured error.|

--------------------------------------------------------------------------------
Grammar
-------

```text
expression → equality ;
equality   → comparison ( ( "!=" | "==" ) comparison )* ;
comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
term       → factor ( ( "-" | "+" ) factor )* ;
factor     → unary ( ( "/" | "*" ) unary )* ;
unary      → ( "!" | "-" ) unary | primary ;
primary    → NUMBER | STRING | "true" | "false" | "nil"
           | "(" expression ")" ;
```

Binary levels loop and fold to the left, so `1 - 2 - 3` is `(1 - 2) - 3`.
`unary` recurses into itself, so `- - 5` is `-(-5)`.
*/

use crate::error::{LoxError, Result};
use crate::expr::{BinaryOp, Expr, UnaryOp};
use crate::token::{Literal, Token, TokenType};
use crate::value::Value;

use log::{debug, info};

/// Deepest accepted expression nesting. Every unary operator and every
/// parenthesised group adds one level; binary operators do not.
pub const MAX_DEPTH: usize = 256;

type OperatorTable<O> = [(TokenType, O)];

const EQUALITY: &OperatorTable<BinaryOp> = &[
    (TokenType::BANG_EQUAL, BinaryOp::BangEqual),
    (TokenType::EQUAL_EQUAL, BinaryOp::EqualEqual),
];

const COMPARISON: &OperatorTable<BinaryOp> = &[
    (TokenType::GREATER, BinaryOp::Greater),
    (TokenType::GREATER_EQUAL, BinaryOp::GreaterEqual),
    (TokenType::LESS, BinaryOp::Less),
    (TokenType::LESS_EQUAL, BinaryOp::LessEqual),
];

const TERM: &OperatorTable<BinaryOp> = &[
    (TokenType::MINUS, BinaryOp::Minus),
    (TokenType::PLUS, BinaryOp::Plus),
];

const FACTOR: &OperatorTable<BinaryOp> = &[
    (TokenType::SLASH, BinaryOp::Slash),
    (TokenType::STAR, BinaryOp::Star),
];

const UNARY: &OperatorTable<UnaryOp> = &[
    (TokenType::BANG, UnaryOp::Bang),
    (TokenType::MINUS, UnaryOp::Minus),
];

/// Top‑level parser over an immutable slice of tokens.
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    current: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Construct a new parser.
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        info!("Parser created with {} tokens", tokens.len());

        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    // ───────────────────────── public API ─────────────────────────

    /// Parse exactly one expression. Tokens after it are left unread.
    pub fn parse(&mut self) -> Result<Expr> {
        info!("Beginning parse phase");

        let expr: Expr = self.expression()?;

        if let Some(token) = self.peek().filter(|t| t.token_type != TokenType::EOF) {
            debug!(
                "Ignoring trailing input at '{}' on line {}",
                token.lexeme, token.line
            );
        }

        info!("Parse phase completed");

        Ok(expr)
    }

    // ─────────────────────── expression rules ─────────────────────

    fn expression(&mut self) -> Result<Expr> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr> {
        self.left_assoc(EQUALITY, Self::comparison)
    }

    fn comparison(&mut self) -> Result<Expr> {
        self.left_assoc(COMPARISON, Self::term)
    }

    fn term(&mut self) -> Result<Expr> {
        self.left_assoc(TERM, Self::factor)
    }

    fn factor(&mut self) -> Result<Expr> {
        self.left_assoc(FACTOR, Self::unary)
    }

    /// One binary precedence level: `operand ( op operand )*`, folded left.
    fn left_assoc(
        &mut self,
        operators: &OperatorTable<BinaryOp>,
        operand: fn(&mut Self) -> Result<Expr>,
    ) -> Result<Expr> {
        let mut expr: Expr = operand(self)?;

        while let Some((token, operator)) = self.match_operator(operators) {
            let right: Expr = operand(self)?;

            expr = Expr::binary(expr, operator, token.line, right);
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr> {
        if let Some((token, operator)) = self.match_operator(UNARY) {
            self.descend()?;

            let right: Expr = self.unary()?;

            self.depth -= 1;

            return Ok(Expr::unary(operator, token.line, right));
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Expr> {
        let Some(token) = self.peek() else {
            return Err(self.error_at_current("Expect expression."));
        };

        let expr: Expr = match (token.token_type, &token.literal) {
            (TokenType::FALSE, _) => Expr::literal(false),
            (TokenType::TRUE, _) => Expr::literal(true),
            (TokenType::NIL, _) => Expr::Literal(Value::Nil),
            (TokenType::NUMBER, Some(Literal::Number(n))) => Expr::literal(n.clone()),
            (TokenType::STRING, Some(Literal::Str(s))) => Expr::literal(*s),

            (TokenType::LEFT_PAREN, _) => {
                self.advance();
                self.descend()?;

                let inner: Expr = self.expression()?;

                self.consume(TokenType::RIGHT_PAREN, "Expect ')' after expression.")?;
                self.depth -= 1;

                return Ok(Expr::grouping(inner));
            }

            _ => return Err(self.error_at(token, "Expect expression.")),
        };

        self.advance();

        Ok(expr)
    }

    // ────────────────────── utility helpers ───────────────────────

    /// Consume the current token if its type appears in `table`, returning
    /// the token together with the operator it maps to.
    fn match_operator<O: Copy>(&mut self, table: &OperatorTable<O>) -> Option<(&'a Token<'a>, O)> {
        let token: &'a Token<'a> = self.peek()?;

        let (_, operator) = table.iter().find(|(tt, _)| *tt == token.token_type)?;

        self.advance();

        Some((token, *operator))
    }

    fn consume(&mut self, ttype: TokenType, message: &str) -> Result<&'a Token<'a>> {
        match self.peek() {
            Some(token) if token.token_type == ttype => {
                self.advance();

                Ok(token)
            }

            _ => Err(self.error_at_current(message)),
        }
    }

    /// Enter one nesting level, failing once [`MAX_DEPTH`] is reached.
    fn descend(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_at_current(&format!(
                "Expression nesting exceeds {} levels.",
                MAX_DEPTH
            )));
        }

        self.depth += 1;

        Ok(())
    }

    #[inline(always)]
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.peek()
            .map_or(true, |t| t.token_type == TokenType::EOF)
    }

    /// Current token; `None` only when the slice lacks a trailing EOF.
    #[inline(always)]
    fn peek(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.current)
    }

    fn error_at(&self, token: &Token<'_>, message: &str) -> LoxError {
        let location: String = if token.token_type == TokenType::EOF {
            " at end".to_owned()
        } else {
            format!(" at '{}'", token.lexeme)
        };

        debug!(
            "Parse failure at token {:?} (line {}): {}",
            token.lexeme, token.line, message
        );

        LoxError::parse(token.line, location, message)
    }

    fn error_at_current(&self, message: &str) -> LoxError {
        match self.peek() {
            Some(token) => self.error_at(token, message),

            None => {
                let line: usize = self.tokens.last().map_or(1, |t| t.line);

                LoxError::parse(line, " at end", message)
            }
        }
    }
}

/// Parse the first expression in `tokens`.
pub fn parse(tokens: &[Token<'_>]) -> Result<Expr> {
    Parser::new(tokens).parse()
}
