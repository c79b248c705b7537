//! Centralised error hierarchy for the **Lox expression interpreter**.
//!
//! The scanner, parser and evaluator convert their failure modes into one of
//! the variants defined here. Lexical and syntactic failures are *syntax
//! errors*; evaluation failures are *runtime errors*. The two kinds map to
//! different process exit statuses (see [`LoxError::exit_code`]).
//!
//! The module **does not** print diagnostics itself.

use thiserror::Error;

use log::info;

/// Exit status for malformed input (scan or parse failure).
pub const EXIT_SYNTAX: i32 = 65;

/// Exit status for a failed evaluation.
pub const EXIT_RUNTIME: i32 = 70;

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoxError {
    /// Lexical (scanner) error with source line information.
    #[error("[line {line}] Error: {message}")]
    Lex {
        /// Human‑readable description.
        message: String,

        /// 1‑based line where the error occurred.
        line: usize,
    },

    /// Syntactic (parser) error. `location` is either empty, ` at end` or
    /// ` at '<lexeme>'`.
    #[error("[line {line}] Error{location}: {message}")]
    Parse {
        message: String,
        line: usize,
        location: String,
    },

    /// Runtime evaluation error, tagged with the operator's line.
    #[error("{message}\n[line {line}]")]
    Runtime { message: String, line: usize },
}

impl LoxError {
    /// Helper constructor for the **scanner**.
    pub fn lex<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Lex error: line={}, msg={}", line, message);

        LoxError::Lex { message, line }
    }

    /// Helper constructor for the **parser**.
    pub fn parse<S: Into<String>, L: Into<String>>(line: usize, location: L, msg: S) -> Self {
        let message: String = msg.into();
        let location: String = location.into();

        info!(
            "Creating Parse error: line={}, location={:?}, msg={}",
            line, location, message
        );

        LoxError::Parse {
            message,
            line,
            location,
        }
    }

    /// Helper constructor for the **interpreter**.
    pub fn runtime<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Runtime error: line={}, msg={}", line, message);

        LoxError::Runtime { message, line }
    }

    /// `true` for errors raised before evaluation starts.
    pub fn is_syntax(&self) -> bool {
        matches!(self, LoxError::Lex { .. } | LoxError::Parse { .. })
    }

    /// Process exit status the caller should terminate with.
    pub fn exit_code(&self) -> i32 {
        if self.is_syntax() {
            EXIT_SYNTAX
        } else {
            EXIT_RUNTIME
        }
    }

    /// Source line the error is attributed to.
    pub fn line(&self) -> usize {
        match self {
            LoxError::Lex { line, .. }
            | LoxError::Parse { line, .. }
            | LoxError::Runtime { line, .. } => *line,
        }
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, LoxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_each_kind() {
        assert_eq!(
            LoxError::lex(3, "Unexpected character: $").to_string(),
            "[line 3] Error: Unexpected character: $"
        );
        assert_eq!(
            LoxError::parse(1, " at ')'", "Expect expression.").to_string(),
            "[line 1] Error at ')': Expect expression."
        );
        assert_eq!(
            LoxError::runtime(2, "Operands must be numbers.").to_string(),
            "Operands must be numbers.\n[line 2]"
        );
    }

    #[test]
    fn exit_codes_split_syntax_from_runtime() {
        assert_eq!(LoxError::lex(1, "x").exit_code(), 65);
        assert_eq!(LoxError::parse(1, " at end", "x").exit_code(), 65);
        assert_eq!(LoxError::runtime(1, "x").exit_code(), 70);
        assert!(!LoxError::runtime(1, "x").is_syntax());
    }
}
