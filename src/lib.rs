//! Scanner, parser and tree‑walking evaluator for Lox expressions.
//!
//! Data flows one way: source text → [`scan`] → tokens → [`parse`] → [`Expr`]
//! → [`evaluate`] → [`Value`]. Each phase reports failure through its return
//! value; nothing is kept in global state.

pub mod ast_printer;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod value;

pub use ast_printer::AstPrinter;
pub use error::{LoxError, Result};
pub use expr::{BinaryOp, Expr, UnaryOp};
pub use interpreter::{evaluate, Interpreter};
pub use parser::{parse, Parser};
pub use scanner::{scan, ScanOutcome, Scanner};
pub use token::{Literal, Token, TokenType};
pub use value::Value;
