use crate::expr::Expr;
use crate::value::{format_number_literal, Value};

/// Converts an expression to the CodeCrafters/Crafting‑Interpreters
/// prefix form: `(+ 1.0 (* 2.0 3.0))`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(expr: &Expr) -> String {
        match expr {
            // ── literals ────────────────────────────────────────────────
            Expr::Literal(value) => match value {
                Value::Bool(b) => b.to_string(),

                Value::Nil => "nil".into(),

                Value::String(s) => s.clone(),

                // 3 → 3.0
                Value::Number(n) => format_number_literal(n),
            },

            // ── grouping ────────────────────────────────────────────────
            Expr::Grouping(inner) => format!("(group {})", Self::print(inner)),

            // ── unary operator ──────────────────────────────────────────
            Expr::Unary {
                operator, right, ..
            } => format!("({} {})", operator, Self::print(right)),

            // ── binary operator ─────────────────────────────────────────
            Expr::Binary { .. } => Self::print_chain(expr),
        }
    }

    /// `(- (- 1.0 2.0) 3.0)`: every opening paren of the chain comes first,
    /// then the leftmost operand, then each right operand closes one paren.
    fn print_chain(expr: &Expr) -> String {
        let (leftmost, steps) = expr.unwind_left();
        let mut out: String = String::new();

        for (operator, _, _) in steps.iter().rev() {
            out.push('(');
            out.push_str(operator.symbol());
            out.push(' ');
        }

        out.push_str(&Self::print(leftmost));

        for (_, _, right) in &steps {
            out.push(' ');
            out.push_str(&Self::print(right));
            out.push(')');
        }

        out
    }
}
