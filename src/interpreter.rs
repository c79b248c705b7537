use log::debug;
use bigdecimal::{BigDecimal, Zero};

use crate::error::{LoxError, Result};
use crate::expr::{BinaryOp, Expr, UnaryOp};
use crate::value::Value;

const NUMBER_OPERAND: &str = "Operand must be a number.";
const NUMBER_OPERANDS: &str = "Operands must be numbers.";
const PLUS_OPERANDS: &str = "Operands must be two numbers or two strings.";
const DIVISION_BY_ZERO: &str = "Division by zero is not allowed.";

/// Significant digits kept in a quotient. Every other operation is exact.
pub const DIVISION_PRECISION: u64 = 50;

/// Tree‑walking evaluator. It holds no state, so one instance can evaluate
/// any number of expressions, from any number of threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an expression and returns a Value.
    pub fn evaluate(&self, expr: &Expr) -> Result<Value> {
        let value: Value = match expr {
            Expr::Literal(value) => value.clone(),

            Expr::Grouping(inner) => self.evaluate(inner)?,

            Expr::Unary {
                operator,
                line,
                right,
            } => self.evaluate_unary(*operator, *line, right)?,

            Expr::Binary { .. } => self.evaluate_chain(expr)?,
        };

        debug!("Expression evaluated to: {}", value);

        Ok(value)
    }

    fn evaluate_unary(&self, op: UnaryOp, line: usize, right: &Expr) -> Result<Value> {
        let right_val: Value = self.evaluate(right)?;

        match (op, right_val) {
            (UnaryOp::Bang, value) => Ok(Value::Bool(!is_truthy(&value))),

            (UnaryOp::Minus, Value::Number(n)) => Ok(Value::Number(-n)),

            (UnaryOp::Minus, other) => {
                debug!("Cannot negate {:?}", other);

                Err(LoxError::runtime(line, NUMBER_OPERAND))
            }
        }
    }

    /// Folds a left‑leaning binary chain in a loop. Each left operand is
    /// evaluated completely before its right one, exactly as recursion would.
    fn evaluate_chain(&self, expr: &Expr) -> Result<Value> {
        let (leftmost, steps) = expr.unwind_left();

        let mut acc: Value = self.evaluate(leftmost)?;

        for (op, line, right) in steps {
            let right_val: Value = self.evaluate(right)?;

            acc = self.evaluate_binary(acc, op, line, right_val)?;
        }

        Ok(acc)
    }

    fn evaluate_binary(&self, left_val: Value, op: BinaryOp, line: usize, right_val: Value) -> Result<Value> {
        debug!("Applying {} to {:?} and {:?}", op, left_val, right_val);

        match op {
            BinaryOp::EqualEqual => Ok(Value::Bool(is_equal(&left_val, &right_val))),

            BinaryOp::BangEqual => Ok(Value::Bool(!is_equal(&left_val, &right_val))),

            BinaryOp::Plus => match (left_val, right_val) {
                (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),

                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),

                _ => Err(LoxError::runtime(line, PLUS_OPERANDS)),
            },

            BinaryOp::Minus => {
                let (a, b) = numbers(left_val, right_val, line)?;

                Ok(Value::Number(a - b))
            }

            BinaryOp::Star => {
                let (a, b) = numbers(left_val, right_val, line)?;

                Ok(Value::Number(a * b))
            }

            BinaryOp::Slash => {
                let (a, b) = numbers(left_val, right_val, line)?;

                if b.is_zero() {
                    return Err(LoxError::runtime(line, DIVISION_BY_ZERO));
                }

                Ok(Value::Number((a / b).with_prec(DIVISION_PRECISION)))
            }

            BinaryOp::Greater => compare(left_val, right_val, line, |a, b| a > b),

            BinaryOp::GreaterEqual => compare(left_val, right_val, line, |a, b| a >= b),

            BinaryOp::Less => compare(left_val, right_val, line, |a, b| a < b),

            BinaryOp::LessEqual => compare(left_val, right_val, line, |a, b| a <= b),
        }
    }
}

/// Both operands as numbers, or the shared type error.
fn numbers(left: Value, right: Value, line: usize) -> Result<(BigDecimal, BigDecimal)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((a, b)),

        _ => Err(LoxError::runtime(line, NUMBER_OPERANDS)),
    }
}

fn compare(left: Value, right: Value, line: usize, cmp: fn(&BigDecimal, &BigDecimal) -> bool) -> Result<Value> {
    let (a, b) = numbers(left, right, line)?;

    Ok(Value::Bool(cmp(&a, &b)))
}

/// `nil` and `false` are falsy; everything else, `0` and `""` included, is
/// truthy.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Nil | Value::Bool(false))
}

/// Lox equality: same variant and same contents, never a coercion.
pub fn is_equal(left: &Value, right: &Value) -> bool {
    left == right
}

/// Evaluate `expr` with a fresh [`Interpreter`].
pub fn evaluate(expr: &Expr) -> Result<Value> {
    Interpreter::new().evaluate(expr)
}
