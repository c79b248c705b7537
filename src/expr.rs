use std::fmt;

use crate::value::Value;

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `!`, logical not
    Bang,

    /// `-`, numeric negation
    Minus,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Bang => "!",
            UnaryOp::Minus => "-",
        }
    }
}

/// Infix operators, in no particular precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Plus,
    Minus,
    Star,
    Slash,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    EqualEqual,
    BangEqual,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Star => "*",
            BinaryOp::Slash => "/",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::EqualEqual => "==",
            BinaryOp::BangEqual => "!=",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// **Abstract‑Syntax‑Tree node** for a Lox expression.
///
/// The tree owns all of its data, so it outlives the token buffer it was
/// parsed from. Operator nodes remember the line of their operator token for
/// runtime error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant: number, string, `true`, `false`, or `nil`.
    Literal(Value),

    /// Prefix operator expression: `!ready`, `-42`.
    Unary {
        operator: UnaryOp,
        line: usize,
        right: Box<Expr>,
    },

    /// Infix operator expression: `a + b`, `x <= y`.
    Binary {
        left: Box<Expr>,
        operator: BinaryOp,
        line: usize,
        right: Box<Expr>,
    },

    /// Parenthesised sub‑expression.
    Grouping(Box<Expr>),
}

impl Expr {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn unary(operator: UnaryOp, line: usize, right: Expr) -> Self {
        Expr::Unary {
            operator,
            line,
            right: Box::new(right),
        }
    }

    pub fn binary(left: Expr, operator: BinaryOp, line: usize, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            line,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }
}

/// One step of a binary chain: `operator right`, applied to everything on
/// its left.
pub type ChainStep<'e> = (BinaryOp, usize, &'e Expr);

impl Expr {
    /// Splits a left‑leaning binary chain into its leftmost operand and the
    /// steps applied to it, innermost first. `1 - 2 - 3` unwinds to `1` and
    /// `[(-, 2), (-, 3)]`. Any other node unwinds to itself with no steps.
    ///
    /// Runs in a loop, so chains of any length are walked without recursion.
    pub fn unwind_left(&self) -> (&Expr, Vec<ChainStep<'_>>) {
        let mut steps: Vec<ChainStep<'_>> = Vec::new();
        let mut leftmost: &Expr = self;

        while let Expr::Binary {
            left,
            operator,
            line,
            right,
        } = leftmost
        {
            steps.push((*operator, *line, &**right));
            leftmost = &**left;
        }

        steps.reverse();

        (leftmost, steps)
    }
}

/// Long binary chains nest on the left; dropping them one box at a time keeps
/// the destructor off the call stack.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut next: Option<Expr> = take_left(self);

        while let Some(mut expr) = next {
            next = take_left(&mut expr);
        }
    }
}

fn take_left(expr: &mut Expr) -> Option<Expr> {
    match expr {
        Expr::Binary { left, .. } => Some(std::mem::replace(&mut **left, Expr::Literal(Value::Nil))),

        _ => None,
    }
}
