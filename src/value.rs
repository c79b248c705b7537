use std::fmt;

use bigdecimal::{BigDecimal, Zero};

/// A runtime value produced by the interpreter.
///
/// Equality is structural: values of different variants are never equal and
/// numbers compare by magnitude (`1.0 == 1`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(BigDecimal),
    String(String),
    Bool(bool),
    Nil,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", format_number(n)),

            Value::String(s) => write!(f, "{}", s),

            Value::Bool(b) => write!(f, "{}", b),

            Value::Nil => write!(f, "nil"),
        }
    }
}

impl From<BigDecimal> for Value {
    fn from(n: BigDecimal) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

/// Strip trailing zeros and the sign of zero.
fn canonical(n: &BigDecimal) -> BigDecimal {
    if n.is_zero() {
        BigDecimal::zero()
    } else {
        n.normalized()
    }
}

/// Positional notation, never an exponent. `integral_suffix` is appended when
/// the value has no fractional digits.
fn render(n: &BigDecimal, integral_suffix: &str) -> String {
    let (mantissa, scale) = canonical(n).into_bigint_and_exponent();
    let text: String = mantissa.to_string();

    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text.as_str()),
    };

    if scale <= 0 {
        let zeros: String = "0".repeat(scale.unsigned_abs() as usize);

        return format!("{}{}{}{}", sign, digits, zeros, integral_suffix);
    }

    // 0.05 is mantissa 5 at scale 2: pad to "005" before splitting.
    let scale: usize = scale as usize;
    let padded: String = format!("{:0>width$}", digits, width = scale + 1);
    let (whole, fraction) = padded.split_at(padded.len() - scale);

    format!("{}{}.{}", sign, whole, fraction)
}

/// Renders a number the way `evaluate` prints it: `3`, `2.5`, `-0.125`.
pub fn format_number(n: &BigDecimal) -> String {
    render(n, "")
}

/// Renders a number literal the way `tokenize` and `parse` print it: integral
/// values keep a `.0` suffix (`3.0`), fractional ones are unchanged (`2.5`).
pub fn format_number_literal(n: &BigDecimal) -> String {
    render(n, ".0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn values_drop_integral_fraction() {
        assert_eq!(format_number(&dec("3")), "3");
        assert_eq!(format_number(&dec("3.000")), "3");
        assert_eq!(format_number(&dec("2.50")), "2.5");
        assert_eq!(format_number(&dec("-0.125")), "-0.125");
        assert_eq!(format_number(&dec("-0.0")), "0");
        assert_eq!(format_number(&dec("1200")), "1200");
    }

    #[test]
    fn literals_keep_one_fractional_digit() {
        assert_eq!(format_number_literal(&dec("42")), "42.0");
        assert_eq!(format_number_literal(&dec("1234.1234")), "1234.1234");
        assert_eq!(format_number_literal(&dec("200.00")), "200.0");
        assert_eq!(format_number_literal(&dec("0.0")), "0.0");
        assert_eq!(format_number_literal(&dec("-7")), "-7.0");
    }

    #[test]
    fn wide_values_never_use_exponents() {
        let large: String = format!("1{}", "0".repeat(40));
        let small: String = format!("0.{}1", "0".repeat(40));

        assert_eq!(format_number(&dec(&large)), large);
        assert_eq!(format_number_literal(&dec(&large)), format!("{}.0", large));
        assert_eq!(format_number(&dec(&small)), small);
        assert_eq!(format_number(&dec("-0.05")), "-0.05");
    }

    #[test]
    fn display_covers_every_variant() {
        assert_eq!(Value::from(dec("7.0")).to_string(), "7");
        assert_eq!(Value::from("hello").to_string(), "hello");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::Nil.to_string(), "nil");
    }

    #[test]
    fn equality_never_coerces() {
        assert_eq!(Value::from(dec("1.0")), Value::from(dec("1")));
        assert_ne!(Value::from("1"), Value::from(dec("1")));
        assert_ne!(Value::Nil, Value::from(false));
    }
}
