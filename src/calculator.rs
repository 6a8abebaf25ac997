use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::token::Operator;

/// How a computed value is turned back into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Integer text whenever `value - trunc(value) <= 0`. Negative fractional
    /// results therefore lose their fraction (`-2.5` shows as `-2`).
    #[default]
    Truncating,
    /// Integer text only when the fractional part is exactly zero.
    Exact,
}

pub struct Calculator;

impl Calculator {
    pub fn evaluate(lhs: f64, rhs: f64, op: Operator) -> Result<f64, CalcError> {
        let value = match op {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
            // f64 `%` keeps the sign of the dividend, like C's fmod.
            Operator::Modulo => lhs % rhs,
        };
        Ok(value)
    }

    /// Evaluates with an operator given as button text. Unknown symbols
    /// produce NaN rather than an error.
    pub fn evaluate_symbol(lhs: f64, rhs: f64, symbol: &str) -> Result<f64, CalcError> {
        match Operator::from_symbol(symbol) {
            Some(op) => Self::evaluate(lhs, rhs, op),
            None => Ok(f64::NAN),
        }
    }

    pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
        text.trim()
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidOperand(text.to_string()))
    }

    pub fn format_result(value: f64, normalization: Normalization) -> String {
        let integral = match normalization {
            Normalization::Truncating => value - value.trunc() <= 0.0,
            Normalization::Exact => value.is_finite() && value.fract() == 0.0,
        };

        if integral {
            // `+ 0.0` folds negative zero so "-0" never shows up
            format!("{}", value.trunc() + 0.0)
        } else {
            format!("{}", value)
        }
    }
}

/// Digits with at most one interior decimal point, e.g. `12` or `3.25`.
pub fn is_plain_number(text: &str) -> bool {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    all_digits(whole) && fraction.map_or(true, all_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_calculation() {
        assert_eq!(Calculator::evaluate(6.0, 3.0, Operator::Add), Ok(9.0));
        assert_eq!(Calculator::evaluate(6.0, 3.0, Operator::Subtract), Ok(3.0));
        assert_eq!(Calculator::evaluate(6.0, 3.0, Operator::Multiply), Ok(18.0));
        assert_eq!(Calculator::evaluate(6.0, 3.0, Operator::Divide), Ok(2.0));
        assert_eq!(Calculator::evaluate(6.0, 3.0, Operator::Modulo), Ok(0.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Calculator::evaluate(5.0, 0.0, Operator::Divide),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Calculator::evaluate(0.0, -0.0, Operator::Divide),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_modulo_follows_dividend_sign() {
        assert_eq!(Calculator::evaluate(-7.0, 3.0, Operator::Modulo), Ok(-1.0));
        assert!(Calculator::evaluate(7.0, 0.0, Operator::Modulo).unwrap().is_nan());
    }

    #[test]
    fn test_unknown_symbol_is_nan() {
        assert!(Calculator::evaluate_symbol(1.0, 2.0, "^").unwrap().is_nan());
        assert_eq!(Calculator::evaluate_symbol(1.0, 2.0, "+"), Ok(3.0));
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(Calculator::parse_operand("12.5"), Ok(12.5));
        assert_eq!(Calculator::parse_operand("-3"), Ok(-3.0));
        assert_eq!(
            Calculator::parse_operand("NaN5"),
            Err(CalcError::InvalidOperand("NaN5".to_string()))
        );
    }

    #[test]
    fn test_format_result_truncating() {
        let mode = Normalization::Truncating;
        assert_eq!(Calculator::format_result(8.0, mode), "8");
        assert_eq!(Calculator::format_result(3.5, mode), "3.5");
        assert_eq!(Calculator::format_result(-2.5, mode), "-2");
        assert_eq!(Calculator::format_result(-0.0, mode), "0");
        assert_eq!(Calculator::format_result(f64::NAN, mode), "NaN");
        assert_eq!(Calculator::format_result(f64::INFINITY, mode), "inf");
    }

    #[test]
    fn test_format_result_exact() {
        let mode = Normalization::Exact;
        assert_eq!(Calculator::format_result(-2.5, mode), "-2.5");
        assert_eq!(Calculator::format_result(-4.0, mode), "-4");
        assert_eq!(Calculator::format_result(1e16, mode), "10000000000000000");
    }

    #[test]
    fn test_is_plain_number() {
        assert!(is_plain_number("10"));
        assert!(is_plain_number("0.25"));
        assert!(!is_plain_number("5."));
        assert!(!is_plain_number(".5"));
        assert!(!is_plain_number("-3"));
        assert!(!is_plain_number("1.2.3"));
        assert!(!is_plain_number(""));
    }
}
