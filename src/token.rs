use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulo,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Modulo => "%",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single calculator button, identified by the text printed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Always in `0..=9`.
    Digit(u8),
    Point,
    Operator(Operator),
    Equals,
    Clear,
    ClearEntry,
    Delete,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Token {
    /// Buttons in row-major order for the 5x4 keypad.
    pub const GRID: [Token; 20] = [
        Token::Operator(Operator::Modulo),
        Token::Operator(Operator::Divide),
        Token::Clear,
        Token::ClearEntry,
        Token::Digit(7),
        Token::Digit(8),
        Token::Digit(9),
        Token::Delete,
        Token::Digit(4),
        Token::Digit(5),
        Token::Digit(6),
        Token::Operator(Operator::Multiply),
        Token::Digit(1),
        Token::Digit(2),
        Token::Digit(3),
        Token::Operator(Operator::Add),
        Token::Point,
        Token::Digit(0),
        Token::Operator(Operator::Subtract),
        Token::Equals,
    ];

    pub const GRID_COLUMNS: usize = 4;

    pub fn label(self) -> &'static str {
        match self {
            Token::Digit(d) => DIGIT_LABELS[usize::from(d % 10)],
            Token::Point => ".",
            Token::Operator(op) => op.symbol(),
            Token::Equals => "=",
            Token::Clear => "C",
            Token::ClearEntry => "CE",
            Token::Delete => "DEL",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::GRID.into_iter().find(|token| token.label() == label)
    }

    /// Operators and "=" commit or extend the pending operation.
    pub fn is_commit(self) -> bool {
        matches!(self, Token::Operator(_) | Token::Equals)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown button: {0}")]
pub struct ParseTokenError(pub String);

impl FromStr for Token {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Token::from_label(s).ok_or_else(|| ParseTokenError(s.to_string()))
    }
}
