//! The calculator's input state machine.
//!
//! A [`State`] is the pair (input field, trace). [`reduce`] maps a state and
//! one button press to the next state without touching any widget, so every
//! front end renders the same transitions.

use crate::calculator::{is_plain_number, Calculator, Normalization};
use crate::error::CalcError;
use crate::token::{Operator, Token};

/// The expression shown above the input field.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Trace {
    #[default]
    Blank,
    /// `lhs op`, waiting for the right operand.
    Pending { lhs: String, op: Operator },
    /// `lhs op rhs =`, a finished computation.
    Closed {
        lhs: String,
        op: Operator,
        rhs: String,
    },
}

impl Trace {
    /// Rendered text of a blank trace. A single space keeps the label's height.
    pub const BLANK_TEXT: &'static str = " ";

    pub fn render(&self) -> String {
        match self {
            Trace::Blank => Self::BLANK_TEXT.to_string(),
            Trace::Pending { lhs, op } => format!("{} {}", lhs, op),
            Trace::Closed { lhs, op, rhs } => format!("{} {} {} =", lhs, op, rhs),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Trace::Blank)
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, Trace::Closed { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    FirstOperand,
    AwaitingSecond,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    pub input: String,
    pub trace: Trace,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.trace {
            Trace::Closed { .. } => Phase::Closed,
            Trace::Pending { .. } => Phase::AwaitingSecond,
            Trace::Blank if self.input.is_empty() => Phase::Empty,
            Trace::Blank => Phase::FirstOperand,
        }
    }
}

/// Applies one button press.
///
/// Dispatch is first-match in this order: clear, operator or "=" (only with
/// a non-empty input), delete (only with a non-empty input), clear entry,
/// then digits and the decimal point. Anything else leaves the state as is.
/// On error the caller is expected to keep `state`.
pub fn reduce(
    state: &State,
    token: Token,
    normalization: Normalization,
) -> Result<State, CalcError> {
    let mut next = state.clone();

    match token {
        Token::Clear => next = State::new(),
        token if token.is_commit() && !state.input.is_empty() => {
            commit(&mut next, token, normalization)?;
        }
        Token::Delete if !state.input.is_empty() => {
            if next.trace.is_closed() {
                next.trace = Trace::Blank;
            } else {
                next.input.pop();
            }
        }
        Token::ClearEntry => {
            if next.trace.is_closed() {
                next.trace = Trace::Blank;
            }
            next.input.clear();
        }
        Token::Digit(digit) => next.input.push(char::from(b'0' + digit % 10)),
        Token::Point => {
            if !next.input.is_empty() && !next.input.contains('.') {
                next.input.push('.');
            }
        }
        _ => {}
    }

    Ok(next)
}

fn commit(next: &mut State, token: Token, normalization: Normalization) -> Result<(), CalcError> {
    // Pressing the pending operator again folds the typed operand into the
    // input field without closing the trace.
    if let (Trace::Pending { lhs, op }, Token::Operator(pressed)) = (&next.trace, token) {
        if *op == pressed && is_plain_number(&next.input) {
            let value = Calculator::evaluate(
                Calculator::parse_operand(lhs)?,
                Calculator::parse_operand(&next.input)?,
                pressed,
            )?;
            next.input = Calculator::format_result(value, normalization);
            return Ok(());
        }
    }

    match (token, &next.trace) {
        (Token::Operator(op), Trace::Blank) => {
            let lhs = std::mem::take(&mut next.input);
            next.trace = Trace::Pending { lhs, op };
        }
        (Token::Equals, Trace::Pending { lhs, op }) => {
            let value = Calculator::evaluate(
                Calculator::parse_operand(lhs)?,
                Calculator::parse_operand(&next.input)?,
                *op,
            )?;
            next.trace = Trace::Closed {
                lhs: lhs.clone(),
                op: *op,
                rhs: std::mem::take(&mut next.input),
            };
            next.input = Calculator::format_result(value, normalization);
        }
        _ => {}
    }

    Ok(())
}
