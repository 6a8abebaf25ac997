//! Property-based tests for the input state machine

use lazy_calc::{reduce, CalcError, Calculator, Normalization, Operator, State, Token};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Any button on the keypad
fn token_strategy() -> impl Strategy<Value = Token> {
    (0usize..Token::GRID.len()).prop_map(|index| Token::GRID[index])
}

fn apply(state: &State, token: Token) -> State {
    reduce(state, token, Normalization::Truncating).unwrap_or_else(|_| state.clone())
}

fn apply_all(tokens: &[Token]) -> State {
    tokens.iter().fold(State::new(), |state, &token| apply(&state, token))
}

proptest! {
    /// Digits with one interior point show up exactly as typed
    #[test]
    fn prop_typed_digits_concatenate(
        whole in prop::collection::vec(digit_strategy(), 1..8),
        fraction in prop::option::of(prop::collection::vec(digit_strategy(), 0..6)),
    ) {
        let mut tokens: Vec<Token> = whole.iter().map(|&d| Token::Digit(d)).collect();
        let mut expected: String = whole.iter().map(|d| d.to_string()).collect();
        if let Some(fraction) = &fraction {
            tokens.push(Token::Point);
            expected.push('.');
            tokens.extend(fraction.iter().map(|&d| Token::Digit(d)));
            expected.extend(fraction.iter().map(|d| d.to_string()));
        }

        let state = apply_all(&tokens);
        prop_assert_eq!(state.input, expected);
        prop_assert!(state.trace.is_blank());
    }

    /// Division by zero always fails, any other divisor divides
    #[test]
    fn prop_divide_by_zero(a in -1e9f64..1e9f64, b in -1e9f64..1e9f64) {
        prop_assert_eq!(
            Calculator::evaluate(a, 0.0, Operator::Divide),
            Err(CalcError::DivisionByZero)
        );
        prop_assume!(b != 0.0);
        prop_assert_eq!(Calculator::evaluate(a, b, Operator::Divide), Ok(a / b));
    }

    /// Clear returns to the initial state from anywhere
    #[test]
    fn prop_clear_resets(tokens in prop::collection::vec(token_strategy(), 0..30)) {
        let state = apply_all(&tokens);
        prop_assert_eq!(apply(&state, Token::Clear), State::new());
    }

    /// The input never holds more than one decimal point, and never starts with one
    #[test]
    fn prop_single_decimal_point(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut state = State::new();
        for token in tokens {
            state = apply(&state, token);
            prop_assert!(state.input.matches('.').count() <= 1);
            prop_assert!(!state.input.starts_with('.'));
        }
    }

    /// A closed trace ignores further operators and "="
    #[test]
    fn prop_closed_trace_ignores_commits(
        lhs in prop::collection::vec(digit_strategy(), 1..5),
        op in prop::sample::select(Operator::ALL.to_vec()),
        rhs in prop::collection::vec(1u8..=9u8, 1..5),
    ) {
        let mut tokens: Vec<Token> = lhs.into_iter().map(Token::Digit).collect();
        tokens.push(Token::Operator(op));
        tokens.extend(rhs.into_iter().map(Token::Digit));
        tokens.push(Token::Equals);

        let state = apply_all(&tokens);
        prop_assert!(state.trace.is_closed());
        for token in Token::GRID.into_iter().filter(|t| t.is_commit()) {
            prop_assert_eq!(apply(&state, token), state.clone());
        }
    }
}
