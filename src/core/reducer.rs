//! Pure transition function for calculator input.
//!
//! `reduce` maps `(state, action)` to the next state. It is total: every
//! action yields a state, and inputs that make no sense in the current
//! state return it unchanged.

use super::action::{Action, Operation};
use super::evaluate::evaluate;
use super::number::{canonical, parse_operand};
use super::state::CalculatorState;

/// Compute the state that follows `action`.
///
/// # Example
///
/// ```rust
/// use educalc::core::{reduce, Action, CalculatorState, Operation};
///
/// let actions = [
///     Action::AddDigit('7'),
///     Action::ChooseOperation(Some(Operation::Add)),
///     Action::AddDigit('3'),
///     Action::Evaluate,
/// ];
/// let state = actions
///     .iter()
///     .fold(CalculatorState::initial(), |state, action| reduce(&state, action));
///
/// assert_eq!(state.current_operand, "10");
/// assert!(state.overwrite);
/// ```
pub fn reduce(state: &CalculatorState, action: &Action) -> CalculatorState {
    match action {
        Action::AddDigit(digit) => add_digit(state, *digit),
        Action::ChooseOperation(operation) => choose_operation(state, *operation),
        Action::Clear => CalculatorState::initial(),
        Action::Delete => delete(state),
        Action::Evaluate => evaluate_pending(state),
        Action::Percentage => percentage(state),
        Action::ToggleSign => toggle_sign(state),
    }
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !digit.is_ascii_digit() && digit != '.' {
        return state.clone();
    }
    if state.overwrite {
        return CalculatorState {
            current_operand: digit.to_string(),
            overwrite: false,
            ..state.clone()
        };
    }
    if digit == '0' && state.current_operand == "0" {
        return state.clone();
    }
    if digit == '.' && state.current_operand.contains('.') {
        return state.clone();
    }

    let mut current_operand = state.current_operand.clone();
    current_operand.push(digit);
    CalculatorState {
        current_operand,
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Option<Operation>) -> CalculatorState {
    match &state.previous_operand {
        None => CalculatorState {
            previous_operand: Some(state.current_operand.clone()),
            operation,
            current_operand: String::new(),
            ..state.clone()
        },
        // Operator pressed again: fold the pending expression into the
        // left-hand operand.
        Some(_) => CalculatorState {
            previous_operand: Some(evaluate(state).to_operand()),
            operation,
            current_operand: String::new(),
            ..state.clone()
        },
    }
}

fn delete(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: "0".to_string(),
            overwrite: false,
            ..state.clone()
        };
    }
    if state.current_operand.chars().count() == 1 {
        return CalculatorState {
            current_operand: "0".to_string(),
            ..state.clone()
        };
    }

    let mut current_operand = state.current_operand.clone();
    current_operand.pop();
    CalculatorState {
        current_operand,
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if state.operation.is_none() || state.previous_operand.is_none() {
        return state.clone();
    }

    CalculatorState {
        current_operand: evaluate(state).to_operand(),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

fn percentage(state: &CalculatorState) -> CalculatorState {
    CalculatorState {
        current_operand: canonical(parse_operand(&state.current_operand) / 100.0),
        overwrite: true,
        ..state.clone()
    }
}

fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    if state.current_operand.is_empty() {
        return state.clone();
    }
    let current = parse_operand(&state.current_operand);
    if current == 0.0 {
        return state.clone();
    }

    CalculatorState {
        current_operand: canonical(-current),
        ..state.clone()
    }
}
