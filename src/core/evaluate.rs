//! Evaluation of the pending binary operation.

use super::action::Operation;
use super::number::{canonical, parse_or_zero};
use super::state::CalculatorState;
use std::fmt;

/// Operand text shown after a division by zero.
pub const ERROR_SENTINEL: &str = "Erro";

/// Outcome of applying the pending operation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Evaluation {
    /// A numeric result (possibly infinite on overflow).
    Value(f64),
    /// The divisor was zero.
    DivisionByZero,
    /// An operand did not parse as a number.
    Invalid,
}

impl Evaluation {
    /// String form stored into operands: canonical decimal, the error
    /// sentinel, or empty for "no result".
    pub fn to_operand(&self) -> String {
        match self {
            Self::Value(value) => canonical(*value),
            Self::DivisionByZero => ERROR_SENTINEL.to_string(),
            Self::Invalid => String::new(),
        }
    }

    /// Whether this outcome may be recorded in the history log.
    pub fn is_recordable(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_operand())
    }
}

/// Apply `state.operation` to the previous and current operands.
///
/// Absent or empty operands count as `"0"`. Without an operation the
/// result is `0`.
///
/// ```rust
/// use educalc::core::{evaluate, CalculatorState, Evaluation, Operation};
///
/// let state = CalculatorState {
///     current_operand: "4".to_string(),
///     previous_operand: Some("3".to_string()),
///     operation: Some(Operation::Add),
///     overwrite: false,
/// };
/// assert_eq!(evaluate(&state), Evaluation::Value(7.0));
/// assert_eq!(evaluate(&state).to_operand(), "7");
/// ```
pub fn evaluate(state: &CalculatorState) -> Evaluation {
    let prev = parse_or_zero(state.previous_operand.as_deref());
    let current = parse_or_zero(Some(&state.current_operand));
    if prev.is_nan() || current.is_nan() {
        return Evaluation::Invalid;
    }

    let value = match state.operation {
        Some(Operation::Add) => prev + current,
        Some(Operation::Subtract) => prev - current,
        Some(Operation::Multiply) => prev * current,
        Some(Operation::Divide) => {
            if current == 0.0 {
                return Evaluation::DivisionByZero;
            }
            prev / current
        }
        None => 0.0,
    };

    Evaluation::Value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(prev: &str, op: Operation, current: &str) -> CalculatorState {
        CalculatorState {
            current_operand: current.to_string(),
            previous_operand: Some(prev.to_string()),
            operation: Some(op),
            overwrite: false,
        }
    }

    #[test]
    fn applies_each_operation() {
        assert_eq!(evaluate(&pending("7", Operation::Add, "3")).to_operand(), "10");
        assert_eq!(evaluate(&pending("7", Operation::Subtract, "10")).to_operand(), "-3");
        assert_eq!(evaluate(&pending("2.5", Operation::Multiply, "4")).to_operand(), "10");
        assert_eq!(evaluate(&pending("1", Operation::Divide, "4")).to_operand(), "0.25");
    }

    #[test]
    fn division_by_zero_yields_sentinel() {
        let result = evaluate(&pending("5", Operation::Divide, "0"));
        assert_eq!(result, Evaluation::DivisionByZero);
        assert_eq!(result.to_operand(), ERROR_SENTINEL);
        assert!(!result.is_recordable());
    }

    #[test]
    fn zero_dividend_is_fine() {
        assert_eq!(evaluate(&pending("0", Operation::Divide, "5")), Evaluation::Value(0.0));
    }

    #[test]
    fn unparsable_operand_yields_empty_result() {
        let result = evaluate(&pending(ERROR_SENTINEL, Operation::Add, "1"));
        assert_eq!(result, Evaluation::Invalid);
        assert_eq!(result.to_string(), "");
        assert!(!result.is_recordable());
    }

    #[test]
    fn empty_current_operand_counts_as_zero() {
        assert_eq!(evaluate(&pending("3", Operation::Add, "")), Evaluation::Value(3.0));
        assert_eq!(
            evaluate(&pending("3", Operation::Divide, "")),
            Evaluation::DivisionByZero
        );
    }

    #[test]
    fn missing_operation_yields_zero() {
        let state = CalculatorState {
            current_operand: "9".to_string(),
            previous_operand: Some("4".to_string()),
            operation: None,
            overwrite: false,
        };
        assert_eq!(evaluate(&state).to_operand(), "0");
    }

    #[test]
    fn missing_previous_operand_counts_as_zero() {
        let state = CalculatorState {
            current_operand: "9".to_string(),
            previous_operand: None,
            operation: Some(Operation::Subtract),
            overwrite: false,
        };
        assert_eq!(evaluate(&state), Evaluation::Value(-9.0));
    }
}
