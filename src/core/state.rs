//! Calculator state and the `State` trait used to inspect it.
//!
//! `CalculatorState` is an immutable value: the reducer never mutates it,
//! it returns a replacement. The calculator's mode is not stored; it is
//! derived from which optional fields are set.

use super::action::Operation;
use super::evaluate::ERROR_SENTINEL;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values that describe the calculator's position.
///
/// All methods are pure - no side effects.
///
/// # Example
///
/// ```rust
/// use educalc::core::{CalculatorState, State};
///
/// let state = CalculatorState::initial();
/// assert_eq!(state.name(), "EnteringFirst");
/// assert!(!state.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state shows an error to the user.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

/// What the calculator is currently waiting for.
///
/// This is a read-only view over [`CalculatorState`]; the reducer works on
/// field presence directly.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Mode {
    /// Typing the left-hand operand (or the only operand).
    EnteringFirst,
    /// An operation is pending; typing the right-hand operand.
    AwaitingSecond,
    /// A result or percentage is shown; the next digit starts a new number.
    ShowingResult,
}

impl State for Mode {
    fn name(&self) -> &str {
        match self {
            Self::EnteringFirst => "EnteringFirst",
            Self::AwaitingSecond => "AwaitingSecond",
            Self::ShowingResult => "ShowingResult",
        }
    }
}

/// Display state of the calculator.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Operand being typed. `"0"` is the canonical zero, `""` means
    /// "ready for the right-hand operand".
    pub current_operand: String,
    /// Left-hand operand once an operation has been chosen.
    pub previous_operand: Option<String>,
    /// Pending binary operation.
    pub operation: Option<Operation>,
    /// The next digit replaces `current_operand` instead of extending it.
    pub overwrite: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CalculatorState {
    /// The state on startup and after CLEAR.
    pub fn initial() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: None,
            operation: None,
            overwrite: false,
        }
    }

    /// Derive the calculator's mode from field presence.
    ///
    /// ```rust
    /// use educalc::core::{reduce, Action, CalculatorState, Mode, Operation};
    ///
    /// let state = reduce(&CalculatorState::initial(), &Action::AddDigit('4'));
    /// assert_eq!(state.mode(), Mode::EnteringFirst);
    ///
    /// let state = reduce(&state, &Action::ChooseOperation(Some(Operation::Add)));
    /// assert_eq!(state.mode(), Mode::AwaitingSecond);
    /// ```
    pub fn mode(&self) -> Mode {
        if self.previous_operand.is_some() || self.operation.is_some() {
            Mode::AwaitingSecond
        } else if self.overwrite {
            Mode::ShowingResult
        } else {
            Mode::EnteringFirst
        }
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        match self.mode() {
            Mode::EnteringFirst => "EnteringFirst",
            Mode::AwaitingSecond => "AwaitingSecond",
            Mode::ShowingResult => "ShowingResult",
        }
    }

    fn is_error(&self) -> bool {
        self.current_operand == ERROR_SENTINEL
    }
}
