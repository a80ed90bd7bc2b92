//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - `CalculatorState` and its derived `Mode`
//! - Typed actions and the untyped form a UI layer sends
//! - The operand formatter and the evaluator
//! - The reducer that maps (state, action) to the next state
//!
//! All logic in this module is pure (no side effects, no clock, no I/O).

mod action;
mod evaluate;
mod format;
mod number;
mod reducer;
mod state;

pub use action::{Action, ActionKind, Operation, RawAction};
pub use evaluate::{evaluate, Evaluation, ERROR_SENTINEL};
pub use format::{format_operand, NumberLocale};
pub use number::{canonical, parse_operand};
pub use reducer::reduce;
pub use state::{CalculatorState, Mode, State};
