//! EduCalc: a basic-arithmetic calculator core with a persisted history.
//!
//! The calculator follows a "pure core, imperative shell" layout. Input
//! handling, evaluation and formatting are pure functions over immutable
//! values; loading and saving the history happens at the edges, behind a
//! storage port.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState`, replaced wholesale on every action
//! - **Reducer**: `reduce(state, action)`, total over all inputs
//! - **History**: bounded, newest-first log of completed evaluations
//! - **Storage**: key/value port the history is persisted through
//!
//! # Example
//!
//! ```rust
//! use educalc::core::{format_operand, reduce, Action, CalculatorState, NumberLocale, Operation};
//!
//! let state = CalculatorState::initial();
//! let state = reduce(&state, &Action::AddDigit('3'));
//! let state = reduce(&state, &Action::ChooseOperation(Some(Operation::Add)));
//! let state = reduce(&state, &Action::AddDigit('4'));
//! let state = reduce(&state, &Action::ChooseOperation(Some(Operation::Multiply)));
//!
//! assert_eq!(state.previous_operand.as_deref(), Some("7"));
//! assert_eq!(state.current_operand, "");
//! assert_eq!(format_operand(Some("1234.5"), &NumberLocale::pt_br()), "1.234,5");
//! ```

pub mod calculator;
pub mod config;
pub mod core;
pub mod history;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use crate::calculator::{Calculator, DisplayText};
pub use crate::config::Config;
pub use crate::core::{reduce, Action, CalculatorState, Operation, State};
pub use crate::history::{HistoryItem, HistoryLog};
pub use crate::storage::Storage;
pub use crate::store::HistoryStore;
