//! The calculator shell: state, history and display in one place.
//!
//! `Calculator` owns the current [`CalculatorState`] and a
//! [`HistoryStore`]. Each dispatched action is processed to completion
//! (history entry, persistence, state transition) before `dispatch`
//! returns.

use crate::config::Config;
use crate::core::{format_operand, reduce, Action, CalculatorState, RawAction, State};
use crate::history::{entry_for, HistoryLog};
use crate::storage::Storage;
use crate::store::HistoryStore;
use chrono::Utc;
use tracing::debug;

/// Text shown in the calculator's display area.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DisplayText {
    /// Formatted current operand
    pub primary: String,
    /// Formatted previous operand and pending operator, e.g. `"1.234 +"`
    pub secondary: String,
}

/// Calculator with a persisted history.
///
/// # Example
///
/// ```rust
/// use educalc::calculator::Calculator;
/// use educalc::config::Config;
/// use educalc::core::{Action, Operation};
/// use educalc::storage::MemoryStorage;
///
/// let mut calc = Calculator::new(Config::default(), MemoryStorage::new());
/// calc.dispatch(Action::AddDigit('7'));
/// calc.dispatch(Action::ChooseOperation(Some(Operation::Add)));
/// calc.dispatch(Action::AddDigit('3'));
/// calc.dispatch(Action::Evaluate);
///
/// assert_eq!(calc.display().primary, "10");
/// assert_eq!(calc.history().items()[0].expression, "7 + 3");
/// ```
#[derive(Debug)]
pub struct Calculator<S: Storage> {
    config: Config,
    state: CalculatorState,
    history: HistoryStore<S>,
}

impl<S: Storage> Calculator<S> {
    /// Start at the initial state with history loaded from `storage`.
    pub fn new(config: Config, storage: S) -> Self {
        let history = HistoryStore::load(storage, &config.history);
        Self {
            config,
            state: CalculatorState::initial(),
            history,
        }
    }

    /// Apply an action and return the new state.
    ///
    /// EVALUATE first records a history entry computed from the state as
    /// it was before the transition.
    pub fn dispatch(&mut self, action: Action) -> &CalculatorState {
        if action == Action::Evaluate {
            if let Some(item) = entry_for(&self.state, &self.config.locale, Utc::now()) {
                self.history.record(item);
            }
        }

        let next = reduce(&self.state, &action);
        if next != self.state {
            debug!(
                action = ?action.kind(),
                from = self.state.name(),
                to = next.name(),
                current = %next.current_operand,
                "calculator transition"
            );
        }
        self.state = next;
        &self.state
    }

    /// Apply an untyped action. Actions that convert to nothing leave the
    /// state unchanged.
    pub fn dispatch_raw(&mut self, raw: &RawAction) -> &CalculatorState {
        match Action::from_raw(raw) {
            Some(action) => self.dispatch(action),
            None => {
                debug!(kind = ?raw.kind, payload = ?raw.payload, "ignoring malformed action");
                &self.state
            }
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether the display shows the division error.
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Formatted display strings for the current state.
    pub fn display(&self) -> DisplayText {
        let locale = &self.config.locale;
        let previous = format_operand(self.state.previous_operand.as_deref(), locale);
        let operator = self.state.operation.map(|op| op.symbol()).unwrap_or("");
        let secondary = [previous.as_str(), operator]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        DisplayText {
            primary: format_operand(Some(&self.state.current_operand), locale),
            secondary,
        }
    }

    pub fn history(&self) -> &HistoryLog {
        self.history.log()
    }

    /// Formatted result of a history entry, ready for the clipboard.
    pub fn clipboard_text(&self, id: &str) -> Option<&str> {
        self.history.log().get(id).map(|item| item.result.as_str())
    }

    pub fn delete_entry(&mut self, id: &str) {
        self.history.delete(id);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Storage backing the history.
    pub fn storage(&self) -> &S {
        self.history.storage()
    }
}
