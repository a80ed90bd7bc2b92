//! Calculation history.
//!
//! - `HistoryItem`: one recorded evaluation
//! - `HistoryLog`: immutable, bounded, newest-first sequence of items
//! - `entry_for`: builds the item an EVALUATE would record
//!
//! Like `core`, nothing here touches storage or the clock; the caller
//! passes the timestamp in.

mod item;
mod log;

pub use item::HistoryItem;
pub use log::{HistoryLog, DEFAULT_HISTORY_LIMIT};

use crate::core::{evaluate, format_operand, CalculatorState, NumberLocale};
use chrono::{DateTime, Utc};

/// Build the history entry for evaluating `state`.
///
/// `state` is the state *before* EVALUATE is applied. Returns `None`
/// unless an operation and both operands are present and the evaluation
/// produced a number; a division by zero is never recorded.
///
/// ```rust
/// use educalc::core::{CalculatorState, NumberLocale, Operation};
/// use educalc::history::entry_for;
/// use chrono::Utc;
///
/// let state = CalculatorState {
///     current_operand: "3".to_string(),
///     previous_operand: Some("1234".to_string()),
///     operation: Some(Operation::Add),
///     overwrite: false,
/// };
/// let item = entry_for(&state, &NumberLocale::pt_br(), Utc::now()).unwrap();
/// assert_eq!(item.expression, "1.234 + 3");
/// assert_eq!(item.result, "1.237");
/// ```
pub fn entry_for(
    state: &CalculatorState,
    locale: &NumberLocale,
    timestamp: DateTime<Utc>,
) -> Option<HistoryItem> {
    let operation = state.operation?;
    let previous = state.previous_operand.as_deref().filter(|s| !s.is_empty())?;
    if state.current_operand.is_empty() {
        return None;
    }

    let evaluation = evaluate(state);
    if !evaluation.is_recordable() {
        return None;
    }

    let expression = format!(
        "{} {} {}",
        format_operand(Some(previous), locale),
        operation.symbol(),
        format_operand(Some(&state.current_operand), locale)
    );
    let result = format_operand(Some(&evaluation.to_operand()), locale);

    Some(HistoryItem::new(expression, result, timestamp))
}
