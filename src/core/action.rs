//! User inputs accepted by the reducer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operation waiting for its right-hand operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// Symbol shown on the keypad and in history expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse a keypad symbol or its keyboard alias.
    ///
    /// ```rust
    /// use educalc::core::Operation;
    ///
    /// assert_eq!(Operation::from_symbol("×"), Some(Operation::Multiply));
    /// assert_eq!(Operation::from_symbol("/"), Some(Operation::Divide));
    /// assert_eq!(Operation::from_symbol("^"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single user input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// A digit `0`-`9` or the decimal point.
    AddDigit(char),
    /// `None` clears the pending operation.
    ChooseOperation(Option<Operation>),
    Clear,
    Delete,
    Evaluate,
    Percentage,
    ToggleSign,
}

/// Discriminant of the untyped action form.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    AddDigit,
    ChooseOperation,
    Clear,
    Delete,
    Evaluate,
    Percentage,
    ToggleSign,
}

/// Action as it arrives from a UI layer: a kind plus an optional string.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl RawAction {
    pub fn new(kind: ActionKind, payload: Option<&str>) -> Self {
        Self {
            kind,
            payload: payload.map(str::to_string),
        }
    }
}

impl Action {
    /// Convert the untyped form, degrading malformed payloads.
    ///
    /// ADD_DIGIT without a single digit or `.` converts to nothing. A missing
    /// or unknown operator converts to `ChooseOperation(None)`.
    ///
    /// ```rust
    /// use educalc::core::{Action, ActionKind, Operation, RawAction};
    ///
    /// let raw = RawAction::new(ActionKind::ChooseOperation, Some("+"));
    /// assert_eq!(Action::from_raw(&raw), Some(Action::ChooseOperation(Some(Operation::Add))));
    ///
    /// let raw = RawAction::new(ActionKind::AddDigit, None);
    /// assert_eq!(Action::from_raw(&raw), None);
    /// ```
    pub fn from_raw(raw: &RawAction) -> Option<Self> {
        let payload = raw.payload.as_deref();
        let action = match raw.kind {
            ActionKind::AddDigit => Self::AddDigit(digit_payload(payload?)?),
            ActionKind::ChooseOperation => {
                Self::ChooseOperation(payload.and_then(Operation::from_symbol))
            }
            ActionKind::Clear => Self::Clear,
            ActionKind::Delete => Self::Delete,
            ActionKind::Evaluate => Self::Evaluate,
            ActionKind::Percentage => Self::Percentage,
            ActionKind::ToggleSign => Self::ToggleSign,
        };
        Some(action)
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::AddDigit(_) => ActionKind::AddDigit,
            Self::ChooseOperation(_) => ActionKind::ChooseOperation,
            Self::Clear => ActionKind::Clear,
            Self::Delete => ActionKind::Delete,
            Self::Evaluate => ActionKind::Evaluate,
            Self::Percentage => ActionKind::Percentage,
            Self::ToggleSign => ActionKind::ToggleSign,
        }
    }
}

fn digit_payload(payload: &str) -> Option<char> {
    let mut chars = payload.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() || c == '.' => Some(c),
        _ => None,
    }
}
