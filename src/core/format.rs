//! Locale-aware rendering of operand strings.

use super::number::parse_operand;
use serde::{Deserialize, Serialize};

/// Separators used when rendering operands for display.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    /// Inserted between groups of three integer digits.
    pub grouping_separator: char,
    /// Placed between the integer and fractional digits.
    pub decimal_separator: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::pt_br()
    }
}

impl NumberLocale {
    /// `1.234,5`
    pub fn pt_br() -> Self {
        Self {
            grouping_separator: '.',
            decimal_separator: ',',
        }
    }

    /// `1,234.5`
    pub fn en_us() -> Self {
        Self {
            grouping_separator: ',',
            decimal_separator: '.',
        }
    }
}

/// Format an operand for display.
///
/// The integer part is grouped in thousands; the fractional digits are
/// kept exactly as typed, including a trailing decimal point. Operands
/// whose integer part is not a finite number (such as the division error)
/// are returned unchanged.
///
/// ```rust
/// use educalc::core::{format_operand, NumberLocale};
///
/// let locale = NumberLocale::pt_br();
/// assert_eq!(format_operand(Some("1234.5"), &locale), "1.234,5");
/// assert_eq!(format_operand(Some("12."), &locale), "12,");
/// assert_eq!(format_operand(None, &locale), "");
/// ```
pub fn format_operand(operand: Option<&str>, locale: &NumberLocale) -> String {
    let operand = match operand {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let integer = if integer.is_empty() {
        "0".to_string()
    } else {
        let value = parse_operand(integer);
        if !value.is_finite() {
            return operand.to_string();
        }
        group_integer(value, locale.grouping_separator)
    };

    match fraction {
        Some(fraction) => format!("{}{}{}", integer, locale.decimal_separator, fraction),
        None => integer,
    }
}

fn group_integer(value: f64, separator: char) -> String {
    let digits = format!("{:.0}", value.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    if value.is_sign_negative() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
