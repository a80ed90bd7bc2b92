//! Conversions between operand strings and `f64`.

/// Parse an operand string. Anything unparsable is NaN.
pub fn parse_operand(operand: &str) -> f64 {
    operand.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse an optional operand, treating absent and empty as `"0"`.
pub fn parse_or_zero(operand: Option<&str>) -> f64 {
    match operand {
        Some(s) if !s.is_empty() => parse_operand(s),
        _ => 0.0,
    }
}

/// Render a value as the canonical decimal string stored in operands.
///
/// No exponent, no grouping, `.` as decimal point. Negative zero is `"0"`.
///
/// ```rust
/// use educalc::core::canonical;
///
/// assert_eq!(canonical(10.0), "10");
/// assert_eq!(canonical(0.5), "0.5");
/// assert_eq!(canonical(-0.0), "0");
/// assert_eq!(canonical(f64::INFINITY), "Infinity");
/// ```
pub fn canonical(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}
