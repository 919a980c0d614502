//! Number formatting for display.

/// Formats a value with exactly two decimals, rounding ties to even.
#[must_use]
pub fn format_two_decimals(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round_ties_even() / 100.0)
}

/// Formats a value with exactly one decimal, rounding ties to even.
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round_ties_even() / 10.0)
}
