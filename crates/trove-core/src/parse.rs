//! Defensive parsing of the stringly-typed numeric columns.
//!
//! The dataset stores prices as currency-formatted display strings
//! (`"₹1,299"`), discounts with a percent sign (`"50%"`), and counts with
//! thousands separators (`"24,269"`). A value that does not parse yields
//! `None`; the record is then excluded from that numeric filter only.

/// Parse a currency-formatted price. Strips the locale symbol and
/// thousands separators, keeping only digits and the decimal point.
pub fn parse_currency(raw: &str) -> Option<f64> {
    parse_digits(raw)
}

/// Parse a percentage like `"50%"` or `"7.5%"`.
pub fn parse_percent(raw: &str) -> Option<f64> {
    parse_digits(raw)
}

/// Parse a count that may carry thousands separators.
pub fn parse_count(raw: &str) -> Option<f64> {
    parse_digits(raw)
}

/// Parse a plain numeric rating. The column is frequently empty or holds
/// non-numeric placeholders.
pub fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_digits(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
