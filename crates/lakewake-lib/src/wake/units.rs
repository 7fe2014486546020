//! Lenient parsing of loosely formatted numeric tokens.
//!
//! Harvested spec values arrive as free text with embedded units and locale
//! decimal commas ("50,5 m", "1200 PS"). Parsing keeps digits and separators
//! only and reports anything unusable as missing rather than as an error, so
//! callers can distinguish "absent" from "present but zero".

/// Parse a loosely formatted quantity, returning `None` when no usable number
/// remains.
///
/// Retains decimal digits, `.` and `,`; maps `,` to `.`; then parses the
/// remainder as `f64`. Empty remainders and remainders with more than one
/// decimal separator are treated as missing. Never panics.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() || cleaned.matches('.').count() > 1 {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}
