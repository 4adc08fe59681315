//! Pure parsing helpers for form inputs, kept out of the view code so they can
//! be tested natively.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use access::Role;

/// Non-negative whole number from a text input; blanks and junk read as 0.
pub fn parse_count(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Rating from a select value; out-of-range values are clamped later by the
/// model, junk reads as the top rating (the form's default).
pub fn parse_rating(raw: &str) -> u8 {
    raw.trim().parse().unwrap_or(5)
}

/// Distance cap from the search filter. Blank, junk, or non-positive means no
/// cap.
pub fn parse_max_distance(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

/// Role radio/select value on the login form; unknown values fall back to
/// the form default.
pub fn login_role(raw: &str) -> Option<Role> {
    raw.parse().ok()
}

/// `/recipient/request/{id}` parameter.
pub fn listing_id(raw: Option<String>) -> Option<u32> {
    raw?.trim().parse().ok()
}
