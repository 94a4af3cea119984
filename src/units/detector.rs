use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect temperature strings
    /// Matches: signed number (optional decimal with '.' or ',', optional exponent)
    /// + optional whitespace + optional degree sign + unit letters
    /// Examples: "100 C", "-40°F", "36,6 °C", "273 K", "1e2 kelvin"
    pub(crate) static ref TEMPERATURE_PATTERN: Regex = Regex::new(
        r"^\s*([+-]?\d+(?:[.,]\d+)?(?:[eE][+-]?\d+)?)\s*([°º]?\s*\p{L}+)\s*$"
    ).unwrap();
}

/// Check if a string looks like a value followed by a unit
pub fn looks_like_temperature_string(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    TEMPERATURE_PATTERN.is_match(trimmed)
}
