use crate::units::detector::TEMPERATURE_PATTERN;
use crate::units::error::UnitError;
use crate::units::types::{Temperature, TemperatureUnit};

/// Parse user-typed numeric text into a finite value.
///
/// Surrounding whitespace is ignored and a single comma is accepted as the
/// decimal separator ("36,6"). Empty text, garbage, `NaN` and infinities are
/// rejected.
pub fn parse_value(text: &str) -> Result<f64, UnitError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(UnitError::ParseError("empty value".to_string()));
    }

    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };

    let value = normalized
        .parse::<f64>()
        .map_err(|e| UnitError::ParseError(format!("'{}': {}", trimmed, e)))?;

    if !value.is_finite() {
        return Err(UnitError::NonFinite(trimmed.to_string()));
    }

    Ok(value)
}

/// Parse a "value unit" string such as "100 °F" or "-40C"
pub fn parse_temperature(input: &str) -> Result<Temperature, UnitError> {
    let captures = TEMPERATURE_PATTERN.captures(input).ok_or_else(|| {
        UnitError::ParseError(format!("'{}' is not of the form '<value> <unit>'", input.trim()))
    })?;

    let value = parse_value(&captures[1])?;
    let unit = captures[2].parse::<TemperatureUnit>()?;

    Ok(Temperature { value, unit })
}
