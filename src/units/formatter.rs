use crate::config::MAX_PRECISION;
use crate::engine::ConversionResult;
use crate::units::types::TemperatureUnit;
use serde::{Deserialize, Serialize};

/// How a unit is rendered next to a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStyle {
    /// "100.00 ° C"
    #[default]
    Symbol,
    /// "100.00 Celsius"
    Label,
}

/// Formats values and conversion results for display and sharing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultFormatter {
    precision: usize,
    style: UnitStyle,
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(2, UnitStyle::Symbol)
    }
}

impl ResultFormatter {
    /// Precision is capped at `MAX_PRECISION`
    pub fn new(precision: usize, style: UnitStyle) -> Self {
        Self {
            precision: precision.min(MAX_PRECISION),
            style,
        }
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn style(&self) -> UnitStyle {
        self.style
    }

    /// Fixed-precision number, never rendered as "-0.00"
    pub fn format_value(&self, value: f64) -> String {
        let formatted = format!("{:.*}", self.precision, value);
        match formatted.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
            _ => formatted,
        }
    }

    pub fn unit_text(&self, unit: TemperatureUnit) -> &'static str {
        match self.style {
            UnitStyle::Symbol => unit.symbol(),
            UnitStyle::Label => unit.label(),
        }
    }

    pub fn format_temperature(&self, value: f64, unit: TemperatureUnit) -> String {
        format!("{} {}", self.format_value(value), self.unit_text(unit))
    }

    /// Plain text handed to the platform share action: "100.00 ° C = 212.00 ° F"
    pub fn format_result(&self, result: &ConversionResult) -> String {
        let request = &result.request;
        format!(
            "{} = {}",
            self.format_temperature(request.value, request.source),
            self.format_temperature(result.value, request.target)
        )
    }
}
