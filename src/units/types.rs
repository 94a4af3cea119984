use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four temperature scales the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Reaumur,
    Kelvin,
    Fahrenheit,
}

impl TemperatureUnit {
    /// All units in the order pickers present them
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Reaumur,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Fahrenheit,
    ];

    /// Stable identifier, matching the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Reaumur => "reaumur",
            TemperatureUnit::Kelvin => "kelvin",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Human-readable name shown in unit pickers
    pub fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Reaumur => "Réaumur",
            TemperatureUnit::Kelvin => "Kelvin",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
        }
    }

    /// Short symbol shown next to values (e.g. "100 ° C")
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "° C",
            TemperatureUnit::Reaumur => "° R",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "° F",
        }
    }

    /// Lookup by any accepted alias: full name, letter code, or symbol.
    /// Matching ignores case, the degree sign and inner whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '°' && *c != 'º')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "c" | "celsius" | "centigrade" => Some(TemperatureUnit::Celsius),
            "r" | "re" | "ré" | "reaumur" | "réaumur" => Some(TemperatureUnit::Reaumur),
            "k" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "f" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemperatureUnit::from_name(s).ok_or_else(|| UnitError::UnknownUnit(s.trim().to_string()))
    }
}

/// A temperature value paired with its unit, as parsed from "100 °F"-style input
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}
