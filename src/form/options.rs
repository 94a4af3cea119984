use crate::units::TemperatureUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two unit pickers on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Picker {
    Source,
    Target,
}

impl Picker {
    pub fn other(&self) -> Picker {
        match self {
            Picker::Source => Picker::Target,
            Picker::Target => Picker::Source,
        }
    }
}

impl fmt::Display for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Picker::Source => write!(f, "source"),
            Picker::Target => write!(f, "target"),
        }
    }
}

/// Units a picker may offer, given what the other picker currently holds.
/// With nothing held on the other side every unit is offered.
pub fn options_excluding(other: Option<TemperatureUnit>) -> Vec<TemperatureUnit> {
    let options: Vec<TemperatureUnit> = TemperatureUnit::ALL
        .iter()
        .copied()
        .filter(|unit| Some(*unit) != other)
        .collect();
    log::trace!("options excluding {:?}: {:?}", other, options);
    options
}
