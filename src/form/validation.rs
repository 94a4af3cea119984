use crate::form::options::Picker;
use crate::units::TemperatureUnit;
use serde::Serialize;
use thiserror::Error;

/// Flags raised by a failed submit. Every check runs, so several flags can
/// be set at once and the host can highlight all offending fields together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Error)]
#[error("{}", describe(.source_unit, .target_unit, .value))]
pub struct ValidationErrors {
    pub source_unit: bool,
    pub target_unit: bool,
    pub value: bool,
}

impl ValidationErrors {
    pub fn any(&self) -> bool {
        self.source_unit || self.target_unit || self.value
    }

    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    pub fn count(&self) -> usize {
        [self.source_unit, self.target_unit, self.value]
            .iter()
            .filter(|flag| **flag)
            .count()
    }
}

fn describe(source_unit: &bool, target_unit: &bool, value: &bool) -> String {
    let mut problems = Vec::new();
    if *source_unit {
        problems.push("source unit is not selected");
    }
    if *target_unit {
        problems.push("target unit is not selected");
    }
    if *value {
        problems.push("value is missing or not a number");
    }

    if problems.is_empty() {
        "no validation errors".to_string()
    } else {
        format!("Invalid input: {}", problems.join(", "))
    }
}

/// A picker choice that would make both pickers hold the same unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{unit} is already selected as the {held_by} unit")]
    Collision { unit: TemperatureUnit, held_by: Picker },
}
