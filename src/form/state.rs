use crate::engine::ConversionResult;
use crate::form::validation::ValidationErrors;
use crate::units::TemperatureUnit;
use serde::Serialize;

/// Everything the host needs to render the converter form.
///
/// Fields are only mutated through `FormController`, which keeps the two
/// unit selections distinct.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormState {
    pub(crate) source_unit: Option<TemperatureUnit>,
    pub(crate) target_unit: Option<TemperatureUnit>,
    pub(crate) raw_input: String,
    pub(crate) source_unit_error: bool,
    pub(crate) target_unit_error: bool,
    pub(crate) value_error: bool,
    pub(crate) last_result: Option<ConversionResult>,
}

impl FormState {
    pub fn source_unit(&self) -> Option<TemperatureUnit> {
        self.source_unit
    }

    pub fn target_unit(&self) -> Option<TemperatureUnit> {
        self.target_unit
    }

    pub fn input_text(&self) -> &str {
        &self.raw_input
    }

    pub fn source_unit_error(&self) -> bool {
        self.source_unit_error
    }

    pub fn target_unit_error(&self) -> bool {
        self.target_unit_error
    }

    pub fn value_error(&self) -> bool {
        self.value_error
    }

    /// Latest successful conversion. `None` until the first successful
    /// submit; a computed zero is still `Some`.
    pub fn last_result(&self) -> Option<&ConversionResult> {
        self.last_result.as_ref()
    }

    pub fn errors(&self) -> ValidationErrors {
        ValidationErrors {
            source_unit: self.source_unit_error,
            target_unit: self.target_unit_error,
            value: self.value_error,
        }
    }

    pub(crate) fn set_errors(&mut self, errors: ValidationErrors) {
        self.source_unit_error = errors.source_unit;
        self.target_unit_error = errors.target_unit;
        self.value_error = errors.value;
    }

    /// No selections, no text, no result
    pub fn is_pristine(&self) -> bool {
        self.source_unit.is_none()
            && self.target_unit.is_none()
            && self.raw_input.is_empty()
            && self.last_result.is_none()
            && self.errors().is_empty()
    }
}

/// Position of the form in its interaction cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    /// Initial state: nothing selected or typed
    Empty,
    /// Some input present, but a submit would fail validation
    PartiallyFilled,
    /// Both units selected and the text parses; a submit would succeed
    ValidReady,
    /// Last submit failed; flags stay raised until the next submit
    Error,
    /// Last submit succeeded and nothing was edited since
    Resolved,
}
