use crate::config::{Config, SelectionPolicy};
use crate::engine::{ConversionRequest, ConversionResult};
use crate::form::options::{options_excluding, Picker};
use crate::form::state::{FormPhase, FormState};
use crate::form::validation::{SelectionError, ValidationErrors};
use crate::units::{parse_value, ResultFormatter, TemperatureUnit};
use log::{debug, warn};

/// Owns the converter form and drives conversions from it
pub struct FormController {
    state: FormState,
    policy: SelectionPolicy,
    formatter: ResultFormatter,
    // Set by a successful submit, cleared by any later edit
    resolved: bool,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::with_config(&Config::empty())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            state: FormState::default(),
            policy: config.form.selection_policy,
            formatter: config.formatter(),
            resolved: false,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn formatter(&self) -> &ResultFormatter {
        &self.formatter
    }

    pub fn phase(&self) -> FormPhase {
        if self.state.errors().any() {
            FormPhase::Error
        } else if self.resolved {
            FormPhase::Resolved
        } else if self.state.is_pristine() {
            FormPhase::Empty
        } else if self.is_ready() {
            FormPhase::ValidReady
        } else {
            FormPhase::PartiallyFilled
        }
    }

    /// Whether a submit right now would succeed
    pub fn is_ready(&self) -> bool {
        self.compute().is_some_and(|r| r.value.is_finite())
    }

    /// Units the source picker should offer
    pub fn source_options(&self) -> Vec<TemperatureUnit> {
        options_excluding(self.state.target_unit)
    }

    /// Units the target picker should offer
    pub fn target_options(&self) -> Vec<TemperatureUnit> {
        options_excluding(self.state.source_unit)
    }

    pub fn select_source_unit(&mut self, unit: TemperatureUnit) -> Result<(), SelectionError> {
        self.select_unit(Picker::Source, unit)
    }

    pub fn select_target_unit(&mut self, unit: TemperatureUnit) -> Result<(), SelectionError> {
        self.select_unit(Picker::Target, unit)
    }

    pub fn select_unit(
        &mut self,
        picker: Picker,
        unit: TemperatureUnit,
    ) -> Result<(), SelectionError> {
        let other = picker.other();

        if self.slot(other) == Some(unit) {
            match self.policy {
                SelectionPolicy::Exclude => {
                    warn!("rejected {} unit {}: held by {} picker", picker, unit, other);
                    return Err(SelectionError::Collision {
                        unit,
                        held_by: other,
                    });
                }
                SelectionPolicy::ClearOther => {
                    debug!("{} unit {} displaces {} selection", picker, unit, other);
                    *self.slot_mut(other) = None;
                }
            }
        }

        debug!("{} unit -> {}", picker, unit);
        *self.slot_mut(picker) = Some(unit);
        self.touch();
        Ok(())
    }

    pub fn clear_source_unit(&mut self) {
        self.clear_unit(Picker::Source);
    }

    pub fn clear_target_unit(&mut self) {
        self.clear_unit(Picker::Target);
    }

    pub fn clear_unit(&mut self, picker: Picker) {
        debug!("{} unit cleared", picker);
        *self.slot_mut(picker) = None;
        self.touch();
    }

    /// Exchange the two selections
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.state.source_unit, &mut self.state.target_unit);
        debug!(
            "units swapped: {:?} -> {:?}",
            self.state.source_unit, self.state.target_unit
        );
        self.touch();
    }

    /// Store the text exactly as typed; it is only checked on submit
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.state.raw_input = text.into();
        self.touch();
    }

    /// Validate the form and, if valid, convert.
    ///
    /// All three checks run so every offending field is flagged at once.
    /// On failure the previous result is kept.
    pub fn submit(&mut self) -> Result<ConversionResult, ValidationErrors> {
        let parsed = parse_value(&self.state.raw_input);
        let result = self.compute();
        let errors = ValidationErrors {
            source_unit: self.state.source_unit.is_none(),
            target_unit: self.state.target_unit.is_none(),
            // A finite input can still overflow, e.g. 1e308 °C in °F
            value: parsed.is_err() || result.is_some_and(|r| !r.value.is_finite()),
        };
        self.state.set_errors(errors);

        match result {
            Some(result) if errors.is_empty() => {
                let request = &result.request;
                debug!(
                    "converted {} {} -> {} {}",
                    request.value, request.source, result.value, request.target
                );
                self.state.last_result = Some(result);
                self.resolved = true;
                Ok(result)
            }
            _ => {
                debug!("submit rejected: {}", errors);
                self.resolved = false;
                Err(errors)
            }
        }
    }

    // Conversion of the current fields, if both units and the value are usable
    fn compute(&self) -> Option<ConversionResult> {
        let source = self.state.source_unit?;
        let target = self.state.target_unit?;
        let value = parse_value(&self.state.raw_input).ok()?;
        Some(ConversionRequest::new(source, target, value).execute())
    }

    /// Back to the state of a freshly opened screen
    pub fn reset(&mut self) {
        debug!("form reset");
        self.state = FormState::default();
        self.resolved = false;
    }

    /// Text for the platform share action, if there is a result to share
    pub fn share_text(&self) -> Option<String> {
        self.state
            .last_result
            .as_ref()
            .map(|result| self.formatter.format_result(result))
    }

    fn touch(&mut self) {
        self.resolved = false;
    }

    fn slot(&self, picker: Picker) -> Option<TemperatureUnit> {
        match picker {
            Picker::Source => self.state.source_unit,
            Picker::Target => self.state.target_unit,
        }
    }

    fn slot_mut(&mut self, picker: Picker) -> &mut Option<TemperatureUnit> {
        match picker {
            Picker::Source => &mut self.state.source_unit,
            Picker::Target => &mut self.state.target_unit,
        }
    }
}
