// WebAssembly bindings for a browser host rendering the converter form
use crate::about::AboutInfo;
use crate::config::Config;
use crate::engine;
use crate::form::{FormController, Picker};
use crate::units::TemperatureUnit;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ThermoconvWasm {
    form: FormController,
}

impl Default for ThermoconvWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_unit(name: &str) -> Result<TemperatureUnit, JsValue> {
    name.parse::<TemperatureUnit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn unit_ids(units: &[TemperatureUnit]) -> js_sys::Array {
    units
        .iter()
        .map(|u| JsValue::from_str(u.id()))
        .collect()
}

fn to_json<T: serde::Serialize>(value: &T, what: &str) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize {}: {}", what, e)))
}

#[wasm_bindgen]
impl ThermoconvWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            form: FormController::new(),
        }
    }

    /// Create a controller from TOML settings
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<ThermoconvWasm, JsValue> {
        let config = Config::load_from_str(config_content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?;
        Ok(Self {
            form: FormController::with_config(&config),
        })
    }

    /// Stateless conversion, for hosts that do their own form handling
    #[wasm_bindgen]
    pub fn convert(source: &str, target: &str, value: f64) -> Result<f64, JsValue> {
        if !value.is_finite() {
            return Err(JsValue::from_str("Value must be a finite number"));
        }
        Ok(engine::convert(parse_unit(source)?, parse_unit(target)?, value))
    }

    #[wasm_bindgen]
    pub fn select_source_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        self.select(Picker::Source, unit)
    }

    #[wasm_bindgen]
    pub fn select_target_unit(&mut self, unit: &str) -> Result<(), JsValue> {
        self.select(Picker::Target, unit)
    }

    #[wasm_bindgen]
    pub fn clear_source_unit(&mut self) {
        self.form.clear_source_unit();
    }

    #[wasm_bindgen]
    pub fn clear_target_unit(&mut self) {
        self.form.clear_target_unit();
    }

    #[wasm_bindgen]
    pub fn swap_units(&mut self) {
        self.form.swap_units();
    }

    #[wasm_bindgen]
    pub fn set_input_text(&mut self, text: &str) {
        self.form.set_input_text(text);
    }

    /// Returns JSON of the result on success.
    /// On failure the error is a JSON object of the three validation flags.
    #[wasm_bindgen]
    pub fn submit(&mut self) -> Result<String, JsValue> {
        match self.form.submit() {
            Ok(result) => to_json(&result, "result"),
            Err(errors) => Err(JsValue::from_str(&to_json(&errors, "errors")?)),
        }
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.form.reset();
    }

    /// JSON of the full form state plus phase and picker options
    #[wasm_bindgen]
    pub fn state(&self) -> Result<String, JsValue> {
        let view = serde_json::json!({
            "state": self.form.state(),
            "phase": self.form.phase(),
            "source_options": self.form.source_options(),
            "target_options": self.form.target_options(),
        });
        to_json(&view, "state")
    }

    /// Unit ids the source dropdown should list
    #[wasm_bindgen]
    pub fn source_options(&self) -> js_sys::Array {
        unit_ids(&self.form.source_options())
    }

    /// Unit ids the target dropdown should list
    #[wasm_bindgen]
    pub fn target_options(&self) -> js_sys::Array {
        unit_ids(&self.form.target_options())
    }

    /// Formatted text of the latest result for the platform share action
    #[wasm_bindgen]
    pub fn share_text(&self) -> Option<String> {
        self.form.share_text()
    }

    /// JSON array of {id, label, symbol}
    #[wasm_bindgen]
    pub fn units() -> Result<String, JsValue> {
        let units: Vec<_> = TemperatureUnit::ALL
            .iter()
            .map(|u| {
                serde_json::json!({
                    "id": u,
                    "label": u.label(),
                    "symbol": u.symbol(),
                })
            })
            .collect();
        to_json(&units, "units")
    }

    #[wasm_bindgen]
    pub fn about() -> Result<String, JsValue> {
        to_json(&AboutInfo::current(), "about")
    }
}

impl ThermoconvWasm {
    fn select(&mut self, picker: Picker, unit: &str) -> Result<(), JsValue> {
        let unit = parse_unit(unit)?;
        self.form
            .select_unit(picker, unit)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
