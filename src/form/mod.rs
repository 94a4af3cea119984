// Converter form: unit pickers, value text, validation flags and the last result

pub mod controller;
pub mod options;
pub mod state;
pub mod validation;

#[cfg(test)]
mod tests;

pub use controller::FormController;
pub use options::{options_excluding, Picker};
pub use state::{FormPhase, FormState};
pub use validation::{SelectionError, ValidationErrors};
