use crate::about::AboutInfo;
use crate::config::Config;
use crate::form::{FormController, FormPhase, FormState, Picker};
use crate::session::parser::{parse_command, Command, HELP};
use crate::units::{ResultFormatter, TemperatureUnit};

/// What the host should do after a command ran
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Print the text and keep reading commands
    Continue(String),
    Quit,
}

/// A line-oriented converter form: each command is one user event
pub struct Session {
    form: FormController,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Config::empty())
    }
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            form: FormController::with_config(config),
        }
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Parse and run one input line
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match parse_command(line) {
            Ok(command) => self.execute(command),
            Err(e) => Outcome::Continue(format!("Error: {}", e)),
        }
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        let text = match command {
            Command::Select(picker, unit) => match self.form.select_unit(picker, unit) {
                Ok(()) => format!("{} unit: {}", picker, unit),
                Err(e) => format!(
                    "Error: {}. Available: {}",
                    e,
                    unit_list(&self.options_for(picker))
                ),
            },
            Command::Clear(picker) => {
                self.form.clear_unit(picker);
                format!("{} unit cleared", picker)
            }
            Command::Value(text) => {
                self.form.set_input_text(text);
                format!("value: {:?}", self.form.state().input_text())
            }
            Command::Swap => {
                self.form.swap_units();
                render_units(self.form.state())
            }
            Command::Submit => match self.form.submit() {
                Ok(result) => self.form.formatter().format_result(&result),
                Err(errors) => format!("Error: {}", errors),
            },
            Command::Share => self
                .form
                .share_text()
                .unwrap_or_else(|| "Nothing to share yet".to_string()),
            Command::State => render_state(&self.form),
            Command::Options => format!(
                "from: {}\nto:   {}",
                unit_list(&self.form.source_options()),
                unit_list(&self.form.target_options())
            ),
            Command::Reset => {
                self.form.reset();
                "Form cleared".to_string()
            }
            Command::About => AboutInfo::current().to_string(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Outcome::Quit,
        };
        Outcome::Continue(text)
    }

    fn options_for(&self, picker: Picker) -> Vec<TemperatureUnit> {
        match picker {
            Picker::Source => self.form.source_options(),
            Picker::Target => self.form.target_options(),
        }
    }
}

fn unit_list(units: &[TemperatureUnit]) -> String {
    units
        .iter()
        .map(|u| u.label())
        .collect::<Vec<_>>()
        .join(", ")
}

fn unit_or_dash(unit: Option<TemperatureUnit>) -> &'static str {
    unit.map(|u| u.label()).unwrap_or("-")
}

fn render_units(state: &FormState) -> String {
    format!(
        "from: {}  to: {}",
        unit_or_dash(state.source_unit()),
        unit_or_dash(state.target_unit())
    )
}

fn flag(raised: bool) -> &'static str {
    if raised {
        "  (!) required"
    } else {
        ""
    }
}

/// Text rendering of the form, one field per line
pub fn render_state(form: &FormController) -> String {
    let state = form.state();
    let formatter: &ResultFormatter = form.formatter();

    let mut lines = vec![
        format!(
            "from:   {}{}",
            unit_or_dash(state.source_unit()),
            flag(state.source_unit_error())
        ),
        format!(
            "to:     {}{}",
            unit_or_dash(state.target_unit()),
            flag(state.target_unit_error())
        ),
        format!(
            "value:  {:?}{}",
            state.input_text(),
            if state.value_error() {
                "  (!) invalid input"
            } else {
                ""
            }
        ),
    ];

    if let Some(result) = state.last_result() {
        lines.push(format!("result: {}", formatter.format_result(result)));
    }

    let phase = match form.phase() {
        FormPhase::Empty => "empty",
        FormPhase::PartiallyFilled => "partially filled",
        FormPhase::ValidReady => "ready",
        FormPhase::Error => "error",
        FormPhase::Resolved => "resolved",
    };
    lines.push(format!("phase:  {}", phase));

    lines.join("\n")
}
