use crate::form::Picker;
use crate::units::TemperatureUnit;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // "from celsius", "source °C"
    Select(Picker, TemperatureUnit),
    // "clear from", "clear to"
    Clear(Picker),
    // "value 36,6" (rest of line kept verbatim)
    Value(String),
    Swap,
    Submit,
    Share,
    State,
    Options,
    Reset,
    About,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Error)]
pub enum ParseError {
    #[error("Command cannot be empty")]
    EmptyCommand,
    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Unknown picker: {0} (expected 'from' or 'to')")]
    UnknownPicker(String),
}

pub const HELP: &str = "\
Commands:
  from <unit>      select the unit to convert from
  to <unit>        select the unit to convert to
  clear from|to    unset a unit selection
  value <text>     set the value to convert
  swap             exchange the two units
  submit           validate and convert
  share            print the latest result as shareable text
  state            show the form
  options          show which units each picker offers
  reset            clear the form
  about            show application information
  quit             leave the session
Units: celsius (c), reaumur (r), kelvin (k), fahrenheit (f)";

fn parse_picker(word: &str) -> Result<Picker, ParseError> {
    match word.to_ascii_lowercase().as_str() {
        "from" | "source" => Ok(Picker::Source),
        "to" | "target" => Ok(Picker::Target),
        _ => Err(ParseError::UnknownPicker(word.to_string())),
    }
}

fn parse_unit(rest: &str) -> Result<TemperatureUnit, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument("unit"));
    }
    TemperatureUnit::from_name(rest).ok_or_else(|| ParseError::UnknownUnit(rest.to_string()))
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Err(ParseError::EmptyCommand);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "from" | "source" => Ok(Command::Select(Picker::Source, parse_unit(rest.trim())?)),
        "to" | "target" => Ok(Command::Select(Picker::Target, parse_unit(rest.trim())?)),
        "clear" => {
            let rest = rest.trim();
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("picker"));
            }
            Ok(Command::Clear(parse_picker(rest)?))
        }
        // Trailing newline is not part of the typed value
        "value" => Ok(Command::Value(rest.trim_end_matches(['\r', '\n']).to_string())),
        "swap" => Ok(Command::Swap),
        "submit" | "convert" => Ok(Command::Submit),
        "share" => Ok(Command::Share),
        "state" | "show" => Ok(Command::State),
        "options" => Ok(Command::Options),
        "reset" => Ok(Command::Reset),
        "about" => Ok(Command::About),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}
