// Temperature units: names, symbols, parsing of user text and result formatting

pub mod detector;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

pub use detector::looks_like_temperature_string;
pub use error::UnitError;
pub use formatter::{ResultFormatter, UnitStyle};
pub use parser::{parse_temperature, parse_value};
pub use types::{Temperature, TemperatureUnit};
