use serde::Serialize;
use std::fmt;

/// Content of the About view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub copyright: String,
}

impl AboutInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: "Converts temperatures between Celsius, Réaumur, Kelvin and Fahrenheit.",
            copyright: format!("© {} authors. All rights reserved.", env!("CARGO_PKG_NAME")),
        }
    }
}

impl Default for AboutInfo {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for AboutInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.name, self.version)?;
        writeln!(f, "{}", self.description)?;
        write!(f, "{}", self.copyright)
    }
}
