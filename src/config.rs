use crate::units::{ResultFormatter, UnitStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Most decimal places a result is ever printed with; f64 carries ~17
/// significant digits
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub form: FormConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Decimal places in formatted results
    #[serde(default = "default_precision")]
    pub precision: usize,

    #[serde(default)]
    pub unit_style: UnitStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            unit_style: UnitStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FormConfig {
    #[serde(default)]
    pub selection_policy: SelectionPolicy,
}

/// What happens when a picker is given the unit the other picker holds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    // The colliding unit is not offered, and is rejected if selected anyway
    #[default]
    Exclude,
    // The selection stands and the other picker is cleared
    ClearOther,
}

fn default_precision() -> usize {
    2
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "display.precision is {}, at most {} is allowed",
                self.display.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }

    pub fn empty() -> Self {
        Self {
            display: DisplayConfig::default(),
            form: FormConfig::default(),
        }
    }

    pub fn formatter(&self) -> ResultFormatter {
        ResultFormatter::new(self.display.precision, self.display.unit_style)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_defaults() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.display.precision, 2);
        assert_eq!(config.display.unit_style, UnitStyle::Symbol);
        assert_eq!(config.form.selection_policy, SelectionPolicy::Exclude);
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
[display]
precision = 4
unit_style = "label"

[form]
selection_policy = "clear_other"
"#,
        )
        .unwrap();

        assert_eq!(config.display.precision, 4);
        assert_eq!(config.display.unit_style, UnitStyle::Label);
        assert_eq!(config.form.selection_policy, SelectionPolicy::ClearOther);
        assert_eq!(config.formatter().precision(), 4);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = Config::load_from_str("[display]\nunit_style = \"label\"\n").unwrap();
        assert_eq!(config.display.precision, 2);
        assert_eq!(config.display.unit_style, UnitStyle::Label);
    }

    #[test]
    fn test_unknown_policy_is_error() {
        let result = Config::load_from_str("[form]\nselection_policy = \"ignore\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_precision_above_cap_is_rejected() {
        let result = Config::load_from_str("[display]\nprecision = 70000\n");
        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("70000")));

        let config = Config::load_from_str("[display]\nprecision = 17\n").unwrap();
        assert_eq!(config.display.precision, MAX_PRECISION);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nprecision = 1").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.display.precision, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_file(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
