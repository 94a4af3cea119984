use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Value is not a finite number: {0}")]
    NonFinite(String),
}
