//! Error types for the profit engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Parameter out of range: {field} = {value} ({reason})")]
    OutOfRange {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Required field is empty: {field}")]
    EmptyField {
        field: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    pub fn out_of_range(field: &'static str, value: impl ToString, reason: &str) -> Self {
        EngineError::OutOfRange {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
