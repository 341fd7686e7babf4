//! Error types for the Shiptrack engine.

use thiserror::Error;

/// Validation failures for shipment input.
///
/// Every variant describes caller input that cannot be stored, so the whole
/// enum maps onto a single "bad request" class at the API boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("missing required field: {0}")]
    MissingRequiredField(String),

    #[error("field '{0}' must not be empty")]
    EmptyField(String),

    #[error("field '{0}' must not contain NUL characters")]
    NulCharacter(String),

    #[error("type mismatch for field '{field}': expected {expected}, got {got}")]
    TypeMismatch {
        field: String,
        expected: String,
        got: String,
    },

    #[error("invalid date for field '{field}': {value}")]
    InvalidDate { field: String, value: String },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
