//! Unified error type definition

use thiserror::Error;

/// State layer error type
#[derive(Error, Debug)]
pub enum StateError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// State layer result type
pub type StateResult<T> = Result<T, StateError>;
