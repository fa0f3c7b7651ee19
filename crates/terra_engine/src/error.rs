//! Unified error types for terra_engine

use thiserror::Error;

/// Main error type for terra_engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    // === Construction Errors ===
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Value {value} is out of range for {name}")]
    InvalidRange { name: String, value: i64 },

    // === Region Errors ===
    #[error("{region} region does not support {operation}")]
    UnsupportedOperation { operation: String, region: String },

    // === State Errors ===
    #[error("Illegal state: {message}")]
    IllegalState { message: String },
}

/// Result type alias for terra_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument { message: message.into() }
    }

    pub fn invalid_range(name: impl Into<String>, value: impl Into<i64>) -> Self {
        Self::InvalidRange {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn unsupported(operation: impl Into<String>, region: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            operation: operation.into(),
            region: region.into(),
        }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState { message: message.into() }
    }
}
