//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every failure an operation can report is a recoverable, local condition.
/// Operations validate their preconditions fully before mutating anything,
/// so an `Err` always means no state was touched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not enough seats on flight {flight}: requested {requested}, available {available}")]
    CapacityExceeded {
        flight: String,
        requested: u32,
        available: u32,
    },

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a duplicate-entity error
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }

    /// Create a generic error with a custom message
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::not_found("flight XY99 is not scheduled");
        assert_eq!(err.to_string(), "Not found: flight XY99 is not scheduled");

        let err = Error::CapacityExceeded {
            flight: "FD101".to_string(),
            requested: 5,
            available: 2,
        };
        assert!(err.to_string().contains("requested 5"));
        assert!(err.to_string().contains("available 2"));
    }
}
