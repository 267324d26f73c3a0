//! Custom error types for taxbook
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for taxbook operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxbookError {
    /// An account was constructed with a normal balance other than debit/credit
    #[error("Invalid normal balance '{0}': expected 'debit' or 'credit'")]
    InvalidPolarity(String),

    /// An input failed validation (negative value, bad method code, etc.)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl TaxbookError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an invalid polarity error
    pub fn is_invalid_polarity(&self) -> bool {
        matches!(self, Self::InvalidPolarity(_))
    }
}

impl From<std::io::Error> for TaxbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TaxbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for taxbook operations
pub type TaxbookResult<T> = Result<T, TaxbookError>;
