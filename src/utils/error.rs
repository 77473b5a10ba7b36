//! Error handling for the pricing engine
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the pricing engine
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Main error type for quote calculation and config resolution
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A required rate-table entry is absent from the configuration.
    /// A missing key is a configuration data bug and is never defaulted
    /// to zero.
    #[error("incomplete pricing config: missing key '{key}' in {table}")]
    ConfigIncomplete { table: String, key: String },

    /// Malformed shipment request (negative magnitudes, inverted date range)
    #[error("invalid shipment request: {0}")]
    InvalidRequest(String),

    /// Config resolution failure, propagated from the store
    #[error("not found: {0}")]
    NotFound(String),

    /// Configuration rejected by wholesale validation
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuoteError {
    pub fn config_incomplete(table: impl Into<String>, key: impl Into<String>) -> Self {
        Self::ConfigIncomplete {
            table: table.into(),
            key: key.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
