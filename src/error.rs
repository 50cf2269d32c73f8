//! # Client Error Types
//!
//! Unified error handling for the smoke check library and CLI.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for client operations and failed smoke assertions
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{context}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        context: String,
        expected: String,
        actual: u16,
    },

    #[error("{context}: {message}")]
    Assertion { context: String, message: String },

    #[error("Invalid response: {field} - {reason}")]
    InvalidResponse { field: String, reason: String },

    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(String),

    #[error("Service unavailable: {service} - {reason}")]
    ServiceUnavailable { service: String, reason: String },

    #[error("Unknown check: {0}")]
    UnknownCheck(String),
}

impl ClientError {
    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an assertion failure scoped to a request context
    pub fn assertion(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Assertion {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an invalid response error for a missing or malformed field
    pub fn invalid_response(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(
        context: impl Into<String>,
        expected: impl Into<String>,
        actual: u16,
    ) -> Self {
        Self::UnexpectedStatus {
            context: context.into(),
            expected: expected.into(),
            actual,
        }
    }

    /// Create a service unavailable error
    pub fn service_unavailable(service: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            service: service.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure came from the transport rather than the response
    #[must_use]
    pub fn is_transport(&self) -> bool {
        match self {
            ClientError::HttpError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            ClientError::ServiceUnavailable { .. } => true,
            _ => false,
        }
    }
}
