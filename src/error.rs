//! Error types for the Glassix SDK.
//!
//! This module defines `GlassixError`, the single error type returned by
//! every operation in the crate. A dispatched API call resolves to exactly
//! one of `Ok(value)` or `Err(GlassixError)`; network, HTTP and parsing
//! faults are always converted into an error value and never panic.
//!
//! # Security
//!
//! Messages built from remote response bodies are passed through
//! `sanitize_message()` so the API secret can never leak into logs or
//! error strings.

use std::time::Duration;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GlassixError>;

/// Unified error type for all Glassix operations.
///
/// Variants fall into two groups. `Config` and `Validation` report
/// programmer errors and are raised before any network call is made.
/// Every other variant is a remote or runtime failure produced by the
/// request dispatcher.
#[derive(Error, Debug)]
pub enum GlassixError {
    /// Configuration error - invalid credentials or missing environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid arguments passed to a resource method.
    #[error("validation error: {0}")]
    Validation(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request could not be sent or the response could not be read
    /// (DNS failure, connection reset, ...).
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {duration:?}: {operation}")]
    Timeout {
        /// The configured timeout.
        duration: Duration,
        /// The operation that timed out, e.g. `GET /tickets/get/1`.
        operation: String,
    },

    /// The server answered with a non-success status code.
    ///
    /// `message` is the response body, or the reason phrase when the
    /// body was empty.
    #[error("{message}")]
    Api {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// A bearer token could not be obtained; no request was attempted.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A non-JSON payload could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl GlassixError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        GlassixError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        GlassixError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        GlassixError::Validation(message.into())
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        GlassixError::Authentication(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        GlassixError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Returns the HTTP status code for failures that carry one.
    ///
    /// Only `Api` errors have a status; transport failures, timeouts,
    /// authentication and decoding errors return `None`.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GlassixError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if this error reports caller misuse rather than a
    /// runtime failure.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(self, GlassixError::Config(_) | GlassixError::Validation(_))
    }

    /// Returns true if the request was abandoned because of the timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            GlassixError::Timeout { .. } => true,
            GlassixError::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Sanitizes an error message to remove any occurrence of a secret.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `secret` - The secret to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the secret replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = GlassixError::missing_env("GLASSIX_API_SECRET");
        assert!(err.to_string().contains("GLASSIX_API_SECRET"));
        assert!(err.to_string().contains("missing"));
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_validation_error() {
        let err = GlassixError::validation("text or html is required");
        assert_eq!(err.to_string(), "validation error: text or html is required");
        assert!(err.is_usage_error());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_api_error_displays_message_only() {
        let err = GlassixError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert_eq!(err.to_string(), "Not found");
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_authentication_error_has_no_status() {
        let err = GlassixError::authentication("access token is empty");
        assert!(err.to_string().contains("access token is empty"));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_timeout_error() {
        let err = GlassixError::timeout(Duration::from_secs(30), "GET /users/allusers");
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("30s"));
        assert!(err.is_timeout());
    }

    #[test]
    fn test_sanitize_message_removes_secret() {
        let secret = "super_secret_value_12345";
        let message = format!("Invalid secret {} for user", secret);
        let sanitized = GlassixError::sanitize_message(&message, secret);
        assert!(!sanitized.contains(secret));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_secret() {
        let message = "Some error message";
        let sanitized = GlassixError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }
}
