//! Error types for the ticket backend client

use thiserror::Error;

/// Errors that can occur when interacting with the ticket backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend rejected the request as invalid (HTTP 400)
    ///
    /// Carries the backend's own `error` message so callers can surface
    /// it verbatim.
    #[error("Validation failed: {message}")]
    Validation {
        /// Error message from the backend's `{ "error": ... }` body
        message: String,
    },

    /// API returned a non-success status other than 400
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// HTTP request failed (connectivity, DNS, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),
}
