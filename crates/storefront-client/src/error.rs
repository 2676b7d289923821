//! Error types for catalog operations.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while talking to the product catalog.
///
/// Read-path failures never touch the accumulated list; they surface here and
/// the caller decides whether to retry. There is no automatic retry.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a response (connection refused, DNS,
    /// timeout).
    #[error("transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
    },

    /// The catalog answered with a non-success status.
    #[error("catalog error ({status}): {message}")]
    Status {
        /// HTTP status code returned by the catalog.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// The requested resource does not exist.
    #[error("not found: {message}")]
    NotFound {
        /// Description of what was not found.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("deserialization error: {message}")]
    Deserialization {
        /// Description of the decode failure.
        message: String,
    },

    /// The client could not be constructed from the given configuration.
    #[error("config error: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },
}
