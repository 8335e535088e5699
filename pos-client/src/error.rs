//! Client error types

use shared::OrderError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Form post refused; the body text is shown to the user
    #[error("Request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local validation refused the input; nothing was sent
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
