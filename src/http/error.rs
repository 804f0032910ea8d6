//! Error types for the host-facing HTTP types.

use thiserror::Error;

/// Errors raised while interpreting host-supplied request data.
#[derive(Debug, Error)]
pub enum Error {
    /// The method token is not one of the methods this crate knows about.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The numeric status code has no [`StatusCode`](crate::http::StatusCode) variant.
    #[error("Unsupported status code: {0}")]
    UnsupportedStatus(u16),
}
