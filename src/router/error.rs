//! Error types for handlers, middleware and the dispatcher.

use thiserror::Error;

use crate::http::{Error as HttpError, StatusCode};

/// Boxed error for failures that do not fit the other variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by middleware or handlers.
///
/// The dispatcher never constructs, wraps or converts these. Whatever value a
/// middleware or handler fails with is exactly what the dispatcher returns,
/// leaving the translation to an HTTP status to the host.
#[derive(Debug, Error)]
pub enum Error {
    /// The request was refused; `status` is a hint for the host.
    #[error("Request rejected ({status}): {message}")]
    Rejected {
        status: StatusCode,
        message: String,
    },

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error interpreting host-supplied request data.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure.
    #[error("{0}")]
    Custom(#[from] BoxError),
}

impl Error {
    /// Create a rejection carrying a status hint.
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Error::Rejected {
            status,
            message: message.into(),
        }
    }

    /// The status a host should respond with for this error.
    pub fn status_hint(&self) -> StatusCode {
        match self {
            Error::Rejected { status, .. } => *status,
            Error::Http(_) => StatusCode::BadRequest,
            _ => StatusCode::InternalServerError,
        }
    }
}
