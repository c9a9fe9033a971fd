//! Error types for grade service handlers

use thiserror::Error;

/// Errors that can occur in a handler.
///
/// There are exactly two kinds: validation failures caused by the caller's
/// input, and everything else. Validation messages are returned to the caller
/// verbatim; unexpected failures are wrapped in a generic prefix so internal
/// detail stays one step removed from the field-level contract.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Unexpected(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Validation(_) => 400,
            HandlerError::Unexpected(_) => 500,
        }
    }

    /// Convert to a Response carrying the standard error envelope
    pub fn to_response(&self) -> crate::Response {
        crate::Response::json(
            self.status_code(),
            serde_json::json!({
                "success": false,
                "message": self.to_string(),
            }),
        )
        .with_cors()
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::Unexpected(err.to_string())
    }
}
