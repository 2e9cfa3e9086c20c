//! Error types for function handlers

use thiserror::Error;

use crate::response::StructuredResponse;

/// Errors a handler can report back to the runtime
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid body: {0}")]
    InvalidBody(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::InvalidBody(_) => 400,
        }
    }

    /// Render the error as a plain-text structured response
    pub fn into_response(self) -> StructuredResponse {
        StructuredResponse::text(self.to_string()).with_status(self.status_code())
    }
}

impl From<HandlerError> for StructuredResponse {
    fn from(err: HandlerError) -> Self {
        err.into_response()
    }
}
