use serde::{Serialize, Deserialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Invalid request parameters.")]
    InvalidInput,
    #[error("The requested resource was not found.")]
    NotFound,
    #[error("An internal server error occurred.")]
    SystemError,
}

impl ErrorCode {
    pub const fn status(self) -> u16 {
        match self {
            ErrorCode::InvalidInput => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::SystemError => 500,
        }
    }
}

/// JSON body returned when no route produced a response of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorMessage {
    pub error: String,
    pub status: u16,
}

impl From<ErrorCode> for ErrorMessage {
    fn from(code: ErrorCode) -> Self {
        Self {
            error: code.to_string(),
            status: code.status(),
        }
    }
}
