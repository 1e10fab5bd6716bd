//! Error Types
//!
//! `Display` of every variant is the text shown to the user.

use thiserror::Error;

/// Text of the error that models a user-cancelled deletion.
pub const DELETE_CANCELLED: &str = "deletion was cancelled";

/// Result alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },
    /// No response at all (offline, CORS, DNS, ...)
    #[error("{0}")]
    Network(String),
    /// 2xx response whose body could not be decoded
    #[error("{0}")]
    Decode(String),
    /// User backed out of the action before it was sent
    #[error("deletion was cancelled")]
    Cancelled,
}

impl ApiError {
    /// HTTP status for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client-side rejection of a custom extension name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("enter an extension name.")]
    Empty,
    #[error("max 20 chars, alphanumeric only.")]
    InvalidFormat,
}
