//! Notification Messages
//!
//! Per-controller success/error notice, cleared when an action starts and
//! set once when it resolves.

/// Transient notice shown by one section of the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Message {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Message::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Message::Error(text.into())
    }

    /// Text to display; `None` when nothing should be shown
    pub fn text(&self) -> Option<&str> {
        match self {
            Message::None => None,
            Message::Success(text) | Message::Error(text) if text.is_empty() => None,
            Message::Success(text) | Message::Error(text) => Some(text),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Message::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Message::Success(_))
    }
}

/// Client-authored message texts
pub mod text {
    pub const LOAD_FAILED: &str = "failed to load data from the server.";
    pub const STATUS_UPDATE_FAILED: &str = "status update failed";
    pub const FIXED_UPDATE_FAILED: &str = "fixed extension update failed";
    pub const ADD_FAILED: &str = "failed to add extension.";
    pub const DELETE_FAILED: &str = "failed to delete extension.";
    pub const DELETED: &str = "extension deleted.";
    pub const UPLOAD_FAILED: &str = "upload failed.";
    pub const SELECT_FILE: &str = "please select a file";

    pub fn added(name: &str) -> String {
        format!("'.{}' was added.", name)
    }
}
