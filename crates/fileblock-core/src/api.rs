//! API Contract
//!
//! The five endpoints of the block-list server, which failures surface a
//! client-authored text and which surface the server's body, and the
//! `ExtensionApi` trait the controllers call through.

use async_trait::async_trait;
use log::warn;

use crate::domain::{text, Extension, Snapshot};
use crate::error::{ApiError, ApiResult};

/// Header carrying the visitor id on every request
pub const VISITOR_ID_HEADER: &str = "X-Visitor-ID";

/// Multipart field holding the file on `/upload`
pub const UPLOAD_FIELD: &str = "fileUpload";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One server operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    LoadSnapshot,
    UpdateFixed,
    AddCustom,
    DeleteCustom,
    Upload,
}

impl Endpoint {
    /// Path relative to the API base URL
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::LoadSnapshot => "/extensions",
            Endpoint::UpdateFixed => "/fixed/update",
            Endpoint::AddCustom => "/custom/add",
            Endpoint::DeleteCustom => "/custom/delete",
            Endpoint::Upload => "/upload",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::LoadSnapshot => Method::Get,
            _ => Method::Post,
        }
    }

    /// Whether a failed response's body is shown to the user as-is
    pub fn server_owns_message(self) -> bool {
        matches!(self, Endpoint::AddCustom | Endpoint::Upload)
    }

    /// Client text for failures the server does not describe
    pub fn failure_text(self) -> &'static str {
        match self {
            Endpoint::LoadSnapshot => text::LOAD_FAILED,
            Endpoint::UpdateFixed => text::STATUS_UPDATE_FAILED,
            Endpoint::AddCustom => text::ADD_FAILED,
            Endpoint::DeleteCustom => text::DELETE_FAILED,
            Endpoint::Upload => text::UPLOAD_FAILED,
        }
    }

    /// Error for a non-2xx response with the given body
    pub fn status_error(self, status: u16, body: String) -> ApiError {
        let message = if self.server_owns_message() && !body.is_empty() {
            body
        } else {
            self.failure_text().to_string()
        };
        ApiError::Status { status, message }
    }

    /// Error for a request that never got a response
    pub fn network_error(self, detail: impl std::fmt::Display) -> ApiError {
        warn!("[api] {} {} failed: {}", self.method_name(), self.path(), detail);
        ApiError::Network(self.failure_text().to_string())
    }

    /// Error for a 2xx body that does not decode
    pub fn decode_error(self, detail: impl std::fmt::Display) -> ApiError {
        warn!("[api] {} {} returned an unreadable body: {}", self.method_name(), self.path(), detail);
        ApiError::Decode(self.failure_text().to_string())
    }

    fn method_name(self) -> &'static str {
        match self.method() {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A file the user picked for the upload test
pub trait UploadFile: Clone {
    fn file_name(&self) -> String;
}

/// Typed access to the block-list server
///
/// Single-threaded: futures are `!Send` so implementations can hold
/// browser handles.
#[async_trait(?Send)]
pub trait ExtensionApi {
    type File: UploadFile;

    /// `GET /extensions`
    async fn load_snapshot(&self) -> ApiResult<Snapshot>;

    /// `POST /fixed/update`
    async fn update_fixed(&self, name: &str, checked: bool) -> ApiResult<()>;

    /// `POST /custom/add`, returning the created entity
    async fn add_custom(&self, name: &str) -> ApiResult<Extension>;

    /// `POST /custom/delete`
    async fn delete_custom(&self, id: i64) -> ApiResult<()>;

    /// `POST /upload`, returning the server's result text
    async fn upload(&self, file: &Self::File) -> ApiResult<String>;
}
