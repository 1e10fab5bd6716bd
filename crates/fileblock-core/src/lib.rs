//! File Extension Block - Core
//!
//! Platform-independent half of the block-list UI:
//! - domain: wire entities, snapshot, validation, messages
//! - api: endpoint contract and the `ExtensionApi` seam
//! - identity: visitor id resolution and persistence
//! - controller: root coordinator plus fixed/custom/upload controllers
//!
//! Nothing here touches the browser; the UI crate plugs in an HTTP client,
//! localStorage and Leptos signals through the traits below.

pub mod api;
pub mod cell;
pub mod controller;
pub mod domain;
pub mod error;
pub mod identity;

pub use api::{Endpoint, ExtensionApi, UploadFile, VISITOR_ID_HEADER};
pub use cell::{shared, StateCell};
pub use controller::{
    Coordinator, CustomList, CustomListState, FixedToggle, LoadState, UploadPhase, UploadState,
    UploadTest,
};
pub use domain::{
    extension_of, validate_custom_name, Extension, ExtensionKind, Message, Snapshot,
    MAX_CUSTOM_EXTENSIONS, MAX_EXTENSION_NAME_LEN,
};
pub use error::{ApiError, ApiResult, ValidationError};
pub use identity::{resolve_visitor_id, MemoryVisitorStore, VisitorStore, VISITOR_ID_KEY};
