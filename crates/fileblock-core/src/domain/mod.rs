//! Domain Layer
//!
//! Block-list entities as the API server sends them, plus the client-side
//! rules around them.

mod extension;
mod message;
mod snapshot;
mod validation;

pub use extension::{Extension, ExtensionKind};
pub use message::{text, Message};
pub use snapshot::{extension_of, Snapshot};
pub use validation::{validate_custom_name, MAX_CUSTOM_EXTENSIONS, MAX_EXTENSION_NAME_LEN};
