//! Controllers
//!
//! The root coordinator owns the snapshot and the initial load; the three
//! section controllers share its snapshot cell and API handle and each keep
//! their own scoped message.

mod coordinator;
mod custom;
mod fixed;
mod upload;

#[cfg(test)]
pub(crate) mod test_support;

pub use coordinator::{Coordinator, LoadState};
pub use custom::{CustomList, CustomListState};
pub use fixed::FixedToggle;
pub use upload::{UploadPhase, UploadState, UploadTest};
