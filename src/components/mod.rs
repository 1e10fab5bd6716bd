//! UI Components
//!
//! Leptos components for the three sections of the page.

mod custom_extension_manager;
mod delete_confirm_button;
mod file_upload;
mod fixed_extension_list;
mod message_banner;

pub use custom_extension_manager::CustomExtensionManager;
pub use delete_confirm_button::DeleteConfirmButton;
pub use file_upload::FileUpload;
pub use fixed_extension_list::FixedExtensionList;
pub use message_banner::MessageBanner;
