//! Browser Visitor Store
//!
//! Persists the visitor id in `window.localStorage`.

use fileblock_core::VisitorStore;

/// `localStorage`-backed store; every call degrades to "absent" when
/// storage is unavailable (private mode, sandboxed iframe, ...)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalVisitorStore;

impl LocalVisitorStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl VisitorStore for LocalVisitorStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> bool {
        match Self::storage() {
            Some(storage) => storage.set_item(key, value).is_ok(),
            None => false,
        }
    }
}
