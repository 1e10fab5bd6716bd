//! Visitor Identity
//!
//! A random UUID-v4 string created once per browser and reused for every
//! request. Identity is advisory (audit trail on the server), so generation
//! never fails: without randomness it falls back to a fixed sentinel.

use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, warn};
use uuid::Builder;

/// Storage key of the persisted visitor id
pub const VISITOR_ID_KEY: &str = "visitorId";

/// Identity used when no random source is available
pub const VISITOR_ID_FALLBACK: &str = "NAN";

/// Key-value persistence surviving page reloads
pub trait VisitorStore {
    fn load(&self, key: &str) -> Option<String>;

    /// Returns false when the value could not be persisted
    fn save(&self, key: &str, value: &str) -> bool;
}

/// In-memory store (tests, or browsers without storage)
#[derive(Debug, Default)]
pub struct MemoryVisitorStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryVisitorStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.save(key, value);
        store
    }
}

impl VisitorStore for MemoryVisitorStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> bool {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        true
    }
}

/// Stored visitor id, or a new one persisted on first use
pub fn resolve_visitor_id(store: &impl VisitorStore) -> String {
    resolve_with(store, getrandom::getrandom)
}

fn resolve_with(
    store: &impl VisitorStore,
    fill: impl FnOnce(&mut [u8]) -> Result<(), getrandom::Error>,
) -> String {
    if let Some(existing) = store.load(VISITOR_ID_KEY).filter(|id| !id.is_empty()) {
        return existing;
    }

    let id = generate_with(fill);
    if store.save(VISITOR_ID_KEY, &id) {
        debug!("[identity] created visitor id {}", id);
    } else {
        warn!("[identity] visitor id {} could not be persisted", id);
    }
    id
}

fn generate_with(fill: impl FnOnce(&mut [u8]) -> Result<(), getrandom::Error>) -> String {
    let mut bytes = [0u8; 16];
    match fill(&mut bytes) {
        Ok(()) => Builder::from_random_bytes(bytes).into_uuid().to_string(),
        Err(e) => {
            warn!("[identity] no random source ({}), using fallback id", e);
            VISITOR_ID_FALLBACK.to_string()
        }
    }
}
