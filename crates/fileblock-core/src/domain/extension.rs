//! Extension Entity
//!
//! One block-list entry, fixed or custom.

use serde::{Deserialize, Serialize};

/// Whether an entry is predefined or user-created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExtensionKind {
    /// Predefined; only the `checked` flag can change
    Fixed,
    /// User-created; blocks by existence, never toggled
    Custom,
}

/// Extension data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Server-assigned, unique across fixed and custom entries
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ExtensionKind,
    #[serde(default)]
    pub checked: bool,
    /// Last change time as sent by the server (kept opaque)
    #[serde(default)]
    pub changed_at: String,
    /// Visitor id of the last change
    #[serde(default, rename = "changedByIP", alias = "changedByIp")]
    pub changed_by: String,
}

impl Extension {
    pub fn fixed(id: i64, name: impl Into<String>, checked: bool) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ExtensionKind::Fixed,
            checked,
            changed_at: String::new(),
            changed_by: String::new(),
        }
    }

    pub fn custom(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ExtensionKind::Custom,
            checked: true,
            changed_at: String::new(),
            changed_by: String::new(),
        }
    }

    /// True when uploads with this extension are rejected
    pub fn is_blocking(&self) -> bool {
        match self.kind {
            ExtensionKind::Fixed => self.checked,
            ExtensionKind::Custom => true,
        }
    }

    /// Name with a leading dot, e.g. `.zip`
    pub fn dotted(&self) -> String {
        format!(".{}", self.name)
    }

    /// Audit line for hover text, if the server recorded a change
    pub fn last_change(&self) -> Option<String> {
        match (self.changed_at.is_empty(), self.changed_by.is_empty()) {
            (true, true) => None,
            (false, true) => Some(format!("changed {}", self.changed_at)),
            (true, false) => Some(format!("changed by {}", self.changed_by)),
            (false, false) => Some(format!("changed {} by {}", self.changed_at, self.changed_by)),
        }
    }
}
