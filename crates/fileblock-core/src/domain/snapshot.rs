//! Block-List Snapshot
//!
//! The fixed list, the custom list and the custom count, as loaded once at
//! startup and then mutated by the controllers.

use serde::{Deserialize, Serialize};

use super::extension::Extension;

/// Live root state (matches the `/extensions` response)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub fixed_extensions: Vec<Extension>,
    #[serde(default)]
    pub custom_extensions: Vec<Extension>,
    /// Server count at load time, moved together with `custom_extensions`
    #[serde(rename = "currentCustomCount", default)]
    pub custom_count: u32,
}

impl Snapshot {
    /// Checked flag of the fixed entry called `name`
    pub fn fixed_checked(&self, name: &str) -> Option<bool> {
        self.fixed_extensions
            .iter()
            .find(|ext| ext.name == name)
            .map(|ext| ext.checked)
    }

    /// Set the flag of the fixed entry called `name`, returning the previous value
    pub fn set_fixed_checked(&mut self, name: &str, checked: bool) -> Option<bool> {
        self.fixed_extensions
            .iter_mut()
            .find(|ext| ext.name == name)
            .map(|ext| std::mem::replace(&mut ext.checked, checked))
    }

    /// Append a confirmed custom entry and advance the count
    pub fn push_custom(&mut self, extension: Extension) {
        self.custom_extensions.push(extension);
        self.custom_count += 1;
    }

    /// Drop the custom entry with `id`, retreating the count only if it was there
    pub fn remove_custom(&mut self, id: i64) -> Option<Extension> {
        let index = self.custom_extensions.iter().position(|ext| ext.id == id)?;
        self.custom_count = self.custom_count.saturating_sub(1);
        Some(self.custom_extensions.remove(index))
    }

    /// Whether the current list would reject an upload with extension `ext`
    pub fn is_blocked(&self, ext: &str) -> bool {
        self.fixed_extensions
            .iter()
            .chain(self.custom_extensions.iter())
            .any(|entry| entry.is_blocking() && entry.name.eq_ignore_ascii_case(ext))
    }
}

/// Lower-cased extension of `filename`, if it has one
///
/// `archive.tar.gz` -> `gz`; `.bashrc`, `notes.` and `README` have none.
pub fn extension_of(filename: &str) -> Option<String> {
    let dot = filename.rfind('.')?;
    if dot == 0 || dot == filename.len() - 1 {
        return None;
    }
    Some(filename[dot + 1..].to_lowercase())
}
