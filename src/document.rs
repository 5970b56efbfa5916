//! Root attribute map reflecting shell state for the styling layer.
//!
//! The renderer and the dev server read `data-theme` and `data-mode` from
//! here instead of from the shell's fields, so the styling layer only ever
//! sees tokens.

use std::collections::BTreeMap;

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const MODE_ATTRIBUTE: &str = "data-mode";

/// String attributes on the document root.
///
/// `revision` counts writes that actually changed a value, so callers can
/// tell a repeated identical write from a real update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    attributes: BTreeMap<String, String>,
    revision: u64,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. Returns `true` if the stored value changed.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        if self.attributes.get(name).map(String::as_str) == Some(value) {
            return false;
        }
        self.attributes.insert(name.to_string(), value.to_string());
        self.revision += 1;
        true
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of every attribute, ordered by name.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}
