//! Serde shapes for the on-disk catalog, before validation.

use serde::Deserialize;

/// Top-level catalog file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCatalog {
    /// Entries in file order.
    pub actions: Vec<RawEntry>,
}

/// One action as written in the file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawEntry {
    /// Short name, e.g. an accessible label.
    pub label: Option<String>,
    /// Longer text, e.g. a tooltip or the element's visible text.
    pub description: Option<String>,
    /// Chord spec such as `ctrl+shift+k`.
    pub shortcut: Option<String>,
    /// Disabled entries are kept in the catalog but never offered.
    pub disabled: bool,
}
