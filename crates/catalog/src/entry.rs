use keytoken::ChordSpec;

/// Build the display text for an action.
///
/// `"label: description"` when both are present, otherwise whichever one is
/// present, otherwise the empty string. Empty strings count as absent.
pub fn display_text(label: Option<&str>, description: Option<&str>) -> String {
    let label = label.filter(|s| !s.is_empty());
    let description = description.filter(|s| !s.is_empty());
    match (label, description) {
        (Some(l), Some(d)) => format!("{l}: {d}"),
        (Some(one), None) | (None, Some(one)) => one.to_string(),
        (None, None) => String::new(),
    }
}

/// A validated catalog entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionEntry {
    /// Short name.
    pub label: Option<String>,
    /// Longer text.
    pub description: Option<String>,
    /// Parsed shortcut, if any.
    pub shortcut: Option<ChordSpec>,
    /// Disabled entries are never offered to the palette or the chord engine.
    pub disabled: bool,
}

impl ActionEntry {
    /// Text shown in the palette and used for matching.
    pub fn text(&self) -> String {
        display_text(self.label.as_deref(), self.description.as_deref())
    }
}

/// An ordered list of catalog entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Entries in file order, including disabled ones.
    entries: Vec<ActionEntry>,
}

impl Catalog {
    /// Build a catalog from entries.
    pub fn from_entries(entries: Vec<ActionEntry>) -> Self {
        Self { entries }
    }

    /// All entries in order.
    pub fn entries(&self) -> &[ActionEntry] {
        &self.entries
    }

    /// Entries that are not disabled, in order.
    pub fn enabled(&self) -> impl Iterator<Item = &ActionEntry> {
        self.entries.iter().filter(|e| !e.disabled)
    }

    /// Number of entries, including disabled ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
