use std::{fmt, sync::Arc};

use catalog::ActionEntry;
use keytoken::ChordSpec;

/// Callback that performs an action's native activation (e.g. a click).
pub type Activator = Arc<dyn Fn() + Send + Sync>;

/// An activatable item offered by the host.
///
/// Cheap to clone; clones share the activation callback.
#[derive(Clone)]
pub struct Action {
    /// Display text used for matching and rendering.
    text: String,
    /// Optional chord that fires this action directly.
    shortcut: Option<ChordSpec>,
    /// Native activation.
    activate: Activator,
}

impl Action {
    /// Create an action from its text, optional shortcut and activation callback.
    pub fn new<F>(text: impl Into<String>, shortcut: Option<ChordSpec>, activate: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            text: text.into(),
            shortcut,
            activate: Arc::new(activate),
        }
    }

    /// Build an action from a catalog entry. Disabled entries yield `None`.
    pub fn from_entry(entry: &ActionEntry, activate: Activator) -> Option<Self> {
        if entry.disabled {
            return None;
        }
        Some(Self {
            text: entry.text(),
            shortcut: entry.shortcut.clone(),
            activate,
        })
    }

    /// Display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bound chord, if any.
    pub fn shortcut(&self) -> Option<&ChordSpec> {
        self.shortcut.as_ref()
    }

    /// Run the activation callback.
    pub fn activate(&self) {
        (self.activate)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("text", &self.text)
            .field("shortcut", &self.shortcut.as_ref().map(ToString::to_string))
            .finish_non_exhaustive()
    }
}
