use serde::Deserialize;

use crate::KeyToken;

/// A key event as reported by the host, before normalization.
///
/// Deserializes from records such as `(key: "Enter", ctrl: true)`; omitted
/// modifier flags default to false.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyEvent {
    /// Raw key name (`"a"`, `"P"`, `"Control"`, `" "`, ...).
    pub key: String,
    /// Whether a control key was held when the event fired.
    pub ctrl: bool,
    /// Whether a shift key was held when the event fired.
    pub shift: bool,
}

impl KeyEvent {
    /// Build an event for `key` with the given modifier flags.
    pub fn new(key: impl Into<String>, ctrl: bool, shift: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            shift,
        }
    }

    /// Build an event with no modifier flags set.
    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, false, false)
    }

    /// The normalized token for this event's key.
    pub fn token(&self) -> KeyToken {
        KeyToken::from_raw(&self.key)
    }

    /// True for the reserved palette trigger: `P` pressed with ctrl and shift held.
    ///
    /// The raw key is compared verbatim; with shift held the host reports an
    /// uppercase `P`.
    pub fn is_palette_trigger(&self) -> bool {
        self.ctrl && self.shift && self.key == "P"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_trigger() {
        assert!(KeyEvent::new("P", true, true).is_palette_trigger());
        assert!(!KeyEvent::new("p", true, true).is_palette_trigger());
        assert!(!KeyEvent::new("P", true, false).is_palette_trigger());
        assert!(!KeyEvent::new("P", false, true).is_palette_trigger());
    }

    #[test]
    fn deserializes_with_default_modifiers() {
        let ev: KeyEvent = ron::from_str(r#"(key: "Enter", ctrl: true)"#).unwrap();
        assert_eq!(ev, KeyEvent::new("Enter", true, false));
        assert!(ron::from_str::<KeyEvent>(r#"(key: "a", alt: true)"#).is_err());
    }

    #[test]
    fn token_normalizes() {
        assert_eq!(KeyEvent::plain(" ").token().as_str(), "space");
        assert_eq!(KeyEvent::new("K", true, true).token().as_str(), "k");
    }
}
