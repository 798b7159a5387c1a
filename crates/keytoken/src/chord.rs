use std::{collections::BTreeSet, fmt};

use crate::{KeyToken, KeyTokenError};

/// A chord: the set of keys that must be held together to trigger an action.
///
/// The ordered token list is kept for display; matching only ever looks at
/// the unordered key set, so `shift+ctrl+k` and `ctrl+shift+k` require the
/// same keys.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChordSpec {
    /// Tokens in the order they were written, duplicates removed.
    tokens: Vec<KeyToken>,
    /// The unordered key set used for matching.
    keys: BTreeSet<KeyToken>,
}

impl ChordSpec {
    /// Parses a chord specification of the form `ctrl+shift+k`.
    ///
    /// - Components are separated by `+` and trimmed, except that a lone
    ///   `" "` component is kept as a literal space.
    /// - Each component is normalized via [`KeyToken::from_raw`], so both
    ///   `Control` and `ctrl` name the same key.
    /// - Blank components are rejected.
    pub fn parse(spec: &str) -> Result<Self, KeyTokenError> {
        if spec.trim().is_empty() && spec != " " {
            return Err(KeyTokenError::Empty);
        }
        let mut tokens = Vec::new();
        for part in spec.split('+') {
            let raw = if part == " " { part } else { part.trim() };
            if raw.is_empty() {
                return Err(KeyTokenError::EmptyComponent {
                    spec: spec.to_string(),
                });
            }
            tokens.push(KeyToken::from_raw(raw));
        }
        Ok(Self::from_tokens(tokens))
    }

    /// Build a chord from already-normalized tokens.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = KeyToken>,
    {
        let mut ordered = Vec::new();
        let mut keys = BTreeSet::new();
        for tok in tokens {
            if keys.insert(tok.clone()) {
                ordered.push(tok);
            }
        }
        Self {
            tokens: ordered,
            keys,
        }
    }

    /// Tokens in written order.
    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    /// The unordered set of keys this chord requires.
    pub fn keys(&self) -> &BTreeSet<KeyToken> {
        &self.keys
    }

    /// Number of distinct keys in the chord.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the chord names no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for ChordSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.tokens.iter().map(KeyToken::as_str).collect();
        f.write_str(&parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_chord() {
        let c = ChordSpec::parse("ctrl+shift+k").expect("parse");
        assert_eq!(c.len(), 3);
        assert!(c.keys().contains(&KeyToken::from_raw("shift")));
        assert_eq!(c.to_string(), "ctrl+shift+k");
    }

    #[test]
    fn host_names_and_case() {
        let c = ChordSpec::parse("Control + Shift + K").expect("parse");
        assert_eq!(c.to_string(), "ctrl+shift+k");
        let esc = ChordSpec::parse("Escape").expect("parse");
        assert_eq!(esc.to_string(), "esc");
    }

    #[test]
    fn order_does_not_matter_for_keys() {
        let a = ChordSpec::parse("shift+ctrl+k").expect("parse");
        let b = ChordSpec::parse("ctrl+shift+k").expect("parse");
        assert_eq!(a.keys(), b.keys());
        assert_ne!(a.to_string(), b.to_string());
    }

    #[test]
    fn duplicates_collapse() {
        let c = ChordSpec::parse("ctrl+ctrl+k").expect("parse");
        assert_eq!(c.len(), 2);
        assert_eq!(c.to_string(), "ctrl+k");
    }

    #[test]
    fn literal_space() {
        let c = ChordSpec::parse("ctrl+ ").expect("parse");
        assert!(c.keys().contains(&KeyToken::from_raw("space")));
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(ChordSpec::parse(""), Err(KeyTokenError::Empty));
        assert_eq!(ChordSpec::parse("   "), Err(KeyTokenError::Empty));
        assert!(matches!(
            ChordSpec::parse("ctrl++k"),
            Err(KeyTokenError::EmptyComponent { .. })
        ));
        assert!(matches!(
            ChordSpec::parse("ctrl+"),
            Err(KeyTokenError::EmptyComponent { .. })
        ));
    }
}
