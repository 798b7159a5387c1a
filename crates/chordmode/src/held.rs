use std::collections::{BTreeSet, btree_set};

use keytoken::KeyToken;

/// The set of keys currently held down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    /// Held tokens, ordered for stable logging.
    held: BTreeSet<KeyToken>,
}

impl HeldKeys {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return true if the key is currently considered down.
    pub fn is_down(&self, key: &KeyToken) -> bool {
        self.held.contains(key)
    }

    /// Record a key down; returns true for the first down, false for repeats.
    pub fn on_key_down(&mut self, key: KeyToken) -> bool {
        self.held.insert(key)
    }

    /// Record a key up; returns true if the key was held.
    pub fn on_key_up(&mut self, key: &KeyToken) -> bool {
        self.held.remove(key)
    }

    /// Forget every held key.
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Number of held keys.
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// True when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// The held keys as a set.
    pub fn as_set(&self) -> &BTreeSet<KeyToken> {
        &self.held
    }

    /// Iterate held keys in token order.
    pub fn iter(&self) -> btree_set::Iter<'_, KeyToken> {
        self.held.iter()
    }
}

impl<'a> IntoIterator for &'a HeldKeys {
    type Item = &'a KeyToken;
    type IntoIter = btree_set::Iter<'a, KeyToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
