use std::collections::BTreeSet;

use keytoken::{ChordSpec, KeyToken};

/// A chord bound to an action, as reported by the catalog.
#[derive(Clone, Debug)]
pub struct ChordBinding<A> {
    /// Keys that must be held together.
    pub keys: BTreeSet<KeyToken>,
    /// The action to fire.
    pub action: A,
}

impl<A> ChordBinding<A> {
    /// Bind the keys of `chord` to `action`.
    pub fn new(chord: &ChordSpec, action: A) -> Self {
        Self {
            keys: chord.keys().clone(),
            action,
        }
    }
}

/// Source of the live chord catalog.
///
/// The recognizer calls [`bindings`](ChordCatalog::bindings) whenever it
/// rebuilds its candidate list, so the catalog may change freely between
/// calls. Bindings are considered in the order returned.
pub trait ChordCatalog {
    /// Handle type passed back on activation.
    type Action: Clone;

    /// Every chord-bound action currently present.
    fn bindings(&mut self) -> Vec<ChordBinding<Self::Action>>;
}

impl<A, F> ChordCatalog for F
where
    A: Clone,
    F: FnMut() -> Vec<ChordBinding<A>>,
{
    type Action = A;

    fn bindings(&mut self) -> Vec<ChordBinding<A>> {
        self()
    }
}
