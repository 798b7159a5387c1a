use std::collections::BTreeSet;

use keytoken::KeyToken;
use tracing::{debug, trace};

use crate::{ChordCatalog, HeldKeys};

/// Every held key is one the chord requires: the chord may still complete
/// as more keys arrive. Used when building and narrowing candidates.
pub fn is_compatible(required: &BTreeSet<KeyToken>, held: &HeldKeys) -> bool {
    held.as_set().is_subset(required)
}

/// Every key the chord requires is held: the chord is complete. Used for
/// the activation check.
pub fn is_satisfied(required: &BTreeSet<KeyToken>, held: &HeldKeys) -> bool {
    required.is_subset(held.as_set())
}

/// A chord still consistent with the held keys.
#[derive(Clone, Debug)]
pub struct ChordCandidate<A> {
    /// Keys the chord requires.
    pub required: BTreeSet<KeyToken>,
    /// Action fired when the chord completes.
    pub action: A,
}

/// Recognizer phase.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// No keys held.
    Idle,
    /// At least one key held; a candidate list is live.
    Tracking,
}

/// Result of feeding one key event to the recognizer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChordResponse<A> {
    /// Nothing held, nothing pending.
    Idle,
    /// Keys are held; `candidates` chords can still complete.
    Tracking {
        /// Number of live candidates.
        candidates: usize,
    },
    /// A chord completed. The recognizer has already reset to idle.
    Activated(A),
}

/// Tracks held keys and the chords that can still complete.
///
/// - The first key-down of a session rebuilds candidates from the catalog,
///   keeping chords compatible with the held key.
/// - Later key-downs narrow the existing list; the catalog is not consulted.
/// - Every key-up rebuilds from the catalog against what is still held.
///
/// After each key-down, the first candidate whose keys are exactly the held
/// keys fires, and the recognizer resets to idle.
#[derive(Debug)]
pub struct ChordRecognizer<A> {
    /// Keys currently down.
    held: HeldKeys,
    /// Chords still consistent with `held`, in catalog order.
    candidates: Vec<ChordCandidate<A>>,
}

impl<A> Default for ChordRecognizer<A> {
    fn default() -> Self {
        Self {
            held: HeldKeys::new(),
            candidates: Vec::new(),
        }
    }
}

impl<A: Clone> ChordRecognizer<A> {
    /// Create an idle recognizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, derived from the held keys.
    pub fn phase(&self) -> Phase {
        if self.held.is_empty() {
            Phase::Idle
        } else {
            Phase::Tracking
        }
    }

    /// Keys currently held.
    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    /// Live candidates in catalog order.
    pub fn candidates(&self) -> &[ChordCandidate<A>] {
        &self.candidates
    }

    /// Clear held keys and candidates unconditionally.
    pub fn reset(&mut self) {
        self.held.clear();
        self.candidates.clear();
    }

    /// Process a key-down.
    pub fn key_down<C>(&mut self, key: KeyToken, catalog: &mut C) -> ChordResponse<A>
    where
        C: ChordCatalog<Action = A> + ?Sized,
    {
        let starting = self.held.is_empty();
        trace!(key = %key, starting, "chord key down");
        self.held.on_key_down(key);
        if starting {
            self.rebuild(catalog);
        } else {
            self.candidates
                .retain(|cand| is_compatible(&cand.required, &self.held));
        }
        self.try_activate()
    }

    /// Process a key-up. Never activates.
    pub fn key_up<C>(&mut self, key: &KeyToken, catalog: &mut C) -> ChordResponse<A>
    where
        C: ChordCatalog<Action = A> + ?Sized,
    {
        trace!(key = %key, "chord key up");
        self.held.on_key_up(key);
        self.rebuild(catalog);
        self.response()
    }

    /// Replace the candidate list with every catalog chord compatible with
    /// the held keys. With nothing held, no candidates survive.
    fn rebuild<C>(&mut self, catalog: &mut C)
    where
        C: ChordCatalog<Action = A> + ?Sized,
    {
        if self.held.is_empty() {
            self.candidates.clear();
            return;
        }
        let held = &self.held;
        self.candidates = catalog
            .bindings()
            .into_iter()
            .filter(|b| is_compatible(&b.keys, held))
            .map(|b| ChordCandidate {
                required: b.keys,
                action: b.action,
            })
            .collect();
        trace!(
            held = self.held.len(),
            candidates = self.candidates.len(),
            "chord candidates rebuilt"
        );
    }

    /// Fire the first candidate that is exactly satisfied, if any.
    fn try_activate(&mut self) -> ChordResponse<A> {
        let held = &self.held;
        let hit = self.candidates.iter().position(|cand| {
            cand.required.len() == held.len() && is_satisfied(&cand.required, held)
        });
        let Some(idx) = hit else {
            return self.response();
        };
        let cand = self.candidates.swap_remove(idx);
        debug!(
            keys = %join_keys(&cand.required),
            "chord activated"
        );
        self.reset();
        ChordResponse::Activated(cand.action)
    }

    /// Describe the current phase as a response.
    fn response(&self) -> ChordResponse<A> {
        match self.phase() {
            Phase::Idle => ChordResponse::Idle,
            Phase::Tracking => ChordResponse::Tracking {
                candidates: self.candidates.len(),
            },
        }
    }
}

/// Render a key set as `a+b+c` for logs.
fn join_keys(keys: &BTreeSet<KeyToken>) -> String {
    keys.iter()
        .map(KeyToken::as_str)
        .collect::<Vec<_>>()
        .join("+")
}
