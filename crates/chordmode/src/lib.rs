//! Chord recognition over a stream of key-down/key-up events.
//!
//! A chord is an unordered set of keys that fires its action the moment all
//! of them are held at once. [`ChordRecognizer`] tracks the held keys and the
//! list of chords still consistent with them, pulling the live chord catalog
//! through [`ChordCatalog`] whenever it needs to rebuild that list.

mod catalog;
mod held;
mod state;

pub use catalog::{ChordBinding, ChordCatalog};
pub use held::HeldKeys;
pub use state::{ChordCandidate, ChordRecognizer, ChordResponse, Phase, is_compatible, is_satisfied};
