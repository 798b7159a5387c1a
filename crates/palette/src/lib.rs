//! Command palette session.
//!
//! The palette is a searchable list of the host's actions plus a chord
//! dispatcher that can fire any action with a bound shortcut directly. The
//! crate wires two engines together:
//! - [`fuzzmatch`] scores and highlights actions against the query, and
//! - [`chordmode`] tracks held keys and fires completed chords.
//!
//! Hosts supply actions through a [`CatalogProvider`] and draw through a
//! [`RenderSink`]; both are pulled or pushed only at well-defined points, so
//! the session never touches the host UI directly. [`PaletteSession`] is the
//! single owner of all mutable state; [`SharedSession`] serializes access
//! for multi-threaded hosts.

mod action;
mod provider;
mod session;
mod shared;
mod sink;

pub use action::{Action, Activator};
pub use fuzzmatch::Segment;
pub use keytoken::{ChordSpec, KeyEvent, KeyToken};
pub use provider::{CatalogProvider, StaticCatalog};
pub use session::{KeyOutcome, PaletteSession, Trigger};
pub use shared::SharedSession;
pub use sink::{NullSink, RenderSink, ResultView};
