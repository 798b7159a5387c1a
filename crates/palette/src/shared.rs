use std::sync::Arc;

use keytoken::KeyEvent;
use parking_lot::Mutex;

use crate::{CatalogProvider, KeyOutcome, PaletteSession, RenderSink};

/// A [`PaletteSession`] behind a mutex, for hosts that deliver key events
/// from more than one thread.
///
/// Each call holds the lock for the whole event, so a key-down and a key-up
/// can never interleave inside the chord engine. Activation callbacks run
/// while the lock is held and must not call back into the same session.
pub struct SharedSession<P, R> {
    /// The serialized session.
    inner: Arc<Mutex<PaletteSession<P, R>>>,
}

impl<P, R> Clone for SharedSession<P, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P: CatalogProvider, R: RenderSink> SharedSession<P, R> {
    /// Wrap a session.
    pub fn new(session: PaletteSession<P, R>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// See [`PaletteSession::key_down`].
    pub fn key_down(&self, ev: &KeyEvent) -> KeyOutcome {
        self.inner.lock().key_down(ev)
    }

    /// See [`PaletteSession::key_up`].
    pub fn key_up(&self, ev: &KeyEvent) -> KeyOutcome {
        self.inner.lock().key_up(ev)
    }

    /// See [`PaletteSession::input_changed`].
    pub fn input_changed(&self, value: &str) -> bool {
        self.inner.lock().input_changed(value)
    }

    /// See [`PaletteSession::open`].
    pub fn open(&self) -> bool {
        self.inner.lock().open()
    }

    /// See [`PaletteSession::close`].
    pub fn close(&self) -> bool {
        self.inner.lock().close()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<T>(&self, f: impl FnOnce(&mut PaletteSession<P, R>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
