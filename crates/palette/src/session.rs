use chordmode::{ChordRecognizer, ChordResponse, HeldKeys, Phase};
use fuzzmatch::MatchResult;
use keytoken::KeyEvent;
use tracing::{debug, trace};

use crate::{
    Action, CatalogProvider, RenderSink, ResultView,
    provider::ChordSource,
};

/// What caused an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Enter on the focused palette row.
    Palette,
    /// A completed chord.
    Chord,
}

/// Result of feeding a key event to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The event changed nothing observable.
    Ignored,
    /// The reserved chord opened the palette.
    Opened,
    /// Escape closed the palette.
    Closed,
    /// Arrow navigation moved the highlight to this row.
    Focus(usize),
    /// Keys are held and this many chords can still complete.
    Tracking {
        /// Live chord candidates.
        candidates: usize,
    },
    /// An action was activated.
    Activated {
        /// Display text of the activated action.
        text: String,
        /// What triggered it.
        trigger: Trigger,
    },
}

/// State that exists only while the palette is open.
#[derive(Debug)]
struct OpenPalette {
    /// Actions snapshotted at open.
    commands: Vec<Action>,
    /// Query the results were computed for.
    query: String,
    /// Ranked matches, indexing into `commands`.
    results: Vec<MatchResult>,
    /// Highlighted row.
    focus: usize,
}

impl OpenPalette {
    /// Snapshot `commands` and run the empty query.
    fn new(commands: Vec<Action>) -> Self {
        let mut palette = Self {
            commands,
            query: String::new(),
            results: Vec::new(),
            focus: 0,
        };
        palette.search("");
        palette
    }

    /// Recompute results for `query` and reset the highlight.
    fn search(&mut self, query: &str) {
        let texts: Vec<&str> = self.commands.iter().map(Action::text).collect();
        self.results = fuzzmatch::search(&texts, query);
        self.query = query.to_string();
        self.focus = 0;
    }

    /// Rows for the renderer.
    fn views(&self) -> Vec<ResultView<'_>> {
        self.results
            .iter()
            .map(|r| ResultView {
                action: &self.commands[r.index],
                segments: &r.segments,
            })
            .collect()
    }

    /// The highlighted action, if any rows exist.
    fn focused(&self) -> Option<&Action> {
        self.results
            .get(self.focus)
            .map(|r| &self.commands[r.index])
    }
}

/// Send the full result list to the sink.
fn draw<R: RenderSink>(sink: &mut R, palette: &OpenPalette) {
    let views = palette.views();
    sink.render(&palette.query, &views, palette.focus);
}

/// The palette and chord engine for one page.
///
/// Owns every piece of mutable state: the chord recognizer's held keys and
/// candidates, and, while open, the palette's snapshot, query, results and
/// focus. Hosts feed raw key events through [`key_down`](Self::key_down) and
/// [`key_up`](Self::key_up) whether or not the palette is visible, and text
/// box changes through [`input_changed`](Self::input_changed).
pub struct PaletteSession<P, R> {
    /// Source of actions.
    provider: P,
    /// Renderer.
    sink: R,
    /// Chord engine; runs regardless of palette visibility.
    chords: ChordRecognizer<Action>,
    /// Present while the palette is open.
    palette: Option<OpenPalette>,
}

impl<P: CatalogProvider, R: RenderSink> PaletteSession<P, R> {
    /// Create a closed session with an idle chord engine.
    pub fn new(provider: P, sink: R) -> Self {
        Self {
            provider,
            sink,
            chords: ChordRecognizer::new(),
            palette: None,
        }
    }

    /// Whether the palette is showing.
    pub fn is_open(&self) -> bool {
        self.palette.is_some()
    }

    /// The current query while open.
    pub fn query(&self) -> Option<&str> {
        self.palette.as_ref().map(|p| p.query.as_str())
    }

    /// The highlighted row while open.
    pub fn focus(&self) -> Option<usize> {
        self.palette.as_ref().map(|p| p.focus)
    }

    /// Ranked rows while open; empty when closed.
    pub fn results(&self) -> Vec<ResultView<'_>> {
        self.palette.as_ref().map(OpenPalette::views).unwrap_or_default()
    }

    /// Keys the chord engine considers held.
    pub fn held(&self) -> &HeldKeys {
        self.chords.held()
    }

    /// Chord engine phase.
    pub fn chord_phase(&self) -> Phase {
        self.chords.phase()
    }

    /// The renderer.
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// The renderer, mutably.
    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    /// The action provider, mutably, e.g. to swap in a rescanned catalog.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Process a key-down.
    ///
    /// The reserved `ctrl+shift+P` opens a closed palette and is not seen by
    /// the chord engine. While open, arrow keys, Enter and Escape drive the
    /// palette first. Every key-down, navigation keys included, then reaches
    /// the chord engine.
    ///
    /// When a navigation key also completes a chord, the chord's activation
    /// is reported; the palette's own effect is still visible through the
    /// sink.
    pub fn key_down(&mut self, ev: &KeyEvent) -> KeyOutcome {
        if ev.is_palette_trigger() && self.open() {
            return KeyOutcome::Opened;
        }
        let nav = if self.palette.is_some() {
            self.navigate(&ev.key)
        } else {
            None
        };
        let resp = self
            .chords
            .key_down(ev.token(), &mut ChordSource(&mut self.provider));
        let chord = Self::chord_outcome(resp);
        match (nav, chord) {
            (_, activated @ KeyOutcome::Activated { .. }) => activated,
            (Some(nav), _) => nav,
            (None, chord) => chord,
        }
    }

    /// Process a key-up. Only the chord engine cares.
    pub fn key_up(&mut self, ev: &KeyEvent) -> KeyOutcome {
        let resp = self
            .chords
            .key_up(&ev.token(), &mut ChordSource(&mut self.provider));
        Self::chord_outcome(resp)
    }

    /// Handle a palette navigation key, or return `None` for anything else.
    fn navigate(&mut self, key: &str) -> Option<KeyOutcome> {
        let outcome = match key {
            "ArrowUp" => self.focus_up().map_or(KeyOutcome::Ignored, KeyOutcome::Focus),
            "ArrowDown" => self
                .focus_down()
                .map_or(KeyOutcome::Ignored, KeyOutcome::Focus),
            "Enter" => match self.submit() {
                Some(text) => KeyOutcome::Activated {
                    text,
                    trigger: Trigger::Palette,
                },
                None => KeyOutcome::Ignored,
            },
            "Escape" => {
                self.close();
                KeyOutcome::Closed
            }
            _ => return None,
        };
        Some(outcome)
    }

    /// Translate a chord response, running the activation if one fired.
    fn chord_outcome(resp: ChordResponse<Action>) -> KeyOutcome {
        match resp {
            ChordResponse::Idle => KeyOutcome::Ignored,
            ChordResponse::Tracking { candidates } => KeyOutcome::Tracking { candidates },
            ChordResponse::Activated(action) => {
                debug!(text = action.text(), "chord activation");
                action.activate();
                KeyOutcome::Activated {
                    text: action.text().to_string(),
                    trigger: Trigger::Chord,
                }
            }
        }
    }

    /// Open the palette: snapshot the catalog, clear the query, render the
    /// unfiltered list and cancel any chord in progress.
    ///
    /// Returns false if the palette was already open.
    pub fn open(&mut self) -> bool {
        if self.palette.is_some() {
            return false;
        }
        self.chords.reset();
        let palette = OpenPalette::new(self.provider.discover());
        debug!(actions = palette.commands.len(), "palette opened");
        draw(&mut self.sink, &palette);
        self.palette = Some(palette);
        true
    }

    /// Close the palette. Chord tracking is unaffected.
    ///
    /// Returns false if it was not open.
    pub fn close(&mut self) -> bool {
        if self.palette.take().is_none() {
            return false;
        }
        debug!("palette closed");
        self.sink.close();
        true
    }

    /// A click landed on the backdrop around the palette.
    pub fn backdrop_clicked(&mut self) -> bool {
        self.close()
    }

    /// The text box now holds `value`.
    ///
    /// Re-runs the search only when the value differs from the current query;
    /// repeated notifications for the same text are ignored. Returns whether
    /// a search ran.
    pub fn input_changed(&mut self, value: &str) -> bool {
        let Some(palette) = self.palette.as_mut() else {
            return false;
        };
        if palette.query == value {
            return false;
        }
        palette.search(value);
        trace!(query = value, results = palette.results.len(), "query changed");
        draw(&mut self.sink, palette);
        true
    }

    /// Move the highlight up one row, stopping at the first.
    pub fn focus_up(&mut self) -> Option<usize> {
        let palette = self.palette.as_mut()?;
        palette.focus = palette.focus.saturating_sub(1);
        self.sink.focus(palette.focus);
        Some(palette.focus)
    }

    /// Move the highlight down one row, stopping at the last.
    pub fn focus_down(&mut self) -> Option<usize> {
        let palette = self.palette.as_mut()?;
        let last = palette.results.len().saturating_sub(1);
        palette.focus = (palette.focus + 1).min(last);
        self.sink.focus(palette.focus);
        Some(palette.focus)
    }

    /// Activate the highlighted row and close the palette.
    ///
    /// With no rows nothing happens and the palette stays open. Returns the
    /// activated action's text.
    pub fn submit(&mut self) -> Option<String> {
        let action = self.palette.as_ref()?.focused()?.clone();
        debug!(text = action.text(), "palette activation");
        action.activate();
        self.close();
        Some(action.text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NullSink, StaticCatalog};

    fn session(texts: &[&str]) -> PaletteSession<StaticCatalog, NullSink> {
        let actions = texts.iter().map(|t| Action::new(*t, None, || {})).collect();
        PaletteSession::new(StaticCatalog::new(actions), NullSink)
    }

    #[test]
    fn open_shows_everything_alphabetically() {
        let mut s = session(&["Save", "Open", "Close"]);
        assert!(s.open());
        assert!(!s.open());
        let texts: Vec<&str> = s.results().iter().map(|r| r.action.text()).collect();
        assert_eq!(texts, vec!["Close", "Open", "Save"]);
        assert_eq!(s.focus(), Some(0));
        assert_eq!(s.query(), Some(""));
    }

    #[test]
    fn empty_query_order_ignores_length() {
        let mut s = session(&["Submit", "Dismiss"]);
        s.open();
        let texts: Vec<&str> = s.results().iter().map(|r| r.action.text()).collect();
        assert_eq!(texts, vec!["Dismiss", "Submit"]);
    }

    #[test]
    fn focus_clamps() {
        let mut s = session(&["a1", "a2", "a3"]);
        s.open();
        assert_eq!(s.focus_up(), Some(0));
        assert_eq!(s.focus_down(), Some(1));
        assert_eq!(s.focus_down(), Some(2));
        assert_eq!(s.focus_down(), Some(2));
        assert_eq!(s.focus_up(), Some(1));
    }

    #[test]
    fn focus_with_no_results_stays_at_zero() {
        let mut s = session(&["Open"]);
        s.open();
        assert!(s.input_changed("zzz"));
        assert!(s.results().is_empty());
        assert_eq!(s.focus_down(), Some(0));
        assert_eq!(s.submit(), None);
        assert!(s.is_open());
    }

    #[test]
    fn closed_session_ignores_palette_calls() {
        let mut s = session(&["Open"]);
        assert_eq!(s.focus_down(), None);
        assert!(!s.input_changed("o"));
        assert!(!s.close());
        assert!(s.results().is_empty());
    }

    #[test]
    fn same_query_is_a_no_op() {
        let mut s = session(&["Open", "Close"]);
        s.open();
        assert!(s.input_changed("o"));
        s.focus_down();
        assert!(!s.input_changed("o"));
        assert_eq!(s.focus(), Some(1));
        assert!(s.input_changed("op"));
        assert_eq!(s.focus(), Some(0));
    }
}
