use fuzzmatch::Segment;

use crate::Action;

/// One ranked row as handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct ResultView<'a> {
    /// The matched action.
    pub action: &'a Action,
    /// Highlight segments for the action's text.
    pub segments: &'a [Segment],
}

/// Receiver for everything the palette wants drawn.
pub trait RenderSink {
    /// Draw a fresh result list with `focus` highlighted. Called on open and
    /// after every query change.
    fn render(&mut self, query: &str, results: &[ResultView<'_>], focus: usize);

    /// Move the highlight without changing the list.
    fn focus(&mut self, focus: usize);

    /// Tear the palette down.
    fn close(&mut self);
}

/// A sink that draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn render(&mut self, _query: &str, _results: &[ResultView<'_>], _focus: usize) {}

    fn focus(&mut self, _focus: usize) {}

    fn close(&mut self) {}
}
