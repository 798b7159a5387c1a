//! Transcript sink: records what the palette draws and what fires.

use std::sync::Arc;

use fuzzmatch::Segment;
use palette::{RenderSink, ResultView};
use parking_lot::Mutex;
use serde::Serialize;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    /// Action text.
    pub text: String,
    /// Highlight runs over `text`.
    pub segments: Vec<Segment>,
}

/// Something observable that happened during a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Line {
    /// A fresh result list.
    Render {
        /// Query the rows were ranked for.
        query: String,
        /// Highlighted row.
        focus: usize,
        /// Ranked rows.
        rows: Vec<Row>,
    },
    /// The highlight moved.
    Focus {
        /// New highlighted row.
        focus: usize,
    },
    /// The palette closed.
    Close,
    /// An action's activation ran.
    Activate {
        /// Display text of the action.
        text: String,
    },
}

impl Line {
    /// Plain-text rendering, possibly spanning several lines.
    pub fn to_text(&self) -> String {
        match self {
            Self::Render { query, focus, rows } => {
                let mut out = format!("render {query:?}");
                for (i, row) in rows.iter().enumerate() {
                    let marker = if i == *focus { '>' } else { ' ' };
                    out.push('\n');
                    out.push_str(&format!("  {marker} {}", bracketed(&row.segments)));
                }
                out
            }
            Self::Focus { focus } => format!("focus {focus}"),
            Self::Close => "close".to_string(),
            Self::Activate { text } => format!("activate {text:?}"),
        }
    }
}

/// Wrap each matched run in brackets: `[O]pen [F]ile`.
pub fn bracketed(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        if seg.matched {
            out.push('[');
            out.push_str(&seg.text);
            out.push(']');
        } else {
            out.push_str(&seg.text);
        }
    }
    out
}

/// Ordered record of a replay, shared between the sink and activators.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    /// Lines in the order they happened.
    lines: Arc<Mutex<Vec<Line>>>,
}

impl Transcript {
    /// Append a line.
    pub fn push(&self, line: Line) {
        self.lines.lock().push(line);
    }

    /// Snapshot of every line so far.
    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().clone()
    }
}

/// Render sink that appends to a [`Transcript`].
#[derive(Debug, Clone)]
pub struct TranscriptSink {
    /// Destination.
    transcript: Transcript,
}

impl TranscriptSink {
    /// Record into `transcript`.
    pub fn new(transcript: Transcript) -> Self {
        Self { transcript }
    }
}

impl RenderSink for TranscriptSink {
    fn render(&mut self, query: &str, results: &[ResultView<'_>], focus: usize) {
        let rows = results
            .iter()
            .map(|r| Row {
                text: r.action.text().to_string(),
                segments: r.segments.to_vec(),
            })
            .collect();
        self.transcript.push(Line::Render {
            query: query.to_string(),
            focus,
            rows,
        });
    }

    fn focus(&mut self, focus: usize) {
        self.transcript.push(Line::Focus { focus });
    }

    fn close(&mut self) {
        self.transcript.push(Line::Close);
    }
}
