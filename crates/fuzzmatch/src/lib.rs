//! Fuzzy matching for the command palette.
//!
//! Matching is a single greedy left-to-right subsequence scan: every query
//! character must appear in the candidate text in order, compared
//! case-insensitively. A successful match is described as a list of
//! [`Segment`]s, alternating runs of matched and unmatched characters that
//! renderers use for highlighting.
//!
//! Ranking orders matches by:
//! 1. number of segments (more contiguous matches first),
//! 2. length of the first segment (earlier matches first),
//! 3. the candidate text itself.
//!
//! An empty query filters nothing and orders candidates by text alone.
//!
//! The entry point for a full palette query is [`search`].

mod fuzzy;
mod rank;
mod segment;

pub use fuzzy::{match_segments, trivial_segments};
pub use rank::{MatchResult, compare, search};
pub use segment::Segment;
