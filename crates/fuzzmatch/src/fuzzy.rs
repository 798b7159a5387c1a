use crate::segment::{Segment, push_run};

/// The result for an empty query: the whole text as one unmatched segment.
pub fn trivial_segments(text: &str) -> Vec<Segment> {
    vec![Segment::unmatched(text)]
}

/// Case-insensitive comparison of two characters.
fn same_char(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Match `query` against `text` as a greedy, case-insensitive subsequence.
///
/// Returns the highlight segments for a successful match, or an empty vector
/// when `query` is not a subsequence of `text`. An empty query always
/// succeeds with [`trivial_segments`].
///
/// The scan is a single leftmost pass with no backtracking: each text
/// character is consumed by the query if it equals the next query character,
/// otherwise it is recorded as unmatched. Once the query is exhausted, the
/// unscanned tail of `text` becomes a final unmatched segment, except that a
/// tail of exactly one character is dropped. Renderers see that character
/// missing; callers that need the full text should use the candidate text,
/// not the concatenated segments.
pub fn match_segments(text: &str, query: &str) -> Vec<Segment> {
    if query.is_empty() {
        return trivial_segments(text);
    }
    let needle: Vec<char> = query.chars().collect();
    let mut segments = Vec::new();
    let mut cursor = 0;
    let mut consumed = text.len();
    let mut buf = [0u8; 4];

    for (at, ch) in text.char_indices() {
        if cursor == needle.len() {
            consumed = at;
            break;
        }
        let hit = same_char(ch, needle[cursor]);
        if hit {
            cursor += 1;
        }
        push_run(&mut segments, hit, ch.encode_utf8(&mut buf));
    }

    if cursor != needle.len() {
        return Vec::new();
    }

    // A single trailing character is not emitted.
    let tail = &text[consumed..];
    if tail.chars().nth(1).is_some() {
        push_run(&mut segments, false, tail);
    }
    segments
}
