use std::cmp::Ordering;

use serde::Serialize;
use tracing::trace;

use crate::{Segment, fuzzy::match_segments};

/// A successful match of one candidate against the current query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchResult {
    /// Position of the candidate in the slice passed to [`search`].
    pub index: usize,
    /// Highlight segments; never empty.
    pub segments: Vec<Segment>,
}

impl MatchResult {
    /// Character length of the first segment.
    fn lead_len(&self) -> usize {
        self.segments
            .first()
            .map_or(0, |seg| seg.text.chars().count())
    }
}

/// Ranking order between two results, given their candidate texts.
///
/// Fewer segments rank first, then a shorter first segment, then the texts
/// in ordinal order.
pub fn compare(a: &MatchResult, a_text: &str, b: &MatchResult, b_text: &str) -> Ordering {
    a.segments
        .len()
        .cmp(&b.segments.len())
        .then_with(|| a.lead_len().cmp(&b.lead_len()))
        .then_with(|| a_text.cmp(b_text))
}

/// Match every candidate text against `query` and return the ranked matches.
///
/// Candidates that do not match are left out. With an empty query every
/// candidate is returned with its trivial segment and ordered by text alone;
/// segment count and first-segment length are skipped, since the trivial
/// segment's length is just the text length. The sort is stable: candidates
/// that compare equal keep their input order.
pub fn search<S: AsRef<str>>(texts: &[S], query: &str) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = texts
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let segments = match_segments(text.as_ref(), query);
            (!segments.is_empty()).then_some(MatchResult { index, segments })
        })
        .collect();
    if query.is_empty() {
        results.sort_by(|a, b| texts[a.index].as_ref().cmp(texts[b.index].as_ref()));
    } else {
        results.sort_by(|a, b| compare(a, texts[a.index].as_ref(), b, texts[b.index].as_ref()));
    }
    trace!(
        query,
        candidates = texts.len(),
        matched = results.len(),
        "search"
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked<'a>(texts: &[&'a str], query: &str) -> Vec<&'a str> {
        search(texts, query)
            .into_iter()
            .map(|r| texts[r.index])
            .collect()
    }

    #[test]
    fn empty_query_is_alphabetical() {
        let texts = ["Save", "Open", "Close", "New"];
        assert_eq!(ranked(&texts, ""), vec!["Close", "New", "Open", "Save"]);
        assert_eq!(search(&texts, "").len(), texts.len());
    }

    #[test]
    fn empty_query_ignores_text_length() {
        let texts = ["Submit", "Dismiss"];
        assert_eq!(ranked(&texts, ""), vec!["Dismiss", "Submit"]);
        let texts = ["Save All", "Open", "Close File: Current Tab"];
        assert_eq!(
            ranked(&texts, ""),
            vec!["Close File: Current Tab", "Open", "Save All"]
        );
    }

    #[test]
    fn ordinal_tiebreak_is_case_sensitive() {
        let texts = ["beta", "Beta", "alpha"];
        assert_eq!(ranked(&texts, ""), vec!["Beta", "alpha", "beta"]);
    }

    #[test]
    fn contiguous_first() {
        // "Save" -> [M"Sa", U"ve"] (2 segments)
        // "Select All" -> [M"S", U"elect ", M"A", U"ll"] (4 segments)
        let texts = ["Select All", "Save"];
        assert_eq!(ranked(&texts, "sa"), vec!["Save", "Select All"]);
    }

    #[test]
    fn earlier_start_first() {
        // Same segment count, different first-segment length.
        // "xxFile" -> [U"xx", M"File"]; "xFile" -> [U"x", M"File"]
        let texts = ["xxFile", "xFile"];
        assert_eq!(ranked(&texts, "file"), vec!["xFile", "xxFile"]);
    }

    #[test]
    fn non_matches_filtered() {
        let texts = ["Open", "Save", "Close"];
        assert_eq!(ranked(&texts, "zz"), Vec::<&str>::new());
        assert_eq!(ranked(&texts, "os"), vec!["Close"]);
    }

    #[test]
    fn duplicates_keep_input_order() {
        let texts = ["Same", "Other", "Same"];
        let results = search(&texts, "");
        let idx: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!(idx, vec![1, 0, 2]);
    }

    #[test]
    fn ordering_is_transitive() {
        let texts = [
            "Open File: New Tab",
            "Open Folder",
            "File: Save",
            "Format Document",
            "Toggle Fullscreen",
            "Go to File",
            "of",
        ];
        let results = search(&texts, "of");
        for a in &results {
            for b in &results {
                for c in &results {
                    let ab = compare(a, texts[a.index], b, texts[b.index]);
                    let bc = compare(b, texts[b.index], c, texts[c.index]);
                    let ac = compare(a, texts[a.index], c, texts[c.index]);
                    if ab == Ordering::Less && bc == Ordering::Less {
                        assert_eq!(ac, Ordering::Less);
                    }
                }
            }
        }
        for pair in results.windows(2) {
            assert_ne!(
                compare(&pair[0], texts[pair[0].index], &pair[1], texts[pair[1].index]),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn rerun_is_identical() {
        let texts = ["Open File", "Open Folder", "Close File"];
        assert_eq!(search(&texts, "of"), search(&texts, "of"));
    }
}
