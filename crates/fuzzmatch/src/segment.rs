use serde::Serialize;

/// A maximal run of characters that share the same matched status.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Segment {
    /// Whether the characters in this run were consumed by the query.
    pub matched: bool,
    /// The run's text, in original case.
    pub text: String,
}

impl Segment {
    /// A matched run.
    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            matched: true,
            text: text.into(),
        }
    }

    /// An unmatched run.
    pub fn unmatched(text: impl Into<String>) -> Self {
        Self {
            matched: false,
            text: text.into(),
        }
    }
}

/// Append `text` to the run list, extending the last run when its status agrees.
///
/// Adjacent segments therefore never share a `matched` value.
pub fn push_run(segments: &mut Vec<Segment>, matched: bool, text: &str) {
    match segments.last_mut() {
        Some(last) if last.matched == matched => last.text.push_str(text),
        _ => segments.push(Segment {
            matched,
            text: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_merge() {
        let mut segs = Vec::new();
        push_run(&mut segs, true, "a");
        push_run(&mut segs, true, "b");
        push_run(&mut segs, false, "c");
        push_run(&mut segs, false, "d");
        push_run(&mut segs, true, "e");
        assert_eq!(
            segs,
            vec![
                Segment::matched("ab"),
                Segment::unmatched("cd"),
                Segment::matched("e"),
            ]
        );
    }
}
