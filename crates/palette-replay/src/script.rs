//! Key-event scripts and the runner that plays them through a session.
//!
//! A script is a RON list of steps:
//!
//! ```ron
//! [down("Control"), down("Shift"), down("P"), up("P"), up("Shift"), up("Control"),
//!  type("oft"), down("Enter"), up("Enter")]
//! ```
//!
//! `down`/`up` derive modifier flags from the held Control and Shift keys.
//! `press`/`release` deliver a host event verbatim, flags included:
//! `press((key: "Enter", ctrl: true))`.

use std::{fs, path::Path};

use palette::{CatalogProvider, KeyEvent, KeyOutcome, PaletteSession, RenderSink};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Press a key, named as the host reports it (`"Control"`, `"k"`, `"Enter"`).
    Down(String),
    /// Release a key.
    Up(String),
    /// Deliver a key-down event exactly as given.
    Press(KeyEvent),
    /// Deliver a key-up event exactly as given.
    Release(KeyEvent),
    /// Press and release each character in turn.
    Type(String),
    /// Press and release Backspace.
    Backspace,
    /// Click outside the palette.
    ClickBackdrop,
    /// Open the palette directly.
    Open,
    /// Close the palette directly.
    Close,
}

/// Parse a script from RON text.
pub fn parse(text: &str) -> Result<Vec<Step>> {
    ron::from_str(text).map_err(|e| Error::script(e.to_string()))
}

/// Read and parse a script file.
pub fn load(path: &Path) -> Result<Vec<Step>> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Plays steps through a session, standing in for the host page.
///
/// Tracks modifier state so key events carry the right flags, and keeps the
/// palette's text box contents: printable keys append, Backspace deletes, and
/// every key-up reports the box's value to the session.
pub struct Runner<P, R> {
    /// The session under test.
    session: PaletteSession<P, R>,
    /// Control is down.
    ctrl: bool,
    /// Shift is down.
    shift: bool,
    /// Text box contents while the palette is open.
    input: String,
}

impl<P: CatalogProvider, R: RenderSink> Runner<P, R> {
    /// Drive `session`.
    pub fn new(session: PaletteSession<P, R>) -> Self {
        Self {
            session,
            ctrl: false,
            shift: false,
            input: String::new(),
        }
    }

    /// The session being driven.
    pub fn session(&self) -> &PaletteSession<P, R> {
        &self.session
    }

    /// Play every step in order.
    pub fn run(&mut self, steps: &[Step]) {
        for step in steps {
            self.step(step);
        }
    }

    /// Play one step.
    pub fn step(&mut self, step: &Step) {
        match step {
            Step::Down(key) => {
                self.press(key);
            }
            Step::Up(key) => {
                self.release(key);
            }
            Step::Press(ev) => self.deliver_down(ev),
            Step::Release(ev) => self.deliver_up(ev),
            Step::Type(text) => {
                for ch in text.chars() {
                    let key = ch.to_string();
                    self.press(&key);
                    self.release(&key);
                }
            }
            Step::Backspace => {
                self.press("Backspace");
                self.release("Backspace");
            }
            Step::ClickBackdrop => {
                self.session.backdrop_clicked();
            }
            Step::Open => {
                if self.session.open() {
                    self.input.clear();
                }
            }
            Step::Close => {
                self.session.close();
            }
        }
    }

    /// Press `key` with the tracked modifier flags.
    fn press(&mut self, key: &str) {
        self.set_modifier(key, true);
        self.deliver_down(&KeyEvent::new(key, self.ctrl, self.shift));
    }

    /// Release `key` with the tracked modifier flags.
    fn release(&mut self, key: &str) {
        self.set_modifier(key, false);
        self.deliver_up(&KeyEvent::new(key, self.ctrl, self.shift));
    }

    /// Deliver a key-down and update the text box.
    fn deliver_down(&mut self, ev: &KeyEvent) {
        let was_open = self.session.is_open();
        let outcome = self.session.key_down(ev);
        debug!(key = %ev.key, ?outcome, "key down");
        match outcome {
            KeyOutcome::Opened => self.input.clear(),
            KeyOutcome::Ignored | KeyOutcome::Tracking { .. }
                if was_open && self.session.is_open() =>
            {
                self.edit(ev);
            }
            _ => {}
        }
    }

    /// Deliver a key-up and report the text box's value.
    fn deliver_up(&mut self, ev: &KeyEvent) {
        let outcome = self.session.key_up(ev);
        debug!(key = %ev.key, ?outcome, "key up");
        self.session.input_changed(&self.input);
    }

    /// Apply a key-down to the text box. Control combinations do not type.
    fn edit(&mut self, ev: &KeyEvent) {
        if ev.ctrl {
            return;
        }
        if ev.key == "Backspace" {
            self.input.pop();
            return;
        }
        let mut chars = ev.key.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            self.input.push(ch);
        }
    }

    /// Track modifier keys.
    fn set_modifier(&mut self, key: &str, down: bool) {
        match key {
            "Control" => self.ctrl = down,
            "Shift" => self.shift = down,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use palette::{Action, ChordSpec, StaticCatalog};

    use super::*;
    use crate::render::{Line, Transcript, TranscriptSink};

    fn runner(transcript: &Transcript) -> Runner<StaticCatalog, TranscriptSink> {
        let entries = [
            ("Open File: New Tab", Some("ctrl+o")),
            ("Save", Some("ctrl+s")),
            ("Save All", Some("ctrl+shift+s")),
        ];
        let actions = entries
            .iter()
            .map(|(text, chord)| {
                let t = transcript.clone();
                let name = text.to_string();
                Action::new(*text, chord.map(|c| ChordSpec::parse(c).unwrap()), move || {
                    t.push(Line::Activate { text: name.clone() })
                })
            })
            .collect();
        Runner::new(PaletteSession::new(
            StaticCatalog::new(actions),
            TranscriptSink::new(transcript.clone()),
        ))
    }

    fn activations(transcript: &Transcript) -> Vec<String> {
        transcript
            .lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Activate { text } => Some(text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn parses_every_step_kind() {
        let steps = parse(
            r#"[down("Control"), up("Control"), press((key: "k", ctrl: true)), release((key: "k")),
                type("ab"), backspace, click_backdrop, open, close]"#,
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Down("Control".into()),
                Step::Up("Control".into()),
                Step::Press(KeyEvent::new("k", true, false)),
                Step::Release(KeyEvent::plain("k")),
                Step::Type("ab".into()),
                Step::Backspace,
                Step::ClickBackdrop,
                Step::Open,
                Step::Close,
            ]
        );
    }

    #[test]
    fn rejects_unknown_steps() {
        assert!(matches!(parse("[jump]"), Err(Error::Script(_))));
    }

    #[test]
    fn trigger_type_and_enter() {
        let transcript = Transcript::default();
        let mut r = runner(&transcript);
        let steps = parse(
            r#"[down("Control"), down("Shift"), down("P"), up("P"), up("Shift"), up("Control"),
                type("sa"), backspace, type("a"), down("ArrowDown"), up("ArrowDown"),
                down("Enter"), up("Enter")]"#,
        )
        .unwrap();
        r.run(&steps);
        assert!(!r.session().is_open());
        assert_eq!(activations(&transcript), vec!["Save All".to_string()]);

        let queries: Vec<String> = transcript
            .lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Render { query, .. } => Some(query),
                _ => None,
            })
            .collect();
        assert_eq!(queries, vec!["", "s", "sa", "s", "sa"]);
    }

    #[test]
    fn chord_fires_without_palette() {
        let transcript = Transcript::default();
        let mut r = runner(&transcript);
        r.run(&parse(r#"[down("Control"), down("o"), up("o"), up("Control")]"#).unwrap());
        assert_eq!(activations(&transcript), vec!["Open File: New Tab".to_string()]);
        assert!(!r.session().is_open());
    }

    #[test]
    fn ctrl_keys_do_not_type() {
        let transcript = Transcript::default();
        let mut r = runner(&transcript);
        r.run(
            &parse(r#"[open, down("Control"), down("s"), up("s"), up("Control"), type("o")]"#)
                .unwrap(),
        );
        assert_eq!(activations(&transcript), vec!["Save".to_string()]);
        assert_eq!(r.session().query(), Some("o"));
    }

    #[test]
    fn raw_events_keep_their_flags() {
        let transcript = Transcript::default();
        let mut r = runner(&transcript);
        // No Control key-down is seen, so only the event's own flag matters
        // for typing; the chord engine sees the lone `s`.
        r.run(
            &parse(r#"[open, press((key: "s", ctrl: true)), release((key: "s", ctrl: true)), type("o")]"#)
                .unwrap(),
        );
        assert!(activations(&transcript).is_empty());
        assert_eq!(r.session().query(), Some("o"));
        assert!(r.session().held().is_empty());
    }

    #[test]
    fn backdrop_click_closes() {
        let transcript = Transcript::default();
        let mut r = runner(&transcript);
        r.run(&parse("[open, click_backdrop]").unwrap());
        assert!(!r.session().is_open());
        assert_eq!(transcript.lines().last(), Some(&Line::Close));
    }
}
