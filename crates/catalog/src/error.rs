//! Error types for catalog loading and validation.

use std::{
    cmp::{max, min},
    fmt::Write as _,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
/// Errors produced while loading, parsing, or validating a catalog.
pub enum Error {
    #[error("{message}")]
    /// I/O or filesystem read error.
    Read {
        /// Optional path associated with the read error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
    #[error("{message}")]
    /// RON syntax or shape error.
    Parse {
        /// Optional path associated with the parse error.
        path: Option<PathBuf>,
        /// 1-based line number, when the parser reported one.
        line: Option<usize>,
        /// 1-based column number, when the parser reported one.
        col: Option<usize>,
        /// Human-readable error message.
        message: String,
        /// Rendered excerpt including a caret at the error location.
        excerpt: Option<String>,
    },
    #[error("{message}")]
    /// A well-formed entry with an invalid value.
    Validation {
        /// Optional path associated with the validation error.
        path: Option<PathBuf>,
        /// Zero-based index of the offending entry.
        entry: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Render a human-friendly error message including location and an excerpt when available.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => match path {
                Some(p) => format!("Read error at {}: {}", p.display(), message),
                None => format!("Read error: {}", message),
            },
            Self::Parse {
                path,
                line,
                col,
                message,
                excerpt,
            } => {
                let loc = match (line, col) {
                    (Some(l), Some(c)) => format!("{}:{}", l, c),
                    (Some(l), None) => format!("{}", l),
                    _ => String::new(),
                };
                let head = match path {
                    Some(p) if !loc.is_empty() => {
                        format!("Catalog parse error at {}:{}", p.display(), loc)
                    }
                    Some(p) => format!("Catalog parse error at {}", p.display()),
                    None if !loc.is_empty() => format!("Catalog parse error at {}", loc),
                    None => "Catalog parse error".to_string(),
                };
                match excerpt {
                    Some(ex) => format!("{}\n{}\n{}", head, message, ex),
                    None => format!("{}\n{}", head, message),
                }
            }
            Self::Validation {
                path,
                entry,
                message,
            } => match path {
                Some(p) => format!(
                    "Catalog validation error at {} (action #{})\n{}",
                    p.display(),
                    entry + 1,
                    message
                ),
                None => format!(
                    "Catalog validation error (action #{})\n{}",
                    entry + 1,
                    message
                ),
            },
        }
    }

    /// Access the optional path attached to this error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::Validation { path, .. } => {
                path.as_deref()
            }
        }
    }
}

/// Build a small 2-3 line excerpt with a caret at `(line_no, col_no)`.
pub fn excerpt_at(source: &str, line_no: usize, col_no: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let total = lines.len();
    let start = max(1usize, line_no.saturating_sub(2));
    let end = min(total, line_no + 1);

    let mut out = String::new();
    for n in start..=end {
        let text = lines.get(n - 1).copied().unwrap_or("");
        let _ignored = writeln!(out, " {:>4} | {}", n, text);
        if n == line_no {
            let prefix = format!(" {:>4} | ", n);
            let _ignored = writeln!(
                out,
                "{}{}^",
                " ".repeat(prefix.len()),
                " ".repeat(col_no.saturating_sub(1))
            );
        }
    }
    out
}
