#![warn(missing_docs)]

//! Log flags for palette binaries.
//!
//! Binaries flatten [`LogArgs`] into their CLI and install
//! [`LogArgs::filter`] on their subscriber.

use std::env;

use clap::Args;
use tracing_subscriber::EnvFilter;

/// Crate targets whose events the level flags apply to.
const OUR_CRATES: &[&str] = &[
    "palette",
    "palette_replay",
    "chordmode",
    "fuzzmatch",
    "keytoken",
    "catalog",
    "logging",
];

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single log level for our crates (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "chordmode=trace,palette=debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// The effective filter directive, falling back to `RUST_LOG`.
    pub fn spec(&self) -> String {
        self.spec_or(env::var("RUST_LOG").ok())
    }

    /// Build the `EnvFilter` for [`spec`](Self::spec).
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::new(self.spec())
    }

    /// Resolve the directive: `--log-filter`, then `--trace`/`--debug`/
    /// `--log-level` scoped to our crates, then `fallback`, then `info`.
    fn spec_or(&self, fallback: Option<String>) -> String {
        if let Some(spec) = &self.log_filter {
            return spec.clone();
        }
        let level = if self.trace {
            Some("trace")
        } else if self.debug {
            Some("debug")
        } else {
            self.log_level.as_deref()
        };
        match (level, fallback) {
            (Some(level), _) => scoped(level),
            (None, Some(spec)) => spec,
            (None, None) => scoped("info"),
        }
    }
}

/// `level` for each of our crates, as one directive string.
fn scoped(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    OUR_CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
