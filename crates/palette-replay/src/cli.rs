//! Command-line interface definitions for palette-replay.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

/// Command-line interface for the `palette-replay` binary.
#[derive(Parser, Debug)]
#[command(
    name = "palette-replay",
    about = "Drive the command palette from a key-event script",
    version
)]
pub struct Cli {
    /// Logging controls shared across palette binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// What to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a script of key events against a catalog.
    Replay(ReplayArgs),
    /// Match a single text against a query and print the highlight.
    Match(MatchArgs),
}

/// Arguments for the `replay` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Catalog file (RON). Defaults to ~/.palette/catalog.ron.
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Script file: a RON list such as `[down("Control"), type("oft"), up("Control")]`.
    #[arg(long, value_name = "PATH")]
    pub script: PathBuf,

    /// Emit one JSON object per line instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `match` subcommand.
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// Candidate text.
    pub text: String,

    /// Query to match against the text.
    pub query: String,

    /// Emit the segments as JSON.
    #[arg(long)]
    pub json: bool,
}
