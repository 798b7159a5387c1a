#![warn(missing_docs)]

//! Entry point for the `palette-replay` binary.

mod cli;
mod error;
mod render;
mod script;

use std::{io, process, sync::Arc};

use clap::Parser;
use palette::{Activator, PaletteSession, StaticCatalog};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands, MatchArgs, ReplayArgs},
    error::Result,
    render::{Line, Transcript, TranscriptSink, bracketed},
    script::Runner,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli { log, command } = Cli::parse();
    let env_filter = log.filter();
    registry()
        .with(env_filter)
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();

    match command {
        Commands::Replay(args) => replay(&args),
        Commands::Match(args) => match_one(&args),
    }
}

/// Load the catalog and script, play the script, and print the transcript.
fn replay(args: &ReplayArgs) -> Result<()> {
    let path = catalog::resolve_config_path(args.catalog.as_deref())?;
    let loaded = catalog::load_from_path(&path)?;
    let steps = script::load(&args.script)?;
    info!(
        catalog = %path.display(),
        entries = loaded.len(),
        steps = steps.len(),
        "replaying"
    );

    let transcript = Transcript::default();
    let provider = StaticCatalog::from_catalog(&loaded, |entry| {
        let t = transcript.clone();
        let text = entry.text();
        let activate: Activator = Arc::new(move || t.push(Line::Activate { text: text.clone() }));
        activate
    });
    let sink = TranscriptSink::new(transcript.clone());
    let mut runner = Runner::new(PaletteSession::new(provider, sink));
    runner.run(&steps);
    info!(open = runner.session().is_open(), "replay finished");

    for line in transcript.lines() {
        if args.json {
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!("{}", line.to_text());
        }
    }
    Ok(())
}

/// Print one text's highlight for a query.
fn match_one(args: &MatchArgs) -> Result<()> {
    let segments = fuzzmatch::match_segments(&args.text, &args.query);
    if args.json {
        println!("{}", serde_json::to_string(&segments)?);
    } else {
        println!("{}", bracketed(&segments));
    }
    Ok(())
}
