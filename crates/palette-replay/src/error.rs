//! Error handling for the palette-replay crate.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for palette-replay operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while replaying.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Catalog loading or validation errors.
    #[error("{}", .0.pretty())]
    Catalog(#[from] catalog::Error),
    /// Failed to parse the script file.
    #[error("Failed to parse script: {0}")]
    Script(String),
    /// Failed to encode output.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Helper to build a script error from an arbitrary message.
    pub fn script<M: Into<String>>(msg: M) -> Self {
        Self::Script(msg.into())
    }
}
