//! Action catalogs loaded from RON files.
//!
//! A catalog lists the actions a host exposes to the palette, each with an
//! optional label, description and shortcut:
//!
//! ```ron
//! (
//!     actions: [
//!         (label: "Open File", description: "New Tab", shortcut: "ctrl+o"),
//!         (label: "Save", shortcut: "ctrl+s"),
//!         (label: "Print", disabled: true),
//!     ],
//! )
//! ```

use std::{
    env,
    path::{Path, PathBuf},
};

mod entry;
mod error;
mod loader;
mod raw;

#[cfg(test)]
mod test_parse;

pub use entry::{ActionEntry, Catalog, display_text};
pub use error::{Error, excerpt_at};
pub use loader::{load_from_path, load_from_str};

/// Determine the preferred catalog path (`~/.palette/catalog.ron`).
pub fn default_config_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".palette");
    p.push("catalog.ron");
    p
}

/// Resolve the effective catalog path.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use `~/.palette/catalog.ron` when it exists.
/// 3) Else return a "no catalog found" error naming the preferred path.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, Error> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let preferred = default_config_path();
    if preferred.exists() {
        return Ok(preferred);
    }

    Err(Error::Read {
        path: Some(preferred),
        message: "No catalog found. Create ~/.palette/catalog.ron or pass --catalog".to_string(),
    })
}
