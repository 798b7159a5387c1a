//! Parse and load catalog files.

use std::{fs, path::Path};

use keytoken::ChordSpec;
use ron::{Options, error::SpannedError, extensions::Extensions};
use tracing::debug;

use crate::{
    ActionEntry, Catalog, Error,
    error::excerpt_at,
    raw::{RawCatalog, RawEntry},
};

/// Load a catalog from a RON file at `path`.
pub fn load_from_path(path: &Path) -> Result<Catalog, Error> {
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    load_from_str(&source, Some(path))
}

/// Parse a catalog from RON source. `path` is only used for error reporting.
///
/// Optional fields may be written bare (`label: "Open"`) or wrapped
/// (`label: Some("Open")`).
pub fn load_from_str(source: &str, path: Option<&Path>) -> Result<Catalog, Error> {
    let options = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
    let raw: RawCatalog = options
        .from_str(source)
        .map_err(|e| parse_error(source, path, &e))?;

    let mut entries = Vec::with_capacity(raw.actions.len());
    for (idx, entry) in raw.actions.into_iter().enumerate() {
        entries.push(validate(entry, idx, path)?);
    }
    let catalog = Catalog::from_entries(entries);
    debug!(
        entries = catalog.len(),
        enabled = catalog.enabled().count(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Turn a raw entry into an [`ActionEntry`], parsing its shortcut.
fn validate(raw: RawEntry, idx: usize, path: Option<&Path>) -> Result<ActionEntry, Error> {
    let shortcut = match raw.shortcut {
        Some(spec) => Some(ChordSpec::parse(&spec).map_err(|e| Error::Validation {
            path: path.map(Path::to_path_buf),
            entry: idx,
            message: format!("Invalid shortcut '{}': {}", spec, e),
        })?),
        None => None,
    };
    Ok(ActionEntry {
        label: raw.label,
        description: raw.description,
        shortcut,
        disabled: raw.disabled,
    })
}

/// Build a parse error from RON's spanned error, with an excerpt at its start.
fn parse_error(source: &str, path: Option<&Path>, err: &SpannedError) -> Error {
    let start = &err.span.start;
    let loc = (start.line > 0).then_some((start.line, start.col));
    Error::Parse {
        path: path.map(Path::to_path_buf),
        line: loc.map(|(l, _)| l),
        col: loc.map(|(_, c)| c),
        message: err.code.to_string(),
        excerpt: loc.map(|(l, c)| excerpt_at(source, l, c)),
    }
}
