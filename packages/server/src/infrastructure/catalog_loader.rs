//! Catalog loading from JSON files.
//!
//! The server binary can be started with `--catalog <path>` to serve a
//! seeded dataset instead of an empty catalog.

use std::path::Path;

use thiserror::Error;

use crate::domain::Catalog;

/// Errors raised while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The file could not be read
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents are not a valid catalog document
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a catalog from a JSON string.
///
/// Missing collections default to empty.
pub fn catalog_from_json(json: &str) -> Result<Catalog, CatalogLoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a catalog from a JSON file on disk.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let contents = std::fs::read_to_string(path)?;
    catalog_from_json(&contents)
}
