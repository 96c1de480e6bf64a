//! Fragment parsing

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::resource::Resource;

/// Errors that can occur while loading inventory files
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Read error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error for {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse one fragment: a JSON array of resources
///
/// # Errors
/// Returns an error if the content is not a JSON array of resources.
pub fn parse_fragment(path: &Path, raw: &str) -> Result<Vec<Resource>, InventoryError> {
    serde_json::from_str(raw).map_err(|source| InventoryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load one fragment file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<Vec<Resource>, InventoryError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fragment(path, &raw)
}
