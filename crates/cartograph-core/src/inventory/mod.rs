//! Inventory module: Loading collector output from disk
//!
//! The upstream collector writes one JSON array of resources per service
//! per region. This module merges those fragments back into a single
//! inventory, recording provenance in a scan manifest.

mod collector;
mod loader;
mod manifest;

use std::path::Path;

pub use collector::{Collector, Inventory};
pub use loader::{load_file, InventoryError};
pub use manifest::ScanManifest;

/// Load an inventory from a single file or a fragment directory.
///
/// A directory is collected fragment by fragment, tolerating unreadable or
/// malformed files; an explicitly named file must parse.
///
/// # Errors
/// Returns an error if a single-file input cannot be read or parsed.
pub fn load(path: &Path) -> Result<Inventory, InventoryError> {
    if path.is_dir() {
        Ok(Collector::new(path).collect())
    } else {
        Inventory::from_file(path)
    }
}

#[cfg(test)]
mod tests;
