//! Fragment collector: merges per-service scan output files

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::loader::{self, InventoryError};
use super::manifest::ScanManifest;
use crate::resource::Resource;

/// A loaded inventory with its provenance record
#[derive(Debug, Clone)]
pub struct Inventory {
    pub resources: Vec<Resource>,
    pub manifest: ScanManifest,
}

impl Inventory {
    /// Load an inventory from a single fragment file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, InventoryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| InventoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let resources = loader::parse_fragment(path, &raw)?;

        let mut manifest = ScanManifest::new(path.display().to_string());
        manifest.fragment_count = 1;
        manifest.resource_count = resources.len();
        manifest.digest = format!("{:x}", Sha256::digest(raw.as_bytes()));

        Ok(Self {
            resources,
            manifest,
        })
    }

    /// Tag the manifest with a version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.manifest = self.manifest.with_version(version);
        self
    }
}

/// Collects scan fragments from a directory tree.
///
/// Each fragment is one JSON array of resources, typically one file per
/// service per region. Fragments that fail to read or parse are logged and
/// skipped, so one bad capture never loses the rest of the scan. Fragments
/// merge in sorted path order.
#[derive(Debug)]
pub struct Collector {
    root: PathBuf,
}

impl Collector {
    /// Create a collector for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load every fragment under the root
    #[must_use]
    pub fn collect(&self) -> Inventory {
        let mut resources = Vec::new();
        let mut digest = Sha256::new();
        let mut manifest = ScanManifest::new(self.root.display().to_string());

        for path in self.fragment_paths() {
            let raw = match std::fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Skipping unreadable fragment {}: {}", path.display(), e);
                    manifest.skipped_count += 1;
                    continue;
                }
            };
            match loader::parse_fragment(&path, &raw) {
                Ok(batch) => {
                    debug!("Loaded {} resources from {}", batch.len(), path.display());
                    digest.update(raw.as_bytes());
                    manifest.fragment_count += 1;
                    resources.extend(batch);
                }
                Err(e) => {
                    warn!("Skipping malformed fragment: {e}");
                    manifest.skipped_count += 1;
                }
            }
        }

        manifest.resource_count = resources.len();
        manifest.digest = format!("{:x}", digest.finalize());

        Inventory {
            resources,
            manifest,
        }
    }

    /// Fragment files under the root, in sorted order
    fn fragment_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(false)
            .build()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        paths
    }

    /// Get the root directory being collected
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
