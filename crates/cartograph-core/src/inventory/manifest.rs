//! Scan manifest: Provenance record for a loaded inventory

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Provenance record for one inventory load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanManifest {
    /// Unique identifier for this load
    pub id: String,
    /// Path the inventory was loaded from
    pub source: String,
    /// When the inventory was loaded
    pub loaded_at: DateTime<Utc>,
    /// Number of fragment files merged
    pub fragment_count: usize,
    /// Number of fragments skipped as unreadable or malformed
    pub skipped_count: usize,
    /// Number of resources loaded
    pub resource_count: usize,
    /// Hex digest of the merged fragment contents
    pub digest: String,
    /// User-provided version tag
    pub version: Option<String>,
}

impl ScanManifest {
    /// Create a new manifest for the given source path
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source: source.into(),
            loaded_at: Utc::now(),
            fragment_count: 0,
            skipped_count: 0,
            resource_count: 0,
            digest: String::new(),
            version: None,
        }
    }

    /// Set the version tag
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}
