//! Tests for the scan manifest

#![allow(clippy::unwrap_used)]

use crate::inventory::ScanManifest;

#[test]
fn test_new_manifest_has_unique_id() {
    let a = ScanManifest::new("scans/");
    let b = ScanManifest::new("scans/");
    assert_ne!(a.id, b.id);
}

#[test]
fn test_new_manifest_starts_empty() {
    let manifest = ScanManifest::new("scans/");
    assert_eq!(manifest.source, "scans/");
    assert_eq!(manifest.fragment_count, 0);
    assert_eq!(manifest.skipped_count, 0);
    assert_eq!(manifest.resource_count, 0);
    assert!(manifest.digest.is_empty());
    assert!(manifest.version.is_none());
}

#[test]
fn test_with_version() {
    let manifest = ScanManifest::new("scans/").with_version("2026-08-01");
    assert_eq!(manifest.version.as_deref(), Some("2026-08-01"));
}

#[test]
fn test_manifest_round_trips_through_json() {
    let manifest = ScanManifest::new("scans/").with_version("v1");
    let json = serde_json::to_string(&manifest).unwrap();
    let back: ScanManifest = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, manifest.id);
    assert_eq!(back.version, manifest.version);
    assert_eq!(back.loaded_at, manifest.loaded_at);
}
