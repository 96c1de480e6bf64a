//! Inspect command: Summarize an inventory

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use cartograph_core::graph::rules;
use cartograph_core::inventory;
use tracing::info;

/// Run the inspect command
///
/// # Errors
/// Returns an error if the inventory cannot be loaded.
pub fn run(input: &Path) -> Result<()> {
    let inventory = inventory::load(input)
        .with_context(|| format!("loading inventory from {}", input.display()))?;

    info!(
        "Loaded {} resources from {}",
        inventory.resources.len(),
        input.display()
    );

    let mut by_region: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_service: BTreeMap<&str, usize> = BTreeMap::new();
    for resource in &inventory.resources {
        *by_region.entry(resource.region.as_str()).or_default() += 1;
        *by_service.entry(resource.service_type.as_str()).or_default() += 1;
    }

    println!("Regions:");
    for (region, count) in &by_region {
        println!("  {region}: {count}");
    }
    println!("Services:");
    for (service, count) in &by_service {
        println!("  {service}: {count}");
    }

    let edges = rules::infer_edges(&inventory.resources);
    println!("Inferred relationships: {}", edges.len());

    Ok(())
}
