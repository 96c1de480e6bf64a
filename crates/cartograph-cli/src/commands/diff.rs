//! Diff command: Compare two inventories

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use cartograph_core::inventory;
use tracing::info;

/// Run the diff command
///
/// # Errors
/// Returns an error if either inventory cannot be loaded.
pub fn run(from: &Path, to: &Path) -> Result<()> {
    info!("Comparing {} to {}", from.display(), to.display());

    let before = inventory::load(from)
        .with_context(|| format!("loading inventory from {}", from.display()))?;
    let after = inventory::load(to)
        .with_context(|| format!("loading inventory from {}", to.display()))?;

    let before_types: BTreeMap<&str, &str> = before
        .resources
        .iter()
        .map(|r| (r.id.as_str(), r.resource_type.as_str()))
        .collect();
    let after_types: BTreeMap<&str, &str> = after
        .resources
        .iter()
        .map(|r| (r.id.as_str(), r.resource_type.as_str()))
        .collect();

    let mut added = 0;
    let mut removed = 0;
    let mut retyped = 0;

    for (id, kind) in &after_types {
        match before_types.get(id) {
            None => {
                println!("+ {id} ({kind})");
                added += 1;
            }
            Some(old) if old != kind => {
                println!("~ {id} ({old} -> {kind})");
                retyped += 1;
            }
            Some(_) => {}
        }
    }
    for (id, kind) in &before_types {
        if !after_types.contains_key(id) {
            println!("- {id} ({kind})");
            removed += 1;
        }
    }

    info!("✓ Diff completed: {added} added, {removed} removed, {retyped} retyped");
    Ok(())
}
