//! Build command: Derive a positioned graph from an inventory

use std::path::Path;

use anyhow::{Context, Result};
use cartograph_core::graph;
use cartograph_core::graph::layout::LayoutOptions;
use cartograph_core::graph::model::Graph;
use cartograph_core::inventory::{self, Inventory};
use tracing::info;

/// Run the build command
///
/// # Errors
/// Returns an error if the inventory cannot be loaded or the output cannot
/// be written.
pub fn run(
    input: &Path,
    options: &LayoutOptions,
    output: Option<&Path>,
    pretty: bool,
    version_tag: Option<&str>,
) -> Result<()> {
    info!("Loading inventory: {}", input.display());

    let inventory = load_inventory(input, version_tag)?;
    log_manifest(&inventory);

    let graph = graph::build(&inventory.resources, options);
    write_graph(&graph, output, pretty)?;

    info!(
        "✓ Build completed: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );
    Ok(())
}

fn load_inventory(input: &Path, version_tag: Option<&str>) -> Result<Inventory> {
    let inventory = inventory::load(input)
        .with_context(|| format!("loading inventory from {}", input.display()))?;
    Ok(match version_tag {
        Some(tag) => inventory.with_version(tag),
        None => inventory,
    })
}

fn log_manifest(inventory: &Inventory) {
    let manifest = &inventory.manifest;
    info!(
        "Scan manifest {}: {} resources from {} fragments ({} skipped)",
        manifest.id, manifest.resource_count, manifest.fragment_count, manifest.skipped_count
    );
}

fn write_graph(graph: &Graph, output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(graph)?
    } else {
        serde_json::to_string(graph)?
    };

    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing graph to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
