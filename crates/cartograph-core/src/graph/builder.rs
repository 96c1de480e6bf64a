//! Graph builder: resource inventory in, positioned diagram out

use super::layout::{self, LayoutOptions};
use super::model::{Graph, Node};
use super::rules;
use crate::resource::Resource;

/// Build a rendering-ready graph from a resource inventory.
///
/// One node per resource, edges inferred by the relationship rules,
/// positions assigned by the configured layout strategy. The derivation is
/// pure: rebuilding with identical arguments yields an identical graph,
/// and no input shape makes it fail.
#[must_use]
pub fn build(resources: &[Resource], options: &LayoutOptions) -> Graph {
    let positions = layout::positions(resources, options);
    let nodes = resources
        .iter()
        .zip(positions)
        .map(|(resource, position)| Node {
            id: resource.id.clone(),
            label: resource.display_name().to_string(),
            resource_type: resource.resource_type.clone(),
            service: resource.family(),
            region: resource.region.clone(),
            url: resource.url.clone(),
            position,
        })
        .collect();

    Graph {
        nodes,
        edges: rules::infer_edges(resources),
    }
}
