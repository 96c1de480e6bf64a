//! cartograph-core: Core library for cloud resource graph construction
//!
//! Takes a flat inventory of discovered cloud resources and derives a
//! rendering-ready node-link diagram: typed relationship edges inferred by
//! per-resource-type rules, and plane coordinates assigned by one of four
//! deterministic layout strategies.

pub mod graph;
pub mod inventory;
pub mod resource;

// Re-export commonly used types
pub use graph::builder::build;
pub use graph::layout::{HierarchyKind, LayoutOptions, TierTable};
pub use graph::model::{Edge, Graph, Node, Position, RelationshipKind};
pub use graph::selection::Selection;
pub use inventory::{Collector, Inventory, InventoryError, ScanManifest};
pub use resource::{Relationships, Resource, ServiceFamily};
