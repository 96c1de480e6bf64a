//! Graph module: Node-link diagram derivation
//!
//! Converts a flat resource inventory into a positioned node-link graph:
//! the relationship rules produce the edges, a selectable layout strategy
//! produces the coordinates. The derivation is pure; rebuilding with the
//! same inputs yields the same graph.

pub mod builder;
pub mod ids;
pub mod layout;
pub mod model;
pub mod rules;
pub mod selection;

pub use builder::build;
