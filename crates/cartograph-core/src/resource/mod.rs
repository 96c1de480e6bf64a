//! Resource module: Discovered cloud entities
//!
//! Defines the inventory-side data model: one `Resource` per discovered
//! cloud entity, with its typed relationship references and the coarse
//! service family used for grouping and styling.

mod model;
mod service;

pub use model::{Relationships, Resource};
pub use service::ServiceFamily;
