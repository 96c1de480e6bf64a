mod tests_circular;

use crate::resource::{Relationships, Resource};

/// Helper to create a plain resource for layout tests
pub(super) fn make_resource(id: &str, service_type: &str, region: &str) -> Resource {
    Resource {
        id: id.to_string(),
        resource_type: format!("{service_type} Resource"),
        service_type: service_type.to_string(),
        name: String::new(),
        region: region.to_string(),
        url: None,
        relationships: Relationships::default(),
    }
}
