//! Resource model types

use serde::{Deserialize, Serialize};

use super::service::ServiceFamily;

/// One discovered cloud entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique identifier within a scan (ARN, physical ID, or composite key)
    pub id: String,
    /// Human-readable resource kind, e.g. "Application Load Balancer"
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Coarse service family label, e.g. "ELB"
    pub service_type: String,
    /// Display name; may be empty
    #[serde(default)]
    pub name: String,
    /// Region, or "global" for region-less services
    pub region: String,
    /// Console deep link; opaque to the graph builder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Relationship references to other resource ids
    #[serde(default, skip_serializing_if = "Relationships::is_empty")]
    pub relationships: Relationships,
}

impl Resource {
    /// Display label, falling back to the id when the name is empty
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Service family derived from the `service_type` label
    #[must_use]
    pub fn family(&self) -> ServiceFamily {
        ServiceFamily::from_label(&self.service_type)
    }
}

/// Relationship references from one resource to others, keyed by kind.
///
/// Every field defaults to empty so a missing or partial block never fails
/// deserialization; an empty field simply fires no inference rule. The
/// referenced ids are not validated against the inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Relationships {
    /// Security group ids attached to this resource
    pub security_groups: Vec<String>,
    /// Target group ids this resource routes to
    pub target_groups: Vec<String>,
    /// Load balancer fronting this resource
    pub load_balancer: Option<String>,
    /// DNS names answered by this resource
    pub dns_records: Vec<String>,
    /// Certificate attached to this resource
    pub certificate: Option<String>,
    /// Instance ids behind this resource
    pub instances: Vec<String>,
    /// Volume ids attached to this resource
    pub volumes: Vec<String>,
    /// CloudFront distribution serving this resource
    pub cloudfront_distribution: Option<String>,
    /// Container image repository this resource pulls from
    pub repository: Option<String>,
    /// Distribution this resource belongs to
    pub distribution: Option<String>,
    /// Origin this distribution pulls from
    pub origin: Option<String>,
    /// Hosted zone owning this record
    pub hosted_zone: Option<String>,
    /// Alternate domain names for this distribution
    pub aliases: Vec<String>,
    /// Web ACL id attached to this resource
    pub waf_acl: Option<String>,
    /// Rule ids attached to this web ACL
    pub waf_rules: Vec<String>,
    /// Resource ids associated with this web ACL
    pub waf_associations: Vec<String>,
    /// Web ACL protecting this resource
    pub protected_by: Option<String>,
    /// Service ids running in this cluster
    pub services: Vec<String>,
    /// Resource ids this web ACL protects
    pub protects: Vec<String>,
    /// Bucket backing this distribution
    pub bucket: Option<String>,
}

impl Relationships {
    /// True when no relationship of any kind is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.security_groups.is_empty()
            && self.target_groups.is_empty()
            && self.load_balancer.is_none()
            && self.dns_records.is_empty()
            && self.certificate.is_none()
            && self.instances.is_empty()
            && self.volumes.is_empty()
            && self.cloudfront_distribution.is_none()
            && self.repository.is_none()
            && self.distribution.is_none()
            && self.origin.is_none()
            && self.hosted_zone.is_none()
            && self.aliases.is_empty()
            && self.waf_acl.is_none()
            && self.waf_rules.is_empty()
            && self.waf_associations.is_empty()
            && self.protected_by.is_none()
            && self.services.is_empty()
            && self.protects.is_empty()
            && self.bucket.is_none()
    }
}
