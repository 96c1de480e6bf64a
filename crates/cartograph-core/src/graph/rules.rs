//! Relationship inference rules
//!
//! Each rule inspects one resource (plus, for the search rules, the whole
//! inventory) and emits zero or more edges. Rules are independent and
//! non-exclusive: a missing field means the rule does not fire, and a
//! reference to an id absent from the inventory still becomes an edge.

use super::ids::EdgeIdAllocator;
use super::model::{Edge, RelationshipKind};
use crate::resource::Resource;

/// Resource type labels the search rules key on
mod labels {
    pub const TARGET_GROUP: &str = "Target Group";
    pub const ROUTE53_RECORD: &str = "Route 53 Record";
    pub const ROUTE53_ZONE: &str = "Route 53 Hosted Zone";
    pub const LOAD_BALANCER: &str = "Application Load Balancer";
    pub const CERTIFICATE: &str = "ACM Certificate";
    pub const INTERNET_GATEWAY: &str = "Internet Gateway";
    pub const NAT_GATEWAY: &str = "NAT Gateway";
    pub const ECS_SERVICE: &str = "ECS Service";
    pub const ECS_CLUSTER: &str = "ECS Cluster";
    pub const LAMBDA_FUNCTION: &str = "Lambda Function";
    pub const API_GATEWAY: &str = "API Gateway";
    pub const EVENT_RULE: &str = "EventBridge Rule";
    pub const DISTRIBUTION: &str = "CloudFront Distribution";
}

/// Infer every relationship edge for the given inventory.
///
/// Rules run in a fixed order over resources in input order, so the result
/// is deterministic for a given input.
#[must_use]
pub fn infer_edges(resources: &[Resource]) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut ids = EdgeIdAllocator::new();

    for resource in resources {
        security_group_edges(resource, &mut ids, &mut edges);
        target_group_edges(resource, &mut ids, &mut edges);
        dns_alias_edges(resource, resources, &mut ids, &mut edges);
        hosted_zone_edges(resource, resources, &mut ids, &mut edges);
        certificate_edges(resource, &mut ids, &mut edges);
        volume_edges(resource, &mut ids, &mut edges);
        instance_edges(resource, &mut ids, &mut edges);
        network_edges(resource, resources, &mut ids, &mut edges);
        ecs_edges(resource, resources, &mut ids, &mut edges);
        serverless_edges(resource, resources, &mut ids, &mut edges);
        waf_edges(resource, &mut ids, &mut edges);
        cdn_edges(resource, &mut ids, &mut edges);
    }

    edges
}

fn push_edge(
    source: &str,
    target: &str,
    kind: RelationshipKind,
    ids: &mut EdgeIdAllocator,
    edges: &mut Vec<Edge>,
) {
    let base = format!("{source}-{target}-{}", kind.slug());
    edges.push(Edge {
        id: ids.allocate(&base),
        source: source.to_string(),
        target: target.to_string(),
        kind,
        selected: false,
    });
}

/// Resources of the given type in the same region, excluding the resource
/// itself.
fn same_region<'a>(
    resources: &'a [Resource],
    resource: &'a Resource,
    type_label: &'a str,
) -> impl Iterator<Item = &'a Resource> {
    resources.iter().filter(move |candidate| {
        candidate.resource_type == type_label
            && candidate.region == resource.region
            && candidate.id != resource.id
    })
}

/// Any resource listing security groups links to each of them.
fn security_group_edges(resource: &Resource, ids: &mut EdgeIdAllocator, edges: &mut Vec<Edge>) {
    for sg in &resource.relationships.security_groups {
        push_edge(&resource.id, sg, RelationshipKind::SecurityGroup, ids, edges);
    }
}

/// A target group links from the load balancer that fronts it.
fn target_group_edges(resource: &Resource, ids: &mut EdgeIdAllocator, edges: &mut Vec<Edge>) {
    if resource.resource_type != labels::TARGET_GROUP {
        return;
    }
    if let Some(lb) = &resource.relationships.load_balancer {
        push_edge(lb, &resource.id, RelationshipKind::TargetGroup, ids, edges);
    }
}

/// Trailing dots are insignificant in DNS names.
fn normalize_dns(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// A record name and a DNS entry match on equality or suffix containment
/// in either direction.
fn dns_names_match(record: &str, entry: &str) -> bool {
    let record = normalize_dns(record);
    let entry = normalize_dns(entry);
    record == entry || record.ends_with(entry) || entry.ends_with(record)
}

/// A DNS record aliases every load balancer answering for its name, and
/// every distribution listing it as an alternate domain.
fn dns_alias_edges(
    resource: &Resource,
    resources: &[Resource],
    ids: &mut EdgeIdAllocator,
    edges: &mut Vec<Edge>,
) {
    if resource.resource_type != labels::ROUTE53_RECORD || resource.name.is_empty() {
        return;
    }
    for target in resources {
        let answers = match target.resource_type.as_str() {
            labels::LOAD_BALANCER => &target.relationships.dns_records,
            labels::DISTRIBUTION => &target.relationships.aliases,
            _ => continue,
        };
        if answers.iter().any(|entry| dns_names_match(&resource.name, entry)) {
            push_edge(&resource.id, &target.id, RelationshipKind::DnsAlias, ids, edges);
        }
    }
}

/// A hosted zone owns its records. A direct zone reference wins; otherwise
/// the zone whose id prefixes the record's composite id is taken.
fn hosted_zone_edges(
    resource: &Resource,
    resources: &[Resource],
    ids: &mut EdgeIdAllocator,
    edges: &mut Vec<Edge>,
) {
    if resource.resource_type != labels::ROUTE53_RECORD {
        return;
    }
    if let Some(zone) = &resource.relationships.hosted_zone {
        push_edge(zone, &resource.id, RelationshipKind::Record, ids, edges);
        return;
    }
    let owner = resources.iter().find(|candidate| {
        candidate.resource_type == labels::ROUTE53_ZONE && resource.id.starts_with(&candidate.id)
    });
    if let Some(zone) = owner {
        push_edge(&zone.id, &resource.id, RelationshipKind::Record, ids, edges);
    }
}

/// A certificate links to the load balancer terminating with it.
fn certificate_edges(resource: &Resource, ids: &mut EdgeIdAllocator, edges: &mut Vec<Edge>) {
    if resource.resource_type != labels::CERTIFICATE {
        return;
    }
    if let Some(lb) = &resource.relationships.load_balancer {
        push_edge(&resource.id, lb, RelationshipKind::Certificate, ids, edges);
    }
}

/// Any resource listing volumes links to each of them.
fn volume_edges(resource: &Resource, ids: &mut EdgeIdAllocator, edges: &mut Vec<Edge>) {
    for volume in &resource.relationships.volumes {
        push_edge(&resource.id, volume, RelationshipKind::Volume, ids, edges);
    }
}

/// Any resource listing instances links to each of them.
fn instance_edges(resource: &Resource, ids: &mut EdgeIdAllocator, edges: &mut Vec<Edge>) {
    for instance in &resource.relationships.instances {
        push_edge(&resource.id, instance, RelationshipKind::Instance, ids, edges);
    }
}

/// Same-region network paths: internet gateways feed the load balancers
/// and NAT gateways; NAT gateways carry outbound traffic for the load
/// balancers.
fn network_edges(
    resource: &Resource,
    resources: &[Resource],
    ids: &mut EdgeIdAllocator,
    edges: &mut Vec<Edge>,
) {
    match resource.resource_type.as_str() {
        labels::INTERNET_GATEWAY => {
            for lb in same_region(resources, resource, labels::LOAD_BALANCER) {
                push_edge(&resource.id, &lb.id, RelationshipKind::InternetAccess, ids, edges);
            }
            for nat in same_region(resources, resource, labels::NAT_GATEWAY) {
                push_edge(&resource.id, &nat.id, RelationshipKind::InternetAccess, ids, edges);
            }
        }
        labels::NAT_GATEWAY => {
            for lb in same_region(resources, resource, labels::LOAD_BALANCER) {
                push_edge(&resource.id, &lb.id, RelationshipKind::OutboundTraffic, ids, edges);
            }
        }
        _ => {}
    }
}

/// A service belongs to a cluster when the cluster's final id segment
/// appears in the service id.
fn cluster_owns_service(cluster: &Resource, service: &Resource) -> bool {
    let cluster_name = cluster.id.rsplit('/').next().unwrap_or(&cluster.id);
    !cluster_name.is_empty() && service.id.contains(cluster_name)
}

/// ECS services attach to their target groups and their cluster; clusters
/// link out to the services they list.
fn ecs_edges(
    resource: &Resource,
    resources: &[Resource],
    ids: &mut EdgeIdAllocator,
    edges: &mut Vec<Edge>,
) {
    match resource.resource_type.as_str() {
        labels::ECS_SERVICE => {
            ecs_service_target_groups(resource, resources, ids, edges);
            for cluster in resources.iter().filter(|r| r.resource_type == labels::ECS_CLUSTER) {
                if cluster_owns_service(cluster, resource) {
                    push_edge(&resource.id, &cluster.id, RelationshipKind::Cluster, ids, edges);
                }
            }
        }
        labels::ECS_CLUSTER => {
            for service in &resource.relationships.services {
                push_edge(&resource.id, service, RelationshipKind::Service, ids, edges);
            }
        }
        _ => {}
    }
}

/// Recorded target groups win; without them, every target group in the
/// service's region is assumed reachable.
fn ecs_service_target_groups(
    resource: &Resource,
    resources: &[Resource],
    ids: &mut EdgeIdAllocator,
    edges: &mut Vec<Edge>,
) {
    if resource.relationships.target_groups.is_empty() {
        for tg in same_region(resources, resource, labels::TARGET_GROUP) {
            push_edge(&resource.id, &tg.id, RelationshipKind::TargetGroup, ids, edges);
        }
    } else {
        for tg in &resource.relationships.target_groups {
            push_edge(&resource.id, tg, RelationshipKind::TargetGroup, ids, edges);
        }
    }
}

/// Same-region serverless wiring: API gateways invoke the lambdas, event
/// rules trigger them.
fn serverless_edges(
    resource: &Resource,
    resources: &[Resource],
    ids: &mut EdgeIdAllocator,
    edges: &mut Vec<Edge>,
) {
    match resource.resource_type.as_str() {
        labels::API_GATEWAY => {
            for function in same_region(resources, resource, labels::LAMBDA_FUNCTION) {
                push_edge(&resource.id, &function.id, RelationshipKind::Invokes, ids, edges);
            }
        }
        labels::EVENT_RULE => {
            for function in same_region(resources, resource, labels::LAMBDA_FUNCTION) {
                push_edge(&resource.id, &function.id, RelationshipKind::Triggers, ids, edges);
            }
        }
        _ => {}
    }
}

/// Web ACLs protect their associated resources and carry their rules;
/// either side of the association may record it.
fn waf_edges(resource: &Resource, ids: &mut EdgeIdAllocator, edges: &mut Vec<Edge>) {
    let rel = &resource.relationships;
    for protected in rel.protects.iter().chain(&rel.waf_associations) {
        push_edge(&resource.id, protected, RelationshipKind::Protects, ids, edges);
    }
    for rule in &rel.waf_rules {
        push_edge(&resource.id, rule, RelationshipKind::WafRule, ids, edges);
    }
    if let Some(acl) = rel.protected_by.as_ref().or(rel.waf_acl.as_ref()) {
        push_edge(acl, &resource.id, RelationshipKind::Protects, ids, edges);
    }
}

/// Distribution, origin, and registry links come straight off the
/// relationship fields.
fn cdn_edges(resource: &Resource, ids: &mut EdgeIdAllocator, edges: &mut Vec<Edge>) {
    let rel = &resource.relationships;
    for origin in rel.origin.iter().chain(&rel.bucket) {
        push_edge(&resource.id, origin, RelationshipKind::Origin, ids, edges);
    }
    for distribution in rel.cloudfront_distribution.iter().chain(&rel.distribution) {
        push_edge(&resource.id, distribution, RelationshipKind::Distribution, ids, edges);
    }
    if let Some(repository) = &rel.repository {
        push_edge(&resource.id, repository, RelationshipKind::Repository, ids, edges);
    }
}
