//! Graph model types

use serde::{Deserialize, Serialize};

use crate::resource::ServiceFamily;

/// A point in diagram plane coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A node in the diagram, one per resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Resource id this node represents
    pub id: String,
    /// Display label; the resource name, or the id when unnamed
    pub label: String,
    /// Human-readable resource kind
    pub resource_type: String,
    /// Style tag derived from the resource's service family
    pub service: ServiceFamily,
    /// Region the resource lives in
    pub region: String,
    /// Console deep link, passed through for the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Plane coordinates assigned by the layout
    pub position: Position,
}

/// Kind of inferred relationship.
///
/// The serialized form is the human-readable edge label; the slug form
/// feeds edge ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    #[serde(rename = "Security Group")]
    SecurityGroup,
    #[serde(rename = "Target Group")]
    TargetGroup,
    #[serde(rename = "DNS Alias")]
    DnsAlias,
    #[serde(rename = "Record")]
    Record,
    #[serde(rename = "SSL/TLS")]
    Certificate,
    #[serde(rename = "Volume")]
    Volume,
    #[serde(rename = "Instance")]
    Instance,
    #[serde(rename = "Internet Access")]
    InternetAccess,
    #[serde(rename = "Outbound Traffic")]
    OutboundTraffic,
    #[serde(rename = "Cluster")]
    Cluster,
    #[serde(rename = "Service")]
    Service,
    #[serde(rename = "Invokes")]
    Invokes,
    #[serde(rename = "Triggers")]
    Triggers,
    #[serde(rename = "Protects")]
    Protects,
    #[serde(rename = "WAF Rule")]
    WafRule,
    #[serde(rename = "Origin")]
    Origin,
    #[serde(rename = "Distribution")]
    Distribution,
    #[serde(rename = "Repository")]
    Repository,
}

impl RelationshipKind {
    /// Human-readable edge label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SecurityGroup => "Security Group",
            Self::TargetGroup => "Target Group",
            Self::DnsAlias => "DNS Alias",
            Self::Record => "Record",
            Self::Certificate => "SSL/TLS",
            Self::Volume => "Volume",
            Self::Instance => "Instance",
            Self::InternetAccess => "Internet Access",
            Self::OutboundTraffic => "Outbound Traffic",
            Self::Cluster => "Cluster",
            Self::Service => "Service",
            Self::Invokes => "Invokes",
            Self::Triggers => "Triggers",
            Self::Protects => "Protects",
            Self::WafRule => "WAF Rule",
            Self::Origin => "Origin",
            Self::Distribution => "Distribution",
            Self::Repository => "Repository",
        }
    }

    /// Short form used in edge ids
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::SecurityGroup => "security-group",
            Self::TargetGroup => "target-group",
            Self::DnsAlias => "dns-alias",
            Self::Record => "record",
            Self::Certificate => "ssl",
            Self::Volume => "volume",
            Self::Instance => "instance",
            Self::InternetAccess => "internet-access",
            Self::OutboundTraffic => "outbound-traffic",
            Self::Cluster => "cluster",
            Self::Service => "service",
            Self::Invokes => "invokes",
            Self::Triggers => "triggers",
            Self::Protects => "protects",
            Self::WafRule => "waf-rule",
            Self::Origin => "origin",
            Self::Distribution => "distribution",
            Self::Repository => "repository",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An edge in the diagram
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Unique within one build; derived from endpoints and kind
    pub id: String,
    /// Source resource id
    pub source: String,
    /// Target resource id; may not exist among the nodes
    pub target: String,
    /// Relationship kind; serialized as the edge label
    #[serde(rename = "label")]
    pub kind: RelationshipKind,
    /// Selection highlight state; never affects edge existence
    #[serde(default)]
    pub selected: bool,
}

/// A rendering-ready node-link diagram
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
