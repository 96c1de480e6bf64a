//! Service family detection

use serde::{Deserialize, Serialize};

/// Coarse service family a resource belongs to.
///
/// Derived from the collector's `serviceType` label; drives node styling
/// and the layered-layout tier assignment. Labels that match no known
/// family map to `Unknown` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceFamily {
    Route53,
    CloudFront,
    Waf,
    Acm,
    Elb,
    ApiGateway,
    Vpc,
    Ec2,
    Ecs,
    Lambda,
    EventBridge,
    S3,
    Ebs,
    Ecr,
    Iam,
    Unknown,
}

impl ServiceFamily {
    /// Detect the family from a collector label, ignoring case and spacing
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "route53" => Self::Route53,
            "cloudfront" => Self::CloudFront,
            "waf" | "wafv2" => Self::Waf,
            "acm" => Self::Acm,
            "elb" | "elbv2" => Self::Elb,
            "apigateway" => Self::ApiGateway,
            "vpc" => Self::Vpc,
            "ec2" => Self::Ec2,
            "ecs" => Self::Ecs,
            "lambda" => Self::Lambda,
            "eventbridge" | "events" => Self::EventBridge,
            "s3" => Self::S3,
            "ebs" => Self::Ebs,
            "ecr" => Self::Ecr,
            "iam" => Self::Iam,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Route53 => "route53",
            Self::CloudFront => "cloud_front",
            Self::Waf => "waf",
            Self::Acm => "acm",
            Self::Elb => "elb",
            Self::ApiGateway => "api_gateway",
            Self::Vpc => "vpc",
            Self::Ec2 => "ec2",
            Self::Ecs => "ecs",
            Self::Lambda => "lambda",
            Self::EventBridge => "event_bridge",
            Self::S3 => "s3",
            Self::Ebs => "ebs",
            Self::Ecr => "ecr",
            Self::Iam => "iam",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}
