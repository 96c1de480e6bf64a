//! Service tier table for the layered layout

use std::collections::HashMap;

use crate::resource::ServiceFamily;

/// Assigns each service family a stacking tier for the layered layout.
///
/// Tier 0 renders at the top (DNS), higher tiers further down. Families
/// not registered in the table get the default tier, so new service types
/// can be added without touching the layout code.
#[derive(Debug, Clone)]
pub struct TierTable {
    tiers: HashMap<ServiceFamily, u32>,
    default_tier: u32,
}

impl Default for TierTable {
    fn default() -> Self {
        let tiers = [
            (ServiceFamily::Route53, 0),
            (ServiceFamily::CloudFront, 1),
            (ServiceFamily::Waf, 1),
            (ServiceFamily::Acm, 1),
            (ServiceFamily::Elb, 2),
            (ServiceFamily::ApiGateway, 2),
            (ServiceFamily::Vpc, 2),
            (ServiceFamily::Ec2, 3),
            (ServiceFamily::Ecs, 3),
            (ServiceFamily::Lambda, 3),
            (ServiceFamily::EventBridge, 3),
            (ServiceFamily::S3, 4),
            (ServiceFamily::Ebs, 4),
            (ServiceFamily::Ecr, 4),
            (ServiceFamily::Iam, 5),
        ]
        .into_iter()
        .collect();

        Self {
            tiers,
            default_tier: 0,
        }
    }
}

impl TierTable {
    /// Tier for a family, or the default for unregistered families
    #[must_use]
    pub fn tier(&self, family: ServiceFamily) -> u32 {
        self.tiers.get(&family).copied().unwrap_or(self.default_tier)
    }

    /// Register or override a family's tier
    pub fn set(&mut self, family: ServiceFamily, tier: u32) {
        self.tiers.insert(family, tier);
    }
}
