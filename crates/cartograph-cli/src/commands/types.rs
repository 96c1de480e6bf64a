//! Command types shared between main and library

use cartograph_core::graph::layout::{HierarchyKind, LayoutOptions, TierTable};
use clap::ValueEnum;

/// Layout strategy argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    /// Regions stacked vertically, service grids side by side
    Regional,
    /// One row per service tier, DNS at the top
    Layered,
    /// Service grids flowing left to right
    Grouped,
    /// All nodes on a ring
    Circular,
}

impl LayoutArg {
    /// Build core layout options from CLI arguments
    #[must_use]
    pub fn to_options(self, vertical_spacing: f64, horizontal_spacing: f64) -> LayoutOptions {
        LayoutOptions {
            vertical_spacing,
            horizontal_spacing,
            hierarchy: self.into(),
            tiers: TierTable::default(),
        }
    }
}

impl std::fmt::Display for LayoutArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Regional => "regional",
            Self::Layered => "layered",
            Self::Grouped => "grouped",
            Self::Circular => "circular",
        };
        write!(f, "{s}")
    }
}

impl From<LayoutArg> for HierarchyKind {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Regional => Self::Regional,
            LayoutArg::Layered => Self::Layered,
            LayoutArg::Grouped => Self::Grouped,
            LayoutArg::Circular => Self::Circular,
        }
    }
}
