//! Step activity widgets: the goal-aware chart, its SVG scene adapter and the
//! period summary card.

mod chart;
pub use chart::StepChart;

mod summary;
pub use summary::ActivitySummaryCard;

pub mod scene;

use crate::core::Tier;
use crate::t;

/// Localized legend label for a tier.
pub(crate) fn tier_label(tier: Tier) -> String {
    match tier {
        Tier::Achieved => t!("tier-achieved"),
        Tier::Good => t!("tier-good"),
        Tier::Fair => t!("tier-fair"),
        Tier::Low => t!("tier-low"),
    }
}
