//! Period summary figures shown under the analytics charts.

use serde::Serialize;

use super::goal::Tier;
use super::series::Series;

/// Rough energy cost of one step in kilocalories.
pub const KCAL_PER_STEP: f64 = 0.04;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ActivitySummary {
    pub average_steps: u32,
    pub average_calories: u32,
    /// Days that cleared the `Low` tier.
    pub active_days: usize,
    pub goal_days: usize,
}

impl ActivitySummary {
    pub fn from_series(series: &Series) -> Self {
        if series.is_empty() {
            return Self::default();
        }

        let total: u64 = series.values().map(u64::from).sum();
        let count = series.len() as u64;
        let average_steps = u32::try_from((total * 2 + count) / (count * 2)).unwrap_or(u32::MAX);
        let average_calories = (f64::from(average_steps) * KCAL_PER_STEP).round() as u32;

        let active_days = series
            .points()
            .iter()
            .filter(|p| p.tier() != Tier::Low)
            .count();
        let goal_days = series
            .points()
            .iter()
            .filter(|p| p.tier() == Tier::Achieved)
            .count();

        Self {
            average_steps,
            average_calories,
            active_days,
            goal_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::goal::Goal;
    use crate::core::series::{build_series, DisplayMode, RandomSteps, StepSample};

    #[test]
    fn summary_of_known_week() {
        let samples: Vec<StepSample> = [7500, 9200, 6800, 10300, 8700, 11500, 5200]
            .into_iter()
            .map(StepSample::unlabeled)
            .collect();
        let series = build_series(
            Some(&samples),
            DisplayMode::Discrete,
            7,
            Goal::default(),
            RandomSteps::seeded(0),
        )
        .unwrap();

        let summary = ActivitySummary::from_series(&series);
        // 59 200 / 7 = 8457.14
        assert_eq!(summary.average_steps, 8_457);
        assert_eq!(summary.average_calories, 338);
        assert_eq!(summary.active_days, 7);
        assert_eq!(summary.goal_days, 2);
    }

    #[test]
    fn low_days_are_not_active() {
        let samples: Vec<StepSample> = [100, 3_999, 4_000].into_iter().map(StepSample::unlabeled).collect();
        let series = build_series(
            Some(&samples),
            DisplayMode::Continuous,
            3,
            Goal::default(),
            RandomSteps::seeded(0),
        )
        .unwrap();
        assert_eq!(ActivitySummary::from_series(&series).active_days, 1);
    }
}
