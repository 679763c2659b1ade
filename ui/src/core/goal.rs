//! Goal context and goal-relative tier classification.
//!
//! [`classify`] is the only place step thresholds are evaluated. Colors and
//! CSS modifiers are separate lookup tables keyed by [`Tier`], so
//! the bar chart, the line chart and the summary card can never drift apart.
//!
//! Thresholds are compared in integer arithmetic (`value * 10 >= goal * 7`
//! rather than `value >= goal * 0.7`) so boundary values land exactly on the
//! higher tier.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{ChartError, ChartResult};

/// Daily step goal used when the host does not supply one.
pub const DEFAULT_GOAL: u32 = 10_000;

/// Largest goal whose axis maximum (`goal * 1.2`) still fits in a `u32`.
pub const MAX_GOAL: u32 = u32::MAX / 6 * 5;

/// Daily step target in `1..=MAX_GOAL`, shared by every point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Goal(u32);

impl Goal {
    pub fn new(steps: u32) -> ChartResult<Self> {
        if steps == 0 || steps > MAX_GOAL {
            Err(ChartError::InvalidGoal)
        } else {
            Ok(Self(steps))
        }
    }

    pub fn steps(self) -> u32 {
        self.0
    }

    /// Upper bound of the value axis: `ceil(goal * 1.2)`. Exact for every
    /// goal up to [`MAX_GOAL`].
    pub fn axis_max(self) -> u32 {
        let scaled = (u64::from(self.0) * 6).div_ceil(5);
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

impl Default for Goal {
    fn default() -> Self {
        Self(DEFAULT_GOAL)
    }
}

impl TryFrom<u32> for Goal {
    type Error = ChartError;

    fn try_from(steps: u32) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<Goal> for u32 {
    fn from(goal: Goal) -> Self {
        goal.0
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Progress toward the goal. Variants are declared lowest first so the
/// derived ordering ranks `Achieved` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Fair,
    Good,
    Achieved,
}

/// Classify a step count against a goal. Lower bounds are inclusive.
pub fn classify(value: u32, goal: Goal) -> Tier {
    let value = u64::from(value);
    let goal = u64::from(goal.steps());

    if value >= goal {
        Tier::Achieved
    } else if value * 10 >= goal * 7 {
        Tier::Good
    } else if value * 10 >= goal * 4 {
        Tier::Fair
    } else {
        Tier::Low
    }
}

/// `round(value / goal * 100)` with halves rounded up.
pub fn percent_of_goal(value: u32, goal: Goal) -> u32 {
    let value = u64::from(value);
    let goal = u64::from(goal.steps());
    let pct = (value * 200 + goal) / (goal * 2);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

/// Fixed color tokens the renderer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    Green,
    Blue,
    Orange,
    Red,
}

impl ColorToken {
    pub fn hex(self) -> &'static str {
        match self {
            ColorToken::Green => "#4CAF50",
            ColorToken::Blue => "#2196F3",
            ColorToken::Orange => "#FF9800",
            ColorToken::Red => "#F44336",
        }
    }
}

impl Tier {
    pub fn color(self) -> ColorToken {
        match self {
            Tier::Achieved => ColorToken::Green,
            Tier::Good => ColorToken::Blue,
            Tier::Fair => ColorToken::Orange,
            Tier::Low => ColorToken::Red,
        }
    }

    /// CSS modifier for legends and summary badges.
    pub fn css_class(self) -> &'static str {
        match self {
            Tier::Achieved => "step-tier--achieved",
            Tier::Good => "step-tier--good",
            Tier::Fair => "step-tier--fair",
            Tier::Low => "step-tier--low",
        }
    }

    /// All tiers, highest rank first (legend order).
    pub const ALL: [Tier; 4] = [Tier::Achieved, Tier::Good, Tier::Fair, Tier::Low];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(steps: u32) -> Goal {
        Goal::new(steps).unwrap()
    }

    #[test]
    fn out_of_range_goals_are_rejected() {
        assert_eq!(Goal::new(0), Err(ChartError::InvalidGoal));
        assert_eq!(Goal::new(MAX_GOAL + 1), Err(ChartError::InvalidGoal));
        assert_eq!(Goal::new(u32::MAX), Err(ChartError::InvalidGoal));
        assert!(Goal::new(MAX_GOAL).is_ok());
    }

    #[test]
    fn largest_goal_keeps_an_exact_axis() {
        let g = goal(MAX_GOAL);
        assert_eq!(u64::from(g.axis_max()), (u64::from(MAX_GOAL) * 6).div_ceil(5));
        assert!(g.axis_max() > MAX_GOAL);
    }

    #[test]
    fn boundaries_favor_the_higher_tier() {
        let g = goal(10_000);
        assert_eq!(classify(10_000, g), Tier::Achieved);
        assert_eq!(classify(9_999, g), Tier::Good);
        assert_eq!(classify(7_000, g), Tier::Good);
        assert_eq!(classify(6_999, g), Tier::Fair);
        assert_eq!(classify(4_000, g), Tier::Fair);
        assert_eq!(classify(3_999, g), Tier::Low);
        assert_eq!(classify(0, g), Tier::Low);
    }

    #[test]
    fn goal_value_is_always_achieved() {
        for steps in [1, 3, 7, 999, 10_000, 123_457, MAX_GOAL] {
            assert_eq!(classify(steps, goal(steps)), Tier::Achieved);
        }
    }

    #[test]
    fn seventy_percent_boundary_is_good_for_divisible_goals() {
        for steps in (10..=50_000).step_by(10) {
            let g = goal(steps);
            assert_eq!(classify(steps / 10 * 7, g), Tier::Good, "goal {steps}");
        }
    }

    #[test]
    fn classification_is_monotonic_in_value() {
        for steps in [1, 9, 10, 333, 10_000, 25_001] {
            let g = goal(steps);
            let mut previous = Tier::Low;
            for value in 0..=(steps.saturating_mul(2)).min(60_000) {
                let tier = classify(value, g);
                assert!(tier >= previous, "goal {steps}, value {value}");
                previous = tier;
            }
        }
    }

    #[test]
    fn large_values_do_not_overflow() {
        let g = goal(MAX_GOAL);
        assert_eq!(classify(MAX_GOAL - 1, g), Tier::Good);
        assert_eq!(classify(u32::MAX, g), Tier::Achieved);
        assert_eq!(percent_of_goal(u32::MAX, goal(1)), u32::MAX);
    }

    #[test]
    fn percent_rounds_half_up() {
        let g = goal(10_000);
        assert_eq!(percent_of_goal(7_500, g), 75);
        assert_eq!(percent_of_goal(8_449, g), 84);
        assert_eq!(percent_of_goal(8_450, g), 85);
        assert_eq!(percent_of_goal(0, g), 0);
        assert_eq!(percent_of_goal(1, goal(200)), 1);
        assert_eq!(percent_of_goal(1, goal(201)), 0);
    }

    #[test]
    fn axis_max_rounds_up() {
        assert_eq!(goal(10_000).axis_max(), 12_000);
        assert_eq!(goal(1).axis_max(), 2);
        assert_eq!(goal(7_777).axis_max(), 9_333);
    }

    #[test]
    fn every_tier_has_a_distinct_color() {
        let colors: Vec<_> = Tier::ALL.iter().map(|t| t.color()).collect();
        assert_eq!(
            colors,
            vec![
                ColorToken::Green,
                ColorToken::Blue,
                ColorToken::Orange,
                ColorToken::Red
            ]
        );
    }

    #[test]
    fn goal_deserializes_from_plain_number() {
        let g: Goal = serde_json::from_str("8000").unwrap();
        assert_eq!(g.steps(), 8_000);
        assert!(serde_json::from_str::<Goal>("0").is_err());
        assert!(serde_json::from_str::<Goal>("4294967295").is_err());
    }
}
