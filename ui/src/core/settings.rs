//! Chart settings supplied by the host platform.
//!
//! Platforms provide a [`ChartSettings`] through the Dioxus context; views
//! fall back to [`ChartSettings::default`] when none is present. Hosts may
//! override individual fields from JSON, missing fields keep their defaults:
//!
//! ```
//! use ui::core::settings::ChartSettings;
//!
//! let settings = ChartSettings::from_json(r#"{ "goal": 8000 }"#).unwrap();
//! assert_eq!(settings.goal.steps(), 8000);
//! assert!(settings.show_labels);
//! ```

use serde::{Deserialize, Serialize};

use super::chart::ChartOptions;
use super::goal::Goal;

/// Days shown by the analytics line chart.
pub const DEFAULT_MONTHLY_SPAN: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub goal: Goal,
    pub show_labels: bool,
    pub monthly_span: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            goal: Goal::default(),
            show_labels: true,
            monthly_span: DEFAULT_MONTHLY_SPAN,
        }
    }
}

impl ChartSettings {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            show_axis_labels: self.show_labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_keeps_defaults() {
        let settings = ChartSettings::from_json("{}").unwrap();
        assert_eq!(settings, ChartSettings::default());
        assert_eq!(settings.goal.steps(), 10_000);
        assert_eq!(settings.monthly_span, 30);
    }

    #[test]
    fn out_of_range_goal_is_refused() {
        for raw in [r#"{ "goal": 0 }"#, r#"{ "goal": 4000000000 }"#] {
            let err = ChartSettings::from_json(raw).unwrap_err();
            assert!(err.to_string().contains("step goal must be between 1 and"), "{raw}");
        }
    }

    #[test]
    fn labels_flag_reaches_chart_options() {
        let settings = ChartSettings::from_json(r#"{ "show_labels": false }"#).unwrap();
        assert!(!settings.chart_options().show_axis_labels);
    }
}
