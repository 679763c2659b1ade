//! Chart configuration selector.
//!
//! [`build_config`] turns a classified [`Series`] into a [`ChartConfig`]: an
//! engine-agnostic description of one chart (axis bounds, gridline count,
//! per-point colors and tooltip text, bar or line layout). Both the step
//! counter and the analytics screen go through this one function; the
//! renderer never looks at thresholds.
//!
//! The config is a pure function of its inputs. Building it twice from the
//! same series, mode and options yields equal values.

use serde::Serialize;

use super::goal::{percent_of_goal, ColorToken, Goal, Tier};
use super::series::{DataPoint, DisplayMode, Series};

/// Horizontal gridline sections, independent of the data range.
pub const SECTION_COUNT: u8 = 5;

/// Unit suffix for axis labels and tooltips.
pub const STEP_UNIT_SUFFIX: &str = " steps";

/// Pass-through options supplied by the host screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    pub show_axis_labels: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            show_axis_labels: true,
        }
    }
}

/// Tooltip (bar) or pointer label (line) content for one point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    /// Raw value with unit, e.g. `"8700 steps"`.
    pub primary: String,
    /// `"Goal reached!"` or `"87% of goal"`.
    pub secondary: String,
    /// Extra context line; line charts name the day.
    pub caption: Option<String>,
}

impl Tooltip {
    fn for_point(point: &DataPoint, goal: Goal, mode: DisplayMode) -> Self {
        let primary = format!("{}{STEP_UNIT_SUFFIX}", point.value());
        let secondary = match point.tier() {
            Tier::Achieved => "Goal reached!".to_string(),
            Tier::Good | Tier::Fair | Tier::Low => {
                format!("{}% of goal", percent_of_goal(point.value(), goal))
            }
        };
        let caption = match mode {
            DisplayMode::Discrete => None,
            DisplayMode::Continuous => Some(format!("Day {}", point.label())),
        };
        Self {
            primary,
            secondary,
            caption,
        }
    }
}

/// Render description of a single point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointSpec {
    pub label: String,
    /// The observed value, as shown in tooltips.
    pub value: u32,
    /// `value` clipped to the axis maximum, as drawn.
    pub display_value: u32,
    pub clipped: bool,
    pub highlighted: bool,
    pub tier: Tier,
    pub color: ColorToken,
    pub tooltip: Tooltip,
}

/// Bar geometry as fractions of the available width; the renderer owns
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarLayout {
    pub bar_count: usize,
    pub bar_width_ratio: f32,
    pub spacing_ratio: f32,
    pub rounded_top: bool,
}

impl BarLayout {
    fn for_count(bar_count: usize) -> Self {
        let n = bar_count.max(1) as f32;
        Self {
            bar_count,
            bar_width_ratio: 1.0 / (n * 2.0),
            spacing_ratio: 1.0 / (n * 3.0),
            rounded_top: true,
        }
    }
}

/// Line chart flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineLayout {
    /// Per-point markers; always on regardless of series length.
    pub show_markers: bool,
    pub area_fill: bool,
    pub dashed_rules: bool,
    pub stroke: ColorToken,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            show_markers: true,
            area_fill: true,
            dashed_rules: true,
            stroke: ColorToken::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartLayout {
    Bar(BarLayout),
    Line(LineLayout),
}

/// Fully resolved description of one chart instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub mode: DisplayMode,
    pub goal: Goal,
    pub axis_max: u32,
    pub sections: u8,
    pub points: Vec<PointSpec>,
    pub layout: ChartLayout,
    pub y_axis_suffix: &'static str,
    /// Empty when axis labels are hidden.
    pub x_axis_labels: Vec<String>,
    pub show_axis_labels: bool,
}

impl ChartConfig {
    /// Tooltip content for the point at `index`, if any.
    pub fn tooltip(&self, index: usize) -> Option<&Tooltip> {
        self.points.get(index).map(|p| &p.tooltip)
    }

    /// Value of the gridline at `section` (0 = baseline).
    pub fn section_value(&self, section: u8) -> u32 {
        let value = u64::from(self.axis_max) * u64::from(section) / u64::from(self.sections);
        u32::try_from(value).unwrap_or(u32::MAX)
    }

    pub fn has_clipped_points(&self) -> bool {
        self.points.iter().any(|p| p.clipped)
    }
}

/// Select the render configuration for `series`.
///
/// Mode and goal context are the ones the series was built with, so labels,
/// highlights, tiers and layout always agree.
pub fn build_config(series: &Series, options: ChartOptions) -> ChartConfig {
    let mode = series.mode();
    let goal = series.goal();
    let axis_max = goal.axis_max();

    let points: Vec<PointSpec> = series
        .points()
        .iter()
        .map(|point| PointSpec {
            label: point.label().to_string(),
            value: point.value(),
            display_value: point.value().min(axis_max),
            clipped: point.value() > axis_max,
            highlighted: point.is_highlighted(),
            tier: point.tier(),
            color: point.tier().color(),
            tooltip: Tooltip::for_point(point, goal, mode),
        })
        .collect();

    let layout = match mode {
        DisplayMode::Discrete => ChartLayout::Bar(BarLayout::for_count(points.len())),
        DisplayMode::Continuous => ChartLayout::Line(LineLayout::default()),
    };

    let x_axis_labels = if options.show_axis_labels {
        points.iter().map(|p| p.label.clone()).collect()
    } else {
        Vec::new()
    };

    ChartConfig {
        mode,
        goal,
        axis_max,
        sections: SECTION_COUNT,
        points,
        layout,
        y_axis_suffix: STEP_UNIT_SUFFIX,
        x_axis_labels,
        show_axis_labels: options.show_axis_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::{build_series, RandomSteps, StepSample};

    fn series(values: &[u32], mode: DisplayMode, goal: u32) -> Series {
        let samples: Vec<StepSample> = values.iter().map(|v| StepSample::unlabeled(*v)).collect();
        build_series(
            Some(&samples),
            mode,
            samples.len(),
            Goal::new(goal).unwrap(),
            RandomSteps::seeded(0),
        )
        .unwrap()
    }

    #[test]
    fn axis_and_sections_follow_goal() {
        let config = build_config(
            &series(&[1, 2, 3], DisplayMode::Discrete, 10_000),
            ChartOptions::default(),
        );
        assert_eq!(config.axis_max, 12_000);
        assert_eq!(config.sections, 5);
        assert_eq!(config.section_value(0), 0);
        assert_eq!(config.section_value(1), 2_400);
        assert_eq!(config.section_value(5), 12_000);
    }

    #[test]
    fn tooltips_state_goal_progress() {
        let config = build_config(
            &series(&[10_300, 8_700, 0], DisplayMode::Discrete, 10_000),
            ChartOptions::default(),
        );
        let reached = config.tooltip(0).unwrap();
        assert_eq!(reached.primary, "10300 steps");
        assert_eq!(reached.secondary, "Goal reached!");
        assert_eq!(reached.caption, None);

        assert_eq!(config.tooltip(1).unwrap().secondary, "87% of goal");
        assert_eq!(config.tooltip(2).unwrap().secondary, "0% of goal");
        assert!(config.tooltip(3).is_none());
    }

    #[test]
    fn line_pointer_names_the_day() {
        let config = build_config(
            &series(&[4_000, 5_000], DisplayMode::Continuous, 10_000),
            ChartOptions::default(),
        );
        assert_eq!(config.tooltip(1).unwrap().caption.as_deref(), Some("Day 2"));
    }

    #[test]
    fn colors_follow_tiers() {
        let config = build_config(
            &series(&[12_000, 7_000, 4_000, 100], DisplayMode::Discrete, 10_000),
            ChartOptions::default(),
        );
        let colors: Vec<ColorToken> = config.points.iter().map(|p| p.color).collect();
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
    fn bar_ratios_scale_with_point_count() {
        let config = build_config(
            &series(&[1; 7], DisplayMode::Discrete, 10_000),
            ChartOptions::default(),
        );
        match config.layout {
            ChartLayout::Bar(bar) => {
                assert_eq!(bar.bar_count, 7);
                assert!((bar.bar_width_ratio - 1.0 / 14.0).abs() < f32::EPSILON);
                assert!((bar.spacing_ratio - 1.0 / 21.0).abs() < f32::EPSILON);
            }
            ChartLayout::Line(_) => panic!("expected bar layout"),
        }
    }

    #[test]
    fn line_markers_stay_on_for_long_series() {
        let long = build_series(
            None,
            DisplayMode::Continuous,
            365,
            Goal::default(),
            RandomSteps::seeded(9),
        )
        .unwrap();
        let config = build_config(&long, ChartOptions::default());
        match config.layout {
            ChartLayout::Line(line) => assert!(line.show_markers),
            ChartLayout::Bar(_) => panic!("expected line layout"),
        }
    }

    #[test]
    fn values_above_axis_are_clipped_for_display_only() {
        let config = build_config(
            &series(&[30_000, 12_000], DisplayMode::Discrete, 10_000),
            ChartOptions::default(),
        );
        let over = &config.points[0];
        assert_eq!(over.value, 30_000);
        assert_eq!(over.display_value, 12_000);
        assert!(over.clipped);
        assert_eq!(over.tooltip.primary, "30000 steps");
        assert!(!config.points[1].clipped);
        assert!(config.has_clipped_points());
    }

    #[test]
    fn hidden_axis_labels_leave_points_labelled() {
        let config = build_config(
            &series(&[1, 2], DisplayMode::Continuous, 10_000),
            ChartOptions {
                show_axis_labels: false,
            },
        );
        assert!(config.x_axis_labels.is_empty());
        assert_eq!(config.points[1].label, "2");
    }

    #[test]
    fn building_twice_yields_identical_configs() {
        for mode in [DisplayMode::Discrete, DisplayMode::Continuous] {
            let s = build_series(None, mode, 30, Goal::default(), RandomSteps::seeded(11)).unwrap();
            let a = build_config(&s, ChartOptions::default());
            let b = build_config(&s, ChartOptions::default());
            assert_eq!(a, b);
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }
    }

    #[test]
    fn layout_follows_the_series_mode() {
        let weekly = build_config(
            &series(&[1, 2, 3], DisplayMode::Discrete, 10_000),
            ChartOptions::default(),
        );
        assert_eq!(weekly.mode, DisplayMode::Discrete);
        assert!(matches!(weekly.layout, ChartLayout::Bar(_)));
        assert!(weekly.points.iter().all(|p| p.tooltip.caption.is_none()));

        let daily = build_config(
            &series(&[1, 2, 3], DisplayMode::Continuous, 10_000),
            ChartOptions::default(),
        );
        assert_eq!(daily.mode, DisplayMode::Continuous);
        assert!(matches!(daily.layout, ChartLayout::Line(_)));
        assert!(daily.points[0].highlighted);
        assert_eq!(daily.x_axis_labels, vec!["1", "2", "3"]);
    }
}
