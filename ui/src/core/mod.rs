//! Step-activity core: classification, series building and chart
//! configuration. Nothing in here touches the UI framework.

pub mod chart;
pub mod error;
pub mod format;
pub mod goal;
pub mod series;
pub mod settings;
pub mod summary;

pub use chart::{build_config, ChartConfig, ChartLayout, ChartOptions, PointSpec, Tooltip};
pub use error::{ChartError, ChartResult, SampleFault};
pub use goal::{classify, percent_of_goal, ColorToken, Goal, Tier, MAX_GOAL};
pub use series::{build_series, DataPoint, DisplayMode, RandomSteps, Series, StepSample, StepSource};
pub use summary::ActivitySummary;
