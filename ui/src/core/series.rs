//! Activity series builder.
//!
//! Turns caller-supplied step samples (or, when there are none, placeholder
//! draws from a [`StepSource`]) into an ordered [`Series`] whose points all
//! carry a goal-relative [`Tier`].

use std::ops::Range;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use time::Weekday;
use tracing::debug;

use super::error::{ChartError, ChartResult, SampleFault};
use super::goal::{classify, Goal, Tier};

/// Points in a discrete (weekly) series.
pub const WEEK_LENGTH: usize = 7;

/// Every n-th point of a continuous series is emphasised.
pub const HIGHLIGHT_EVERY: usize = 5;

/// Half-open range placeholder step counts are drawn from.
pub const PLACEHOLDER_STEPS: Range<u32> = 2_000..14_000;

/// Bar (weekly) versus line (multi-day) rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Discrete,
    Continuous,
}

impl DisplayMode {
    /// Default label for the point at `index`.
    pub fn default_label(self, index: usize) -> String {
        match self {
            DisplayMode::Discrete => weekday_label(index).to_string(),
            DisplayMode::Continuous => (index + 1).to_string(),
        }
    }

    pub fn is_highlighted(self, index: usize) -> bool {
        matches!(self, DisplayMode::Continuous) && index % HIGHLIGHT_EVERY == 0
    }
}

fn weekday_label(index: usize) -> &'static str {
    // Cycle starts Monday; `Weekday::nth_next` takes a u8.
    let offset = (index % WEEK_LENGTH) as u8;
    match Weekday::Monday.nth_next(offset) {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// One raw observation as the host hands it over.
///
/// `value` is a plain number so malformed input (negative, NaN, fractional)
/// can be rejected instead of silently clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: f64,
}

impl StepSample {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self {
            label: Some(label.into()),
            value: f64::from(value),
        }
    }

    pub fn unlabeled(value: u32) -> Self {
        Self {
            label: None,
            value: f64::from(value),
        }
    }

    fn steps(&self) -> Result<u32, SampleFault> {
        let value = self.value;
        if !value.is_finite() {
            Err(SampleFault::NotFinite)
        } else if value < 0.0 {
            Err(SampleFault::Negative)
        } else if value.fract() != 0.0 {
            Err(SampleFault::Fractional)
        } else if value > f64::from(u32::MAX) {
            Err(SampleFault::TooLarge)
        } else {
            Ok(value as u32)
        }
    }
}

/// A classified observation. Fields are read-only so the tier can never
/// disagree with the value and goal it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPoint {
    label: String,
    value: u32,
    tier: Tier,
    highlighted: bool,
}

impl DataPoint {
    fn classified(label: String, value: u32, goal: Goal, highlighted: bool) -> Self {
        Self {
            label,
            value,
            tier: classify(value, goal),
            highlighted,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// Chronologically ordered points sharing one goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    mode: DisplayMode,
    goal: Goal,
    points: Vec<DataPoint>,
}

impl Series {
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn goal(&self) -> Goal {
        self.goal
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().map(DataPoint::value)
    }

    /// Labelled raw samples, e.g. to hand a built series to another chart.
    pub fn samples(&self) -> Vec<StepSample> {
        self.points
            .iter()
            .map(|p| StepSample::new(p.label.clone(), p.value))
            .collect()
    }

    /// The same observations re-classified against another goal.
    pub fn with_goal(&self, goal: Goal) -> Self {
        let points = self
            .points
            .iter()
            .map(|p| DataPoint::classified(p.label.clone(), p.value, goal, p.highlighted))
            .collect();
        Self {
            mode: self.mode,
            goal,
            points,
        }
    }
}

/// Supplier of placeholder step counts for series built without data.
pub trait StepSource {
    fn next_steps(&mut self) -> u32;
}

/// Uniform draws from [`PLACEHOLDER_STEPS`].
#[derive(Debug, Clone)]
pub struct RandomSteps<R> {
    rng: R,
}

impl<R: Rng> RandomSteps<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSteps<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomSteps<StdRng> {
    /// Reproducible source for tests and snapshots.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> StepSource for RandomSteps<R> {
    fn next_steps(&mut self) -> u32 {
        self.rng.gen_range(PLACEHOLDER_STEPS)
    }
}

impl<S: StepSource + ?Sized> StepSource for &mut S {
    fn next_steps(&mut self) -> u32 {
        (**self).next_steps()
    }
}

/// Build a classified series of exactly `length` points.
///
/// Non-empty `input` is used in order; samples without a label get the
/// mode's default label for their position. Absent or empty input yields a
/// placeholder series drawn from `source`.
pub fn build_series<S: StepSource>(
    input: Option<&[StepSample]>,
    mode: DisplayMode,
    length: usize,
    goal: Goal,
    mut source: S,
) -> ChartResult<Series> {
    if length == 0 {
        return Err(ChartError::InvalidLength);
    }

    let points = match input.filter(|samples| !samples.is_empty()) {
        Some(samples) => {
            if samples.len() != length {
                return Err(ChartError::LabelMismatch {
                    expected: length,
                    actual: samples.len(),
                });
            }

            samples
                .iter()
                .enumerate()
                .map(|(index, sample)| {
                    let value = sample
                        .steps()
                        .map_err(|reason| ChartError::InvalidSample { index, reason })?;
                    let label = sample
                        .label
                        .as_deref()
                        .map(str::trim)
                        .filter(|label| !label.is_empty())
                        .map(str::to_owned)
                        .unwrap_or_else(|| mode.default_label(index));
                    Ok(DataPoint::classified(
                        label,
                        value,
                        goal,
                        mode.is_highlighted(index),
                    ))
                })
                .collect::<ChartResult<Vec<_>>>()?
        }
        None => {
            debug!(length, ?mode, "no step data supplied; generating placeholder series");
            (0..length)
                .map(|index| {
                    DataPoint::classified(
                        mode.default_label(index),
                        source.next_steps(),
                        goal,
                        mode.is_highlighted(index),
                    )
                })
                .collect()
        }
    };

    Ok(Series { mode, goal, points })
}
