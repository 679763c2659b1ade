//! Error taxonomy for the step-activity core.

use thiserror::Error;

/// Failures surfaced while turning caller input into a chart series.
///
/// Every operation in the core is pure, so none of these are transient:
/// callers should report them rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// A series must contain at least one point.
    #[error("series length must be positive")]
    InvalidLength,

    /// Caller-supplied samples disagree with the requested series length.
    #[error("expected {expected} samples, got {actual}")]
    LabelMismatch { expected: usize, actual: usize },

    /// A single sample could not be interpreted as a step count.
    #[error("sample {index} is not a valid step count: {reason}")]
    InvalidSample { index: usize, reason: SampleFault },

    /// Goals are divisors for every threshold and percentage, and the axis
    /// maximum derived from them must fit in a `u32`.
    #[error("step goal must be between 1 and {}", super::goal::MAX_GOAL)]
    InvalidGoal,
}

/// Why a raw sample value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleFault {
    #[error("value is not finite")]
    NotFinite,
    #[error("value is negative")]
    Negative,
    #[error("value is not a whole number")]
    Fractional,
    #[error("value exceeds {max}", max = u32::MAX)]
    TooLarge,
}

/// Result alias used throughout the core.
pub type ChartResult<T> = Result<T, ChartError>;
