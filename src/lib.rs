//! numstats: summary statistics over a sample of real numbers.
//!
//! Given an unordered sample, numstats sorts it once and derives the count,
//! minimum, median, mean, a configurable percentile and the maximum. The
//! percentile uses linear interpolation between the closest ranks.
//!
//! # Example
//!
//! ```
//! use numstats::{report, Params};
//!
//! let mut values = vec![3.0, 1.0, 5.0, 2.0, 4.0];
//! let line = report(&mut values, &Params::default()).unwrap();
//!
//! assert_eq!(line, "Num 5 Min 1.00 Med 3.00 Avg 3.00 95% 4.80 Max 5.00");
//! ```

mod error;
mod input;
mod report;

pub use error::StatsError;
pub use input::{parse_sample, read_sample};
pub use report::{percentile_label, render, OutputMode};

use log::{debug, trace};

/// Tolerance used to decide whether a fractional rank sits on an integer.
///
/// Ranks within this distance of an index are read directly instead of
/// being interpolated.
pub const PERCENTILE_EPSILON: f64 = 1e-5;

/// Percentile reported when none is requested.
pub const DEFAULT_PERCENTILE: f64 = 95.0;

/// Decimal digits printed when none are requested.
pub const DEFAULT_DIGITS: u16 = 2;

/// Statistics derived from one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub median: f64,
    pub mean: f64,
    /// Value at `pct`.
    pub percentile: f64,
    pub max: f64,
    /// The percentile (0..=100) that `percentile` was computed for.
    pub pct: f64,
}

/// Run-time parameters for one summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub percentile: f64,
    /// Decimals per printed value; `u16` is the widest precision `format!` accepts.
    pub digits: u16,
    pub mode: OutputMode,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            percentile: DEFAULT_PERCENTILE,
            digits: DEFAULT_DIGITS,
            mode: OutputMode::Human,
        }
    }
}

/// Sorts `values` and returns their summary statistics.
///
/// # Arguments
///
/// * `values` - The sample; sorted ascending in place
/// * `pct` - Percentile to report, nominally in `0..=100`
///
/// # Errors
///
/// Returns [`StatsError::EmptySample`] if `values` is empty and
/// [`StatsError::InvalidPercentile`] if `pct` is NaN or infinite.
///
/// # Example
///
/// ```
/// use numstats::summarize;
///
/// let mut values = vec![40.0, 10.0, 30.0, 20.0];
/// let summary = summarize(&mut values, 95.0).unwrap();
///
/// assert_eq!(values, vec![10.0, 20.0, 30.0, 40.0]);
/// assert_eq!(summary.median, 25.0);
/// assert!((summary.percentile - 39.0).abs() < 1e-9);
/// ```
pub fn summarize(values: &mut [f64], pct: f64) -> Result<Summary, StatsError> {
    if !pct.is_finite() {
        return Err(StatsError::InvalidPercentile { pct });
    }

    values.sort_unstable_by(f64::total_cmp);

    let sorted: &[f64] = values;
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Err(StatsError::EmptySample);
    };
    let count = sorted.len();

    let median = median(sorted).ok_or(StatsError::EmptySample)?;
    let percentile = percentile(sorted, pct).ok_or(StatsError::EmptySample)?;
    let mean = sorted.iter().sum::<f64>() / count as f64;

    debug!("summarized {} values at p{}", count, pct);

    Ok(Summary {
        count,
        min,
        median,
        mean,
        percentile,
        max,
        pct,
    })
}

/// Returns the median of a slice sorted in ascending order.
///
/// For an even count this is the mean of the two central values.
/// Returns `None` for an empty slice.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let count = sorted.len();
    if count == 0 {
        return None;
    }

    let middle = count / 2;
    if count % 2 == 1 {
        Some(sorted[middle])
    } else {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    }
}

/// Returns the `pct` percentile of a slice sorted in ascending order.
///
/// The fractional rank `(len - 1) * pct / 100` is clamped to the valid index
/// range, so `pct <= 0` yields the minimum and `pct >= 100` the maximum.
/// A rank within [`PERCENTILE_EPSILON`] of an index reads that element;
/// otherwise the two neighbouring elements are linearly interpolated.
///
/// Returns `None` for an empty slice or a non-finite `pct`.
///
/// # Example
///
/// ```
/// use numstats::percentile;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile(&sorted, 50.0), Some(3.0));
/// assert_eq!(percentile(&sorted, 100.0), Some(5.0));
/// assert!((percentile(&sorted, 95.0).unwrap() - 4.8).abs() < 1e-9);
/// ```
pub fn percentile(sorted: &[f64], pct: f64) -> Option<f64> {
    if !pct.is_finite() {
        return None;
    }
    let last = sorted.len().checked_sub(1)?;

    let pos = (last as f64 * pct / 100.0).clamp(0.0, last as f64);
    // pos is non-negative here, so the cast floors
    let posi = ((pos + PERCENTILE_EPSILON) as usize).min(last);
    let weight = pos - posi as f64;

    trace!("percentile rank {} -> index {} weight {}", pos, posi, weight);

    if weight.abs() < PERCENTILE_EPSILON || posi == last {
        return Some(sorted[posi]);
    }

    Some(sorted[posi + 1] * weight + sorted[posi] * (1.0 - weight))
}

/// Summarizes `values` and renders the result line according to `params`.
///
/// This is what the `numstats` binary prints.
pub fn report(values: &mut [f64], params: &Params) -> Result<String, StatsError> {
    let summary = summarize(values, params.percentile)?;
    Ok(render(&summary, params.digits, params.mode))
}
