//! Rendering a [`Summary`] as a single output line.

use std::fmt;

use crate::{Summary, DEFAULT_DIGITS};

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Labelled fields, e.g. `Num 5 Min 1.00 Med 3.00 ...`.
    #[default]
    Human,
    /// Pipe-delimited `count|min|med|avg|pctval|max`, no labels.
    Machine,
}

/// Label for a percentile: `95%` for whole numbers, `97.50%` otherwise.
///
/// Whole numbers print all their digits, however large.
pub fn percentile_label(pct: f64) -> String {
    if pct == 0.0 {
        // no "-0%"
        "0%".to_string()
    } else if pct.fract() == 0.0 {
        format!("{:.0}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// Renders `summary` with `digits` decimals per value.
///
/// The count is always printed as an integer. In [`OutputMode::Human`] a
/// percentile above 50 is printed between `Avg` and `Max`; a percentile of
/// 50 or below is printed right after `Min`.
///
/// # Example
///
/// ```
/// use numstats::{render, summarize, OutputMode};
///
/// let mut values = vec![3.0, 1.0, 2.0];
/// let summary = summarize(&mut values, 30.0).unwrap();
///
/// assert_eq!(
///     render(&summary, 1, OutputMode::Human),
///     "Num 3 Min 1.0 30% 1.6 Med 2.0 Avg 2.0 Max 3.0"
/// );
/// assert_eq!(render(&summary, 1, OutputMode::Machine), "3|1.0|2.0|2.0|1.6|3.0");
/// ```
pub fn render(summary: &Summary, digits: u16, mode: OutputMode) -> String {
    let digits = usize::from(digits);
    let Summary {
        count,
        min,
        median,
        mean,
        percentile,
        max,
        pct,
    } = *summary;

    match mode {
        OutputMode::Machine => format!(
            "{count}|{min:.digits$}|{median:.digits$}|{mean:.digits$}|{percentile:.digits$}|{max:.digits$}"
        ),
        OutputMode::Human => {
            let label = percentile_label(pct);
            if pct > 50.0 {
                format!(
                    "Num {count} Min {min:.digits$} Med {median:.digits$} Avg {mean:.digits$} \
                     {label} {percentile:.digits$} Max {max:.digits$}"
                )
            } else {
                format!(
                    "Num {count} Min {min:.digits$} {label} {percentile:.digits$} \
                     Med {median:.digits$} Avg {mean:.digits$} Max {max:.digits$}"
                )
            }
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, DEFAULT_DIGITS, OutputMode::Human))
    }
}
