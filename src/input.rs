//! Parsing the input sample.

use std::io::Read;

use log::debug;

use crate::StatsError;

/// Parses whitespace-separated real numbers.
///
/// Spaces, tabs and newlines all separate values; runs of separators and
/// leading or trailing whitespace are ignored.
///
/// # Errors
///
/// Returns [`StatsError::InvalidNumber`] for the first token that is not a
/// valid `f64`.
///
/// # Example
///
/// ```
/// use numstats::parse_sample;
///
/// assert_eq!(parse_sample("1 2.5\n-3e1\n").unwrap(), vec![1.0, 2.5, -30.0]);
/// assert!(parse_sample("1 two 3").is_err());
/// ```
pub fn parse_sample(text: &str) -> Result<Vec<f64>, StatsError> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<f64>().map_err(|_| StatsError::InvalidNumber {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect()
}

/// Reads `reader` to the end and parses its content with [`parse_sample`].
pub fn read_sample<R: Read>(mut reader: R) -> Result<Vec<f64>, StatsError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let values = parse_sample(&text)?;
    debug!("read {} values ({} bytes)", values.len(), text.len());
    Ok(values)
}
