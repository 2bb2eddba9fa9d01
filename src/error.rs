/// Errors produced while reading a sample or summarizing it.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The sample contains no values; min, median and mean are undefined.
    #[error("no input values")]
    EmptySample,

    /// A token of the input could not be parsed as a real number.
    #[error("invalid number {token:?} at position {position}")]
    InvalidNumber {
        /// The offending token, verbatim.
        token: String,
        /// 1-based position of the token in the input.
        position: usize,
    },

    /// The requested percentile is NaN or infinite.
    #[error("percentile must be a finite number, got {pct}")]
    InvalidPercentile {
        /// The rejected percentile.
        pct: f64,
    },

    /// Reading the input stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
