// File: crates/linechart-core/src/error.rs
// Summary: Error taxonomy for range resolution, mapping, tick generation and session orchestration.

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PlotError {
    /// Empty or mismatched arrays, non-finite values, unusable resolution.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate source range [{min}, {max}] cannot be mapped")]
    DegenerateRange { min: f64, max: f64 },

    #[error("plot session has no lines")]
    EmptySession,

    #[error("line {line} is out of sync: {xs} x-values vs {ys} y-values")]
    LineMismatch { line: usize, xs: usize, ys: usize },
}

impl PlotError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

pub type PlotResult<T> = Result<T, PlotError>;
