use thiserror::Error;

/// Top-level error type for the curvelet demonstration kernel.
#[derive(Debug, Error)]
pub enum CurveletError {
    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error("report output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while validating curve generation settings.
///
/// Curve evaluation itself never fails: positions and tangents are total
/// functions of finite `t`, and degenerate geometry (zero radius, zero
/// axes) yields degenerate output rather than an error.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("sample count must be greater than zero")]
    EmptySample,

    #[error("invalid {name} range [{min}, {max})")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
}

/// Convenience type alias for results using [`CurveletError`].
pub type Result<T> = std::result::Result<T, CurveletError>;
