use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, MyError>;

/// Failures are local to a single operator call, there is no global error state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MyError {
    #[error("pixel ({row}, {col}) is outside the valid area of a {width}x{height} image")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("every sample fell into the first histogram bucket, the CDF cannot be normalized")]
    DegenerateHistogram,

    #[error("sample value {value} is outside the supported range [0, 7]")]
    SampleOutOfRange { value: f64 },
}
