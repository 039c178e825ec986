//! Filter error types.

use std::convert::Infallible;

use thiserror::Error;

use super::color::MAX_DISTANCE;

/// Errors raised before any pixel is processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("threshold must be between 0 and {max}, got {value}", max = MAX_DISTANCE)]
    ThresholdOutOfRange { value: i64 },
}

impl From<Infallible> for FilterError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub type FilterResult<T> = Result<T, FilterError>;
