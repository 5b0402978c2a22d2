//! Error types for the planar neighbor finder.

use thiserror::Error;

/// Errors raised while setting up a finder or its point collection.
///
/// The query and mutation operations themselves never fail: an empty
/// neighborhood is reported as `None`, not as an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinderError {
    #[error("near distance must be a positive finite number, got {0}")]
    InvalidRadius(f64),

    #[error("coordinate buffer has odd length {0}, expected interleaved x/y pairs")]
    OddCoordinateCount(usize),

    #[error("non-finite coordinate for point {index}")]
    NonFiniteCoordinate { index: usize },

    #[error("malformed point at position {0}, expected an [x, y] pair")]
    MalformedPoint(usize),

    #[error("point index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, FinderError>;
