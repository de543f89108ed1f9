//! Error types for index construction and ray setup

/// Errors raised while building a spatial index or constructing rays
///
/// Queries never fail: a miss is reported as `None`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpatialError {
    /// No point indices were supplied to the build
    #[error("cannot build a spatial index from an empty point list")]
    EmptyInput,

    /// A ray direction of exactly zero length was supplied
    #[error("ray direction has zero length")]
    DegenerateRay,

    /// An index referenced a point past the end of the point set
    #[error("point index {index} is out of range for a point set of {len} points")]
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of points in the point set
        len: usize,
    },

    /// A referenced point has a NaN or infinite coordinate
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Index of the offending point
        index: usize,
    },
}
