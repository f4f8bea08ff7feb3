//! Error types for dice rolling.

/// Errors that can occur while rolling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// The requested half-open range `[low, high)` contains no values.
    #[error("invalid roll range [{low}, {high})")]
    InvalidRange {
        /// Inclusive lower bound.
        low: i32,
        /// Exclusive upper bound.
        high: i32,
    },
}

/// Convenience result type for dice operations.
pub type MechResult<T> = Result<T, MechError>;
