//! Domain error types.

/// Errors raised while building domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Timestamps are paired into segments, so there must be an even number
    #[error("you must pass an even number of timestamps (got {0})")]
    OddTimestampCount(usize),
}
