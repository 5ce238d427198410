use thiserror::Error;

/// Errors returned by the sorting and selection entry points.
///
/// Every check happens before the first write, a failed call leaves all
/// buffers untouched.
#[derive(Debug, Error)]
pub enum SortError {
    /// A buffer is shorter than the number of elements to process.
    #[error("buffer `{buffer}` holds {len} elements but {count} are required")]
    Capacity {
        buffer: &'static str,
        len: usize,
        count: usize,
    },
    /// Contradictory arguments, e.g. key-value mode without values.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Working storage could not be reserved.
    #[error("allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),
}
