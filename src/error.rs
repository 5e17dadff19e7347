use thiserror::Error;

/// Errors reported by [`ArrayList`](crate::ArrayList) operations.
///
/// Every fallible operation checks its arguments before touching the list, so an `Err` always
/// leaves the list exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListError {
    /// The index is not less than the current logical size.
    #[error("Cannot call method with index not less than current size; index = {index}, size = {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Initial capacity must be at least 1.
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Growth step must be at least 1, otherwise growing would not make room.
    #[error("Invalid growth step: {0} (must be at least 1)")]
    InvalidGrowthStep(usize),

    /// Load factor must be finite and in `(0, 1]`.
    #[error("Invalid load factor: {0} (must be > 0 and <= 1)")]
    InvalidLoadFactor(f64),
}

impl ListError {
    /// `true` for the out-of-range kind, `false` for invalid construction arguments.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }
}
