//! Construction parameters for [`ArrayList`](crate::ArrayList).

use crate::error::ListError;

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_GROWTH_STEP: usize = 10;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Capacity management settings of a list.
///
/// The list grows by `growth_step` slots once its size reaches
/// `floor(capacity * load_factor)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfig {
    /// Slots allocated up front, at least 1.
    pub initial_capacity: usize,
    /// Slots added on every growth, at least 1.
    pub growth_step: usize,
    /// Fraction of the capacity that may fill before `push` grows, in `(0, 1]`.
    pub load_factor: f64,
}

impl ListConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_growth_step(mut self, growth_step: usize) -> Self {
        self.growth_step = growth_step;
        self
    }

    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Checks every parameter, reporting the first one that is out of its domain.
    pub fn validate(&self) -> Result<(), ListError> {
        if self.initial_capacity == 0 {
            return Err(ListError::InvalidCapacity(self.initial_capacity));
        }

        if self.growth_step == 0 {
            return Err(ListError::InvalidGrowthStep(self.growth_step));
        }

        // NaN fails both comparisons.
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(ListError::InvalidLoadFactor(self.load_factor));
        }

        Ok(())
    }

    /// `floor(capacity * load_factor)`, never above `capacity`.
    pub(crate) fn threshold_for(&self, capacity: usize) -> usize {
        ((capacity as f64 * self.load_factor) as usize).min(capacity)
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_step: DEFAULT_GROWTH_STEP,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}
