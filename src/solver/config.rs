use std::ops::RangeInclusive;

use crate::solver::constants::{
    DEFAULT_MAX_EXPONENT, DEFAULT_MAX_TARGET, DEFAULT_MIN_TARGET, EPSILON,
};
use crate::solver::errors::SolverError;

/// Configuration for a search run
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub min_target: i64,
    pub max_target: i64,
    /// A base of 2 or more with a larger exponent is disqualified
    pub max_exponent: i128,
    /// Tolerance when deciding whether an approximate value is an integer
    pub epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_target: DEFAULT_MIN_TARGET,
            max_target: DEFAULT_MAX_TARGET,
            max_exponent: DEFAULT_MAX_EXPONENT,
            epsilon: EPSILON,
        }
    }
}

impl SolverConfig {
    pub fn targets(&self) -> RangeInclusive<i64> {
        self.min_target..=self.max_target
    }

    /// # Errors
    ///
    /// Returns an error if the target range is empty.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.min_target > self.max_target {
            return Err(SolverError::InvalidTargetRange {
                min: self.min_target,
                max: self.max_target,
            });
        }
        Ok(())
    }
}
