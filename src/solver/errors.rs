use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Invalid target range: min={min}, max={max}")]
    InvalidTargetRange { min: i64, max: i64 },
}
