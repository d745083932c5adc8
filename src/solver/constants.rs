// Configuration constants for the solver module
pub use crate::expression::{DEFAULT_MAX_EXPONENT, SENTINEL_COST};

pub const DEFAULT_MIN_TARGET: i64 = 1;
pub const DEFAULT_MAX_TARGET: i64 = 100;
pub const EPSILON: f64 = 1e-9;
