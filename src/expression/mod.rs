//! Expression trees over digit groupings: evaluation and rendering

mod ast;
mod display;
mod eval;
mod latex;
mod value;

pub use ast::{Expression, Number, Operator};
pub use eval::{DEFAULT_MAX_EXPONENT, Evaluation, SENTINEL_COST};
pub use value::{Rational, Value};
