pub mod constants;
mod config;
mod core;
mod errors;
mod table;
mod trees;

pub use config::SolverConfig;
pub use core::YearSolver;
pub use errors::SolverError;
pub use table::{Solution, SolutionTable};
pub use trees::{generate_trees, tree_count};
