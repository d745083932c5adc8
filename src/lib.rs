//! Yearly - find the simplest expression over the digits of a year
//!
//! Every digit of the year is used exactly once. Digits may be reordered and
//! adjacent digits merged into larger numbers, then combined with
//! `+ - * / ^`. For every target from 1 to 100 the search keeps the
//! expression with the fewest operators, the first one found on a tie.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Evaluation, Expression, Number, Operator, Value};
pub use solver::{Solution, SolutionTable, SolverConfig, SolverError, YearSolver};
pub use utils::{UtilsError, parse_year, validate_year_string};

/// Solve every target from 1 to 100 for the digits of `year`
///
/// This is a convenience function that runs a solver with the default
/// configuration.
///
/// # Errors
///
/// This function will return an error if `year` is zero.
///
/// # Examples
///
/// ```
/// use yearly::solve_year;
///
/// match solve_year(2020) {
///     Ok(solutions) => {
///         for (target, solution) in solutions.iter() {
///             println!("{}: {}", target, solution);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_year(year: u64) -> Result<SolutionTable, SolverError> {
    YearSolver::default().solve_year(year)
}
