//! Digit handling: input parsing, permutations and groupings

mod digits;
mod errors;
mod groupings;
mod permutations;
mod validation;

pub use digits::{parse_year, year_to_digits};
pub use errors::UtilsError;
pub use groupings::generate_groupings;
pub use permutations::unique_permutations;
pub use validation::{validate_digits, validate_year_string};

#[cfg(test)]
mod tests;
