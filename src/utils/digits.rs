use log::debug;

use crate::utils::errors::UtilsError;
use crate::utils::validation::validate_year_string;

/// Decimal digits of `year`, most significant first
///
/// # Errors
///
/// Returns [`UtilsError::ZeroYear`] for a zero year.
pub fn year_to_digits(year: u64) -> Result<Vec<u8>, UtilsError> {
    if year == 0 {
        return Err(UtilsError::ZeroYear);
    }

    let mut digits = Vec::new();
    let mut rest = year;
    while rest > 0 {
        digits.push((rest % 10) as u8);
        rest /= 10;
    }
    digits.reverse();

    debug!("Decomposed {} into {:?}", year, digits);
    Ok(digits)
}

/// Digits of a year written in decimal, leading zeros dropped
///
/// # Errors
///
/// Returns an error if the string is not a positive decimal integer.
pub fn parse_year(year: &str) -> Result<Vec<u8>, UtilsError> {
    validate_year_string(year)?;

    let digits: Vec<u8> = year
        .trim_start_matches('0')
        .bytes()
        .map(|b| b - b'0')
        .collect();

    debug!("Parsed '{}' into {:?}", year, digits);
    Ok(digits)
}
