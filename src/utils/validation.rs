use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the string is empty, contains any non-ASCII-digit
/// characters, or denotes the year zero.
pub fn validate_year_string(year: &str) -> Result<(), UtilsError> {
    debug!("Validating year string: '{}'", year);

    if year.is_empty() {
        warn!("Year string is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    if !year.chars().all(|c| c.is_ascii_digit()) {
        warn!("Year string contains non-digit characters: '{}'", year);
        return Err(UtilsError::InvalidDigitString(year.to_string()));
    }

    if year.chars().all(|c| c == '0') {
        warn!("Year string is zero: '{}'", year);
        return Err(UtilsError::ZeroYear);
    }

    debug!("Year string validation successful");
    Ok(())
}

/// # Errors
///
/// Returns an error if the sequence is empty or holds a value above 9.
pub fn validate_digits(digits: &[u8]) -> Result<(), UtilsError> {
    if digits.is_empty() {
        warn!("Digit sequence is empty");
        return Err(UtilsError::EmptyDigitString);
    }

    if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
        warn!("Digit sequence {:?} contains {}", digits, bad);
        return Err(UtilsError::InvalidDigit(bad));
    }

    Ok(())
}
