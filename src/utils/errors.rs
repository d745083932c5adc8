use thiserror::Error;

/// Errors that can occur while turning user input into digits
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit string cannot be empty")]
    EmptyDigitString,
    #[error("Digit string must contain only digits: {0}")]
    InvalidDigitString(String),
    #[error("Digit out of range 0..=9: {0}")]
    InvalidDigit(u8),
    #[error("Year must be a positive integer")]
    ZeroYear,
}
