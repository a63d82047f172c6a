use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateTextError {
    #[error("expected YYYY/MM/DD or YYYY-MM-DD, got: {0}")]
    InvalidFormat(String),
    #[error("invalid date component in: {0}")]
    InvalidComponent(String),
    #[error("date out of range: {0}")]
    OutOfRange(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Entered passwords do not match")]
    Mismatch,
    #[error("Password must be at least {0} characters in length")]
    TooShort(usize),
    #[error("Password cannot be more than {0} characters in length")]
    TooLong(usize),
    #[error("Password must not be the same as username")]
    SameAsUsername,
    #[error(
        "Password must contain characters from at least three of the following character groups: lowercase letters, uppercase letters, numerals, and other symbols."
    )]
    TooSimple,
}
