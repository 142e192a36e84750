use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidFraction,
    DivideByZero,
    InvalidDigit(char, u32),
    InvalidBase(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidFraction => write!(f, "fraction with zero denominator"),
            Error::DivideByZero => write!(f, "division by zero"),
            Error::InvalidDigit(ch, base) => write!(f, "invalid digit '{}' for base {}", ch, base),
            Error::InvalidBase(base) => write!(f, "invalid base '{}'", base),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
