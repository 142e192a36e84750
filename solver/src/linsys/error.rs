use crate::algebra;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// No non-zero pivot left in this column.
    SingularMatrix(usize),
    Algebra(algebra::Error),
}

impl From<algebra::Error> for Error {
    fn from(err: algebra::Error) -> Self {
        Error::Algebra(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SingularMatrix(col) => write!(f, "singular matrix, no pivot in column {}", col),
            Error::Algebra(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
