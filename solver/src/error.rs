use crate::{algebra, linsys};
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::error::Error),
    Algebra(algebra::Error),
    LinSys(linsys::Error),
    BadFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::error::Error> for Error {
    fn from(err: serde_json::error::Error) -> Self {
        Error::Json(err)
    }
}

impl From<algebra::Error> for Error {
    fn from(err: algebra::Error) -> Self {
        Error::Algebra(err)
    }
}

impl From<linsys::Error> for Error {
    fn from(err: linsys::Error) -> Self {
        Error::LinSys(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{}", err),
            Error::Json(err) => write!(f, "invalid json: {}", err),
            Error::Algebra(err) => write!(f, "{}", err),
            Error::LinSys(err) => write!(f, "{}", err),
            Error::BadFormat(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
