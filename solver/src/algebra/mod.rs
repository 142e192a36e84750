mod error;
mod fraction;
pub mod radix;

#[cfg(test)]
mod proptests;

pub use self::error::*;
pub use self::fraction::Fraction;
pub use self::radix::{parse_base, parse_radix, to_radix};
