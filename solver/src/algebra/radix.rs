//! Digit strings in bases 2 to 36.

use num_bigint::BigUint;
use num_traits::identities::Zero;

use super::error::{Error, Result};

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

fn check_radix(base: u32) -> Result<u32> {
    if base < MIN_RADIX || base > MAX_RADIX {
        Err(Error::InvalidBase(base.to_string()))
    } else {
        Ok(base)
    }
}

/// Parses the textual form of a base, e.g. `"16"`.
pub fn parse_base(base: &str) -> Result<u32> {
    base.trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidBase(base.to_string()))
        .and_then(check_radix)
}

/// Decodes a case-insensitive digit string, most significant digit first.
/// Surrounding whitespace is ignored and an empty string decodes to zero.
pub fn parse_radix(digits: &str, base: u32) -> Result<BigUint> {
    let base = check_radix(base)?;
    let radix = BigUint::from(base);

    digits.trim().chars().try_fold(BigUint::zero(), |acc, ch| {
        let digit = ch
            .to_digit(MAX_RADIX)
            .filter(|d| *d < base)
            .ok_or(Error::InvalidDigit(ch, base))?;
        Ok(acc * &radix + BigUint::from(digit))
    })
}

/// Lowercase digits, no leading zeros.
pub fn to_radix(value: &BigUint, base: u32) -> Result<String> {
    Ok(value.to_str_radix(check_radix(base)?))
}
