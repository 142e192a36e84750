use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::identities::{One, Zero};
use num_traits::Signed;

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::error::{Error, Result};

// Exact fraction ------------------------------------------------

/// Rational number over arbitrary precision integers.
///
/// Always kept in lowest terms with a strictly positive denominator, so two
/// fractions are equal exactly when their numerator/denominator pairs are.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(Error::InvalidFraction);
        }
        Ok(Fraction::reduced(numer, denom))
    }

    // denom must be non-zero
    fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let gcd = numer.gcd(&denom);
        if !gcd.is_one() {
            numer = numer / &gcd;
            denom = denom / &gcd;
        }
        Fraction { numer, denom }
    }

    pub fn from_integer(n: BigInt) -> Self {
        Fraction {
            numer: n,
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Fraction::from_integer(BigInt::zero())
    }
    pub fn one() -> Self {
        Fraction::from_integer(BigInt::one())
    }
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.is_integer() {
            Some(self.numer.clone())
        } else {
            None
        }
    }

    /// Powers of a reduced fraction stay reduced, no gcd needed.
    pub fn pow(&self, exp: u32) -> Fraction {
        Fraction {
            numer: num_traits::pow(self.numer.clone(), exp as usize),
            denom: num_traits::pow(self.denom.clone(), exp as usize),
        }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        write!(fmt, "{}", self)
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Fraction::from_integer(n)
    }
}

impl From<&BigUint> for Fraction {
    fn from(n: &BigUint) -> Self {
        Fraction::from_integer(BigInt::from_biguint(Sign::Plus, n.clone()))
    }
}

impl From<u64> for Fraction {
    fn from(n: u64) -> Self {
        Fraction::from_integer(BigInt::from(n))
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::from_integer(BigInt::from(n))
    }
}

// -&Fraction -> Fraction
impl<'a> Neg for &'a Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }
}

// &Fraction + &Fraction -> Fraction
impl<'a> Add<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn add(self, rhs: &'a Fraction) -> Fraction {
        Fraction::reduced(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

// &Fraction - &Fraction -> Fraction
impl<'a> Sub<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &'a Fraction) -> Fraction {
        Fraction::reduced(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

// &Fraction * &Fraction -> Fraction
impl<'a> Mul<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &'a Fraction) -> Fraction {
        Fraction::reduced(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

// &Fraction / &Fraction -> Result<Fraction>
impl<'a> Div<&'a Fraction> for &'a Fraction {
    type Output = Result<Fraction>;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: &'a Fraction) -> Result<Fraction> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Fraction::reduced(
            &self.numer * &rhs.denom,
            &self.denom * &rhs.numer,
        ))
    }
}

// test --------------------------------------------------------------------
