use num_bigint::BigUint;

/// A decoded sample `(x, y)` of the unknown polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: u64,
    pub y: BigUint,
}

impl Point {
    pub fn new(x: u64, y: BigUint) -> Self {
        Point { x, y }
    }
}

impl From<(u64, u64)> for Point {
    fn from((x, y): (u64, u64)) -> Self {
        Point::new(x, BigUint::from(y))
    }
}
