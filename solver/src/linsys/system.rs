use crate::algebra::Fraction;
use crate::types::Point;

/// Square system `a * coeffs = b` over exact fractions.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearSystem {
    pub(super) a: Vec<Vec<Fraction>>,
    pub(super) b: Vec<Fraction>,
}

impl LinearSystem {
    pub fn from_rows(a: Vec<Vec<Fraction>>, b: Vec<Fraction>) -> Self {
        debug_assert!(a.len() == b.len() && a.iter().all(|row| row.len() == b.len()));
        LinearSystem { a, b }
    }

    /// Vandermonde system for the polynomial through `points`. Column `c`
    /// of row `i` holds `x_i^(k-1-c)`, so the solution lists coefficients
    /// from the highest power down to the constant term.
    ///
    /// Repeated x values are accepted here and make the system singular.
    pub fn vandermonde(points: &[&Point]) -> Self {
        let k = points.len();
        let mut a = Vec::with_capacity(k);
        let mut b = Vec::with_capacity(k);

        for point in points {
            let x = Fraction::from(point.x);
            let mut powers = Vec::with_capacity(k);
            let mut power = Fraction::one();
            for _ in 0..k {
                let next = &power * &x;
                powers.push(power);
                power = next;
            }
            powers.reverse();

            a.push(powers);
            b.push(Fraction::from(&point.y));
        }

        LinearSystem { a, b }
    }

    pub fn size(&self) -> usize {
        self.b.len()
    }

    /// `b - a * solution`, all zero when `solution` solves the system.
    pub fn residual(&self, solution: &[Fraction]) -> Vec<Fraction> {
        self.a
            .iter()
            .zip(self.b.iter())
            .map(|(row, rhs)| {
                row.iter()
                    .zip(solution.iter())
                    .fold(rhs.clone(), |acc, (coeff, value)| &acc - &(coeff * value))
            })
            .collect()
    }
}
