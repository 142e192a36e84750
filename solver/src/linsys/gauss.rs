use super::error::{Error, Result};
use super::system::LinearSystem;
use crate::algebra::Fraction;

impl LinearSystem {
    /// Gaussian elimination with partial pivoting, then back-substitution.
    ///
    /// Arithmetic is exact, so the first non-zero entry of a column is as
    /// good a pivot as any. Fails with `SingularMatrix` when a column has
    /// no non-zero entry at or below the diagonal.
    pub fn solve(mut self) -> Result<Vec<Fraction>> {
        let size = self.size();

        for col in 0..size {
            let pivot = (col..size)
                .find(|&row| !self.a[row][col].is_zero())
                .ok_or_else(|| {
                    trace!("no pivot in column {}", col);
                    Error::SingularMatrix(col)
                })?;

            if pivot != col {
                self.a.swap(col, pivot);
                self.b.swap(col, pivot);
            }

            for row in col + 1..size {
                if self.a[row][col].is_zero() {
                    continue;
                }
                let factor = (&self.a[row][col] / &self.a[col][col])?;
                for c in col..size {
                    let delta = &factor * &self.a[col][c];
                    self.a[row][c] = &self.a[row][c] - &delta;
                }
                let delta = &factor * &self.b[col];
                self.b[row] = &self.b[row] - &delta;
            }
        }

        let mut solution = vec![Fraction::zero(); size];
        for i in (0..size).rev() {
            let mut rhs = self.b[i].clone();
            for j in i + 1..size {
                rhs = &rhs - &(&self.a[i][j] * &solution[j]);
            }
            solution[i] = (&rhs / &self.a[i][i])?;
        }

        Ok(solution)
    }
}
