//! Brute force over every k-subset of the sample points.
//!
//! Each subset is interpolated exactly; subsets whose system is singular
//! are skipped. The number of solves is C(n, k), which is fine for the
//! tens of points this is meant for and hopeless well beyond that.

mod combinations;
mod select;

pub use self::combinations::Combinations;
pub use self::select::{select, Selection, SelectionPolicy, NO_SOLUTION};

use crate::algebra::Fraction;
use crate::error::{Error, Result};
use crate::linsys::{self, LinearSystem};
use crate::types::Point;

/// Polynomial interpolated through one subset of the points.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Indices into the searched point list.
    pub subset: Vec<usize>,
    /// Coefficients, highest power first.
    pub coeffs: Vec<Fraction>,
}

impl Candidate {
    pub fn constant_term(&self) -> Option<&Fraction> {
        self.coeffs.last()
    }

    pub fn eval(&self, x: u64) -> Fraction {
        let x = Fraction::from(x);
        self.coeffs
            .iter()
            .fold(Fraction::zero(), |acc, coeff| &(&acc * &x) + coeff)
    }

    /// How many of `points` lie exactly on this polynomial.
    pub fn agreement(&self, points: &[Point]) -> usize {
        points
            .iter()
            .filter(|point| self.eval(point.x) == Fraction::from(&point.y))
            .count()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubsetOutcome {
    Solved(Candidate),
    Infeasible,
}

/// Interpolates the points picked by `subset`. A singular system is an
/// `Infeasible` outcome; any other failure is an error.
pub fn solve_subset(points: &[Point], subset: Vec<usize>) -> Result<SubsetOutcome> {
    let chosen: Vec<&Point> = subset.iter().map(|&i| &points[i]).collect();

    match LinearSystem::vandermonde(&chosen).solve() {
        Ok(coeffs) => Ok(SubsetOutcome::Solved(Candidate { subset, coeffs })),
        Err(linsys::Error::SingularMatrix(col)) => {
            trace!("subset {:?} is singular at column {}", subset, col);
            Ok(SubsetOutcome::Infeasible)
        }
        Err(err) => Err(Error::from(err)),
    }
}

/// Solves every k-subset of `points` in lexicographic index order and
/// returns the candidates in that order. Fewer than `k` points means no
/// subsets and so no candidates.
pub fn search(points: &[Point], k: usize) -> Result<Vec<Candidate>> {
    if k == 0 {
        return Err(Error::BadFormat("k must be at least 1".to_string()));
    }
    if k > points.len() {
        warn!("{} points needed but only {} given", k, points.len());
    }

    let mut candidates = Vec::new();
    let mut explored = 0;
    let mut skipped = 0;

    for subset in Combinations::new(points.len(), k) {
        explored += 1;
        match solve_subset(points, subset)? {
            SubsetOutcome::Solved(candidate) => {
                trace!(
                    "subset {:?} gives constant term {:?}",
                    candidate.subset,
                    candidate.constant_term()
                );
                candidates.push(candidate);
            }
            SubsetOutcome::Infeasible => skipped += 1,
        }
    }

    debug!(
        "explored {} subsets of size {}: {} solved, {} singular",
        explored,
        k,
        candidates.len(),
        skipped
    );

    Ok(candidates)
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigInt;

    fn points(pairs: &[(u64, u64)]) -> Vec<Point> {
        pairs.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn test_search_collects_every_subset() -> Result<()> {
        let pts = points(&[(1, 4), (2, 7), (3, 12), (6, 39)]);
        let candidates = search(&pts, 3)?;

        assert_eq!(4, candidates.len());
        assert_eq!(vec![0, 1, 2], candidates[0].subset);
        assert_eq!(vec![1, 2, 3], candidates[3].subset);
        for candidate in candidates.iter() {
            assert_eq!(Some(&Fraction::from(3u64)), candidate.constant_term());
            assert_eq!(4, candidate.agreement(&pts));
        }
        Ok(())
    }

    #[test]
    fn test_search_skips_singular_subsets() -> Result<()> {
        let pts = points(&[(1, 2), (1, 5), (2, 4)]);
        let candidates = search(&pts, 2)?;

        let subsets: Vec<Vec<usize>> = candidates.iter().map(|c| c.subset.clone()).collect();
        assert_eq!(vec![vec![0, 2], vec![1, 2]], subsets);
        assert_eq!(Some(&Fraction::zero()), candidates[0].constant_term());
        assert_eq!(Some(&Fraction::from(6u64)), candidates[1].constant_term());
        Ok(())
    }

    #[test]
    fn test_search_all_singular() -> Result<()> {
        let pts = points(&[(5, 1), (5, 2), (5, 3)]);
        assert!(search(&pts, 2)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_search_rejects_zero_k() {
        let pts = points(&[(1, 1), (2, 2)]);
        assert!(matches!(search(&pts, 0), Err(Error::BadFormat(_))));
    }

    #[test]
    fn test_search_too_few_points_has_no_candidates() -> Result<()> {
        let pts = points(&[(1, 1), (2, 2)]);
        assert!(search(&pts, 3)?.is_empty());
        assert!(search(&[], 1)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_solve_subset_outcomes() -> Result<()> {
        let pts = points(&[(3, 1), (3, 1), (4, 0)]);
        assert_eq!(SubsetOutcome::Infeasible, solve_subset(&pts, vec![0, 1])?);
        match solve_subset(&pts, vec![1, 2])? {
            SubsetOutcome::Solved(candidate) => {
                // y = -x + 4
                assert_eq!(vec![Fraction::from(-1i64), Fraction::from(4i64)], candidate.coeffs);
            }
            SubsetOutcome::Infeasible => panic!("subset should be solvable"),
        }
        Ok(())
    }

    #[test]
    fn test_candidate_eval() {
        let candidate = Candidate {
            subset: vec![0, 1],
            coeffs: vec![
                Fraction::new(BigInt::from(1), BigInt::from(2)).unwrap(),
                Fraction::from(-3i64),
            ],
        };
        assert_eq!(Fraction::from(2i64), candidate.eval(10));
        assert_eq!("-5/2", candidate.eval(1).to_string());
    }
}
