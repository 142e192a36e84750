use std::fmt;
use std::str::FromStr;

use super::Candidate;
use crate::algebra::Fraction;
use crate::error::Error;
use crate::types::Point;

pub const NO_SOLUTION: &str = "No solution";

/// How the answer is picked among the candidates of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// First integer constant term in enumeration order, else the first
    /// constant term at all. Candidates are not checked against each other.
    FirstInteger,
    /// Candidate whose polynomial passes through the most input points;
    /// ties prefer an integer constant term, then enumeration order.
    Consensus,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::FirstInteger
    }
}

impl FromStr for SelectionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "first-integer" | "first" => Ok(SelectionPolicy::FirstInteger),
            "consensus" => Ok(SelectionPolicy::Consensus),
            _ => Err(Error::BadFormat(format!(
                "unknown selection policy '{}', expected first-integer or consensus",
                s
            ))),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::FirstInteger => write!(f, "first-integer"),
            SelectionPolicy::Consensus => write!(f, "consensus"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Found(Fraction),
    NoSolution,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Found(value) => write!(f, "{}", value),
            Selection::NoSolution => write!(f, "{}", NO_SOLUTION),
        }
    }
}

/// Picks the constant term to report. `points` are the searched points,
/// only used by `Consensus`.
pub fn select(policy: SelectionPolicy, candidates: &[Candidate], points: &[Point]) -> Selection {
    let chosen = match policy {
        SelectionPolicy::FirstInteger => first_integer(candidates),
        SelectionPolicy::Consensus => consensus(candidates, points),
    };
    chosen.cloned().map_or(Selection::NoSolution, Selection::Found)
}

fn first_integer(candidates: &[Candidate]) -> Option<&Fraction> {
    let mut terms = candidates.iter().filter_map(Candidate::constant_term);
    let first = terms.next()?;
    if first.is_integer() {
        return Some(first);
    }
    terms.find(|term| term.is_integer()).or(Some(first))
}

fn consensus<'a>(candidates: &'a [Candidate], points: &[Point]) -> Option<&'a Fraction> {
    let mut best: Option<((usize, bool), &Fraction)> = None;

    for candidate in candidates {
        let term = match candidate.constant_term() {
            Some(term) => term,
            None => continue,
        };
        let score = (candidate.agreement(points), term.is_integer());
        trace!("subset {:?} agrees with {} points", candidate.subset, score.0);

        if best.as_ref().map_or(true, |(top, _)| score > *top) {
            best = Some((score, term));
        }
    }

    if let Some(((agreeing, _), _)) = &best {
        debug!("best candidate agrees with {} of {} points", agreeing, points.len());
    }
    best.map(|(_, term)| term)
}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigInt;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    fn constant(subset: Vec<usize>, term: Fraction) -> Candidate {
        Candidate {
            subset,
            coeffs: vec![term],
        }
    }

    #[test]
    fn test_first_integer_wins() {
        let candidates = vec![
            constant(vec![0], frac(1, 2)),
            constant(vec![1], frac(5, 1)),
            constant(vec![2], frac(7, 1)),
        ];
        assert_eq!(
            Selection::Found(frac(5, 1)),
            select(SelectionPolicy::FirstInteger, &candidates, &[])
        );
    }

    #[test]
    fn test_first_integer_falls_back_to_first() {
        let candidates = vec![constant(vec![0], frac(1, 2)), constant(vec![1], frac(2, 3))];
        let selection = select(SelectionPolicy::FirstInteger, &candidates, &[]);
        assert_eq!("1/2", selection.to_string());
    }

    #[test]
    fn test_no_candidates() {
        for policy in [SelectionPolicy::FirstInteger, SelectionPolicy::Consensus].iter() {
            let selection = select(*policy, &[], &[]);
            assert_eq!(Selection::NoSolution, selection);
            assert_eq!("No solution", selection.to_string());
        }
    }

    #[test]
    fn test_consensus_picks_most_agreement() {
        let points: Vec<Point> = vec![(1, 5).into(), (2, 5).into(), (3, 9).into()];
        // constant 9 only matches the third point, constant 5 matches two
        let candidates = vec![constant(vec![2], frac(9, 1)), constant(vec![0], frac(5, 1))];

        assert_eq!(
            Selection::Found(frac(9, 1)),
            select(SelectionPolicy::FirstInteger, &candidates, &points)
        );
        assert_eq!(
            Selection::Found(frac(5, 1)),
            select(SelectionPolicy::Consensus, &candidates, &points)
        );
    }

    #[test]
    fn test_consensus_tie_prefers_integer_then_order() {
        let points: Vec<Point> = vec![(1, 1).into()];
        let candidates = vec![
            constant(vec![0], frac(1, 3)),
            constant(vec![1], frac(4, 1)),
            constant(vec![2], frac(6, 1)),
        ];
        assert_eq!(
            Selection::Found(frac(4, 1)),
            select(SelectionPolicy::Consensus, &candidates, &points)
        );
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(SelectionPolicy::Consensus, "consensus".parse().unwrap());
        assert_eq!(SelectionPolicy::FirstInteger, "first-integer".parse().unwrap());
        assert!("majority".parse::<SelectionPolicy>().is_err());
        assert_eq!("consensus", SelectionPolicy::Consensus.to_string());
    }
}
