extern crate num_bigint;
extern crate num_integer;
extern crate num_traits;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
#[macro_use]
extern crate log;

pub mod algebra;
pub mod config;
mod error;
pub mod input;
pub mod linsys;
pub mod samples;
pub mod search;
pub mod types;

pub use config::SolverConfig;
pub use error::{Error, Result};
pub use input::Case;
pub use search::{Selection, SelectionPolicy};
pub use types::Point;

/// Recovers the constant term of the degree k-1 polynomial behind `case`.
pub fn solve_case(case: &Case, config: &SolverConfig) -> Result<Selection> {
    info!(
        "solving for k={} from {} points with policy {}",
        case.k,
        case.points.len(),
        config.policy
    );

    let candidates = search::search(&case.points, case.k)?;
    let selection = search::select(config.policy, &candidates, &case.points);

    info!("constant term: {}", selection);
    Ok(selection)
}

pub fn solve_json(json: &str, config: &SolverConfig) -> Result<Selection> {
    solve_case(&Case::from_json(json)?, config)
}
