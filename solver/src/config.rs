use crate::search::SelectionPolicy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub policy: SelectionPolicy,
}

impl SolverConfig {
    pub fn with_policy(policy: SelectionPolicy) -> Self {
        SolverConfig { policy }
    }
}
