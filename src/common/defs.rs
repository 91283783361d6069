pub type Discrete = i32;
pub type Continous = f64;

/// One outcome of taking an action in a state. Probabilities of all
/// transitions returned for a `(state, action)` pair sum to 1.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    pub next_state: Discrete,
    pub reward: Continous,
    pub probability: Continous,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EpisodeEvent {
    pub s: Discrete,
    pub r: Continous,
}

pub trait Policy {
    fn policy(&self, s: Discrete) -> Discrete;
}

#[derive(thiserror::Error, Debug)]
pub enum SolverError {
    /// The MDP violates an assumption the solver cannot work without.
    #[error("invalid MDP: {0}")]
    InvalidMdp(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Policy evaluation was still above theta after the sweep bound.
    #[error("policy evaluation did not converge within {0} sweeps")]
    ConvergenceTimeout(usize),
}

pub type Result<T> = std::result::Result<T, SolverError>;
