pub mod simulate;
pub mod solvers;

use crate::common::defs::*;
use std::rc::Rc;

/// Markov Decision Process - Sutton & Barto 2018.
///
/// The process is queried, never stored: the solver only ever asks for
/// the state count, the ordered action set of a state, and the ordered
/// transition list of a `(state, action)` pair. All three are fixed for
/// the lifetime of the value.
pub trait Mdp {
    fn state_count(&self) -> usize;

    fn available_actions(&self, s: Discrete) -> Vec<Discrete>;

    fn transitions(&self, s: Discrete, a: Discrete) -> Vec<Transition>;
}

pub trait MdpSolver<T> {
    fn v_star(&self, s: Discrete) -> Continous;

    fn q_star(&self, s: Discrete, a: Discrete) -> Option<Continous>;

    fn pi_star(&self, s: Discrete) -> Option<Discrete>;

    fn exec(&mut self, theta: Continous, num_iterations: Option<usize>) -> Result<(T, usize)>;
}

pub struct MdpSolverPolicy<T> {
    pub mdp_solver: Rc<dyn MdpSolver<T>>,
}

impl<T> Policy for MdpSolverPolicy<T> {
    fn policy(&self, s: Discrete) -> Discrete {
        self.mdp_solver.pi_star(s).unwrap()
    }
}
