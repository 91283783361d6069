use crate::common::defs::*;
use crate::mdps::*;
use log::debug;
use std::rc::Rc;

/// How a `(state, action)` transition list is collapsed into a scalar
/// backup value.
///
/// `FirstListed` consumes only the first listed transition, even when the
/// MDP returns a full successor distribution. `FullDistribution` sums
/// `p * (r + gamma * V[s'])` over every listed transition; prefer it for
/// genuinely stochastic MDPs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackupMode {
    #[default]
    FirstListed,
    FullDistribution,
}

/// Policy Iteration - Sutton & Barto 2018, ch. 4.3.
///
/// Alternates iterative policy evaluation and greedy policy improvement
/// until the policy is stable. State 0 is the absorbing reference point:
/// it is never swept, its value stays at 0 and its policy entry stays at
/// the first action the MDP lists for it.
#[derive(Clone)]
pub struct PolicyIteration {
    mdp: Rc<dyn Mdp>,
    gamma: Continous,
    backup: BackupMode,
    max_eval_sweeps: Option<usize>,
    v: Vec<Continous>,
    pi: Vec<Discrete>,
    prob_pi_act: Vec<Vec<Continous>>,
}

impl PolicyIteration {
    pub fn new(mdp: Rc<dyn Mdp>, gamma: Continous) -> Result<Self> {
        Self::with_options(mdp, gamma, BackupMode::default(), None)
    }

    pub fn with_options(
        mdp: Rc<dyn Mdp>,
        gamma: Continous,
        backup: BackupMode,
        max_eval_sweeps: Option<usize>,
    ) -> Result<Self> {
        if !(0. ..=1.).contains(&gamma) {
            return Err(SolverError::InvalidConfiguration(format!(
                "gamma must be within [0, 1], got {gamma}"
            )));
        }

        let n_s = mdp.state_count();
        if n_s == 0 {
            return Err(SolverError::InvalidMdp("zero states".to_string()));
        }

        let mut pi = vec![0; n_s];
        let mut prob_pi_act = Vec::with_capacity(n_s);
        for s in 0..n_s {
            let actions = mdp.available_actions(s as Discrete);
            if actions.is_empty() {
                return Err(SolverError::InvalidMdp(format!(
                    "state {s} has no available actions"
                )));
            }
            for &a in &actions {
                if mdp.transitions(s as Discrete, a).is_empty() {
                    return Err(SolverError::InvalidMdp(format!(
                        "state {s} action {a} has no transitions"
                    )));
                }
            }

            pi[s] = actions[0];
            prob_pi_act.push(vec![1. / actions.len() as Continous; actions.len()]);
        }

        Ok(Self {
            mdp,
            gamma,
            backup,
            max_eval_sweeps,
            v: vec![0.; n_s],
            pi,
            prob_pi_act,
        })
    }

    fn backup_value(&self, ts: &[Transition]) -> Continous {
        match self.backup {
            BackupMode::FirstListed => {
                let t = &ts[0];
                t.probability * (t.reward + self.gamma * self.v[t.next_state as usize])
            }
            BackupMode::FullDistribution => ts
                .iter()
                .map(|t| t.probability * (t.reward + self.gamma * self.v[t.next_state as usize]))
                .sum(),
        }
    }

    /// Iterative policy evaluation: sweeps states 1.. in place until the
    /// largest single-state change drops below theta.
    fn evaluate(&mut self, theta: Continous) -> Result<usize> {
        let mut sweeps = 0;
        loop {
            let mut delta: Continous = 0.;
            for s in 1..self.mdp.state_count() {
                let actions = self.mdp.available_actions(s as Discrete);
                let mut tt = 0.;
                for (slot, &a) in actions.iter().enumerate() {
                    let ts = self.mdp.transitions(s as Discrete, a);
                    tt += self.prob_pi_act[s][slot] * self.backup_value(&ts);
                }
                delta = delta.max((tt - self.v[s]).abs());
                self.v[s] = tt;
            }

            sweeps += 1;
            if delta < theta {
                debug!("evaluation converged: sweeps={sweeps} delta={delta:e}");
                return Ok(sweeps);
            }
            if let Some(max) = self.max_eval_sweeps {
                if sweeps >= max {
                    return Err(SolverError::ConvergenceTimeout(max));
                }
            }
        }
    }

    /// Greedy one-step-lookahead improvement. Ties keep the first action
    /// in MDP order. Returns whether the policy survived unchanged.
    fn improve(&mut self) -> bool {
        let mut policy_stable = true;
        for s in 1..self.mdp.state_count() {
            let actions = self.mdp.available_actions(s as Discrete);
            let old_action = self.pi[s];

            let mut best = Continous::NEG_INFINITY;
            let mut best_slot = 0;
            for (slot, &a) in actions.iter().enumerate() {
                let q = self.backup_value(&self.mdp.transitions(s as Discrete, a));
                if best < q {
                    best = q;
                    best_slot = slot;
                }
            }

            self.pi[s] = actions[best_slot];
            if old_action != self.pi[s] {
                policy_stable = false;
            }

            let mut one_hot = vec![0.; actions.len()];
            one_hot[best_slot] = 1.;
            self.prob_pi_act[s] = one_hot;
        }

        policy_stable
    }
}

impl MdpSolver<bool> for PolicyIteration {
    fn v_star(&self, s: Discrete) -> Continous {
        self.v[s as usize]
    }

    fn q_star(&self, s: Discrete, a: Discrete) -> Option<Continous> {
        if !self.mdp.available_actions(s).contains(&a) {
            return None;
        }

        Some(self.backup_value(&self.mdp.transitions(s, a)))
    }

    fn pi_star(&self, s: Discrete) -> Option<Discrete> {
        self.pi.get(s as usize).copied()
    }

    /// Runs evaluate/improve rounds until the policy is stable, or until
    /// `num_iterations` rounds have been spent. Returns the stability
    /// flag and the number of rounds taken.
    fn exec(&mut self, theta: Continous, num_iterations: Option<usize>) -> Result<(bool, usize)> {
        if !(theta > 0. && theta.is_finite()) {
            return Err(SolverError::InvalidConfiguration(format!(
                "theta must be a positive finite number, got {theta}"
            )));
        }

        let mut iterations = 0;
        loop {
            let sweeps = self.evaluate(theta)?;
            let policy_stable = self.improve();
            iterations += 1;
            debug!("iteration {iterations}: sweeps={sweeps} stable={policy_stable}");

            if policy_stable {
                return Ok((true, iterations));
            }
            if let Some(max) = num_iterations {
                if iterations >= max {
                    return Ok((false, iterations));
                }
            }
        }
    }
}

/// One-call form: solve the MDP and hand back the value function and the
/// greedy policy.
pub fn policy_iteration(
    mdp: Rc<dyn Mdp>,
    gamma: Continous,
    theta: Continous,
) -> Result<(Vec<Continous>, Vec<Discrete>)> {
    let n_s = mdp.state_count();
    let solver = &mut PolicyIteration::new(mdp, gamma)?;
    solver.exec(theta, None)?;

    let v = (0..n_s).map(|s| solver.v_star(s as Discrete)).collect();
    let pi = (0..n_s)
        .map(|s| solver.pi_star(s as Discrete).unwrap())
        .collect();
    Ok((v, pi))
}
