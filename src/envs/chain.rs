use crate::common::defs::*;
use crate::mdps::*;

pub const RIGHT: Discrete = 0;
pub const LEFT: Discrete = 1;

/// Three-state walk 0 - 1 - 2 with the terminal at state 0. LEFT moves
/// toward the terminal, RIGHT moves away (or bumps the far wall). Every
/// step costs -1 except stepping into the terminal, which pays +10.
///
/// RIGHT is listed first on purpose: the seeded policy starts out
/// pointing away from the terminal, so a solve has to flip it.
///
/// With gamma = 0.9 the optimal values are V(1) = 10 and
/// V(2) = -1 + 0.9 * 10 = 8, LEFT everywhere.
pub struct ChainWalk;

impl Mdp for ChainWalk {
    fn state_count(&self) -> usize {
        3
    }

    fn available_actions(&self, _s: Discrete) -> Vec<Discrete> {
        vec![RIGHT, LEFT]
    }

    fn transitions(&self, s: Discrete, a: Discrete) -> Vec<Transition> {
        let (next_state, reward) = match (s, a) {
            (0, _) => (0, 0.),
            (1, LEFT) => (0, 10.),
            (1, RIGHT) => (2, -1.),
            (2, LEFT) => (1, -1.),
            (2, RIGHT) => (2, -1.),
            _ => panic!("no transition for state {s} action {a}"),
        };

        vec![Transition {
            next_state,
            reward,
            probability: 1.,
        }]
    }
}
