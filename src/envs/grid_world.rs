use crate::common::defs::*;
use crate::mdps::*;

pub const UP: Discrete = 0;
pub const DOWN: Discrete = 1;
pub const LEFT: Discrete = 2;
pub const RIGHT: Discrete = 3;

/// Gridworld in the spirit of Sutton & Barto 2018, example 4.1: cells
/// numbered row-major, cell 0 absorbing, four deterministic moves that
/// stay put at the edges, reward -1 for every step out of a live cell.
///
/// Under a discount gamma the optimal value of a cell at Manhattan
/// distance d from cell 0 is -(1 - gamma^d) / (1 - gamma).
pub struct GridWorld {
    rows: usize,
    cols: usize,
}

impl GridWorld {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0);
        Self { rows, cols }
    }

    pub fn distance_to_terminal(&self, s: Discrete) -> usize {
        let s = s as usize;
        s / self.cols + s % self.cols
    }
}

impl Mdp for GridWorld {
    fn state_count(&self) -> usize {
        self.rows * self.cols
    }

    fn available_actions(&self, _s: Discrete) -> Vec<Discrete> {
        vec![UP, DOWN, LEFT, RIGHT]
    }

    fn transitions(&self, s: Discrete, a: Discrete) -> Vec<Transition> {
        if s == 0 {
            return vec![Transition {
                next_state: 0,
                reward: 0.,
                probability: 1.,
            }];
        }

        let (mut row, mut col) = (s as usize / self.cols, s as usize % self.cols);
        match a {
            UP => row = row.saturating_sub(1),
            DOWN => row = (row + 1).min(self.rows - 1),
            LEFT => col = col.saturating_sub(1),
            RIGHT => col = (col + 1).min(self.cols - 1),
            _ => panic!("unknown action {a}"),
        };

        vec![Transition {
            next_state: (row * self.cols + col) as Discrete,
            reward: -1.,
            probability: 1.,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;

    #[test]
    fn moves_are_deterministic_and_clamped() {
        let gw = GridWorld::new(3, 4);

        // interior cell 5 = (1, 1)
        assert_eq!(gw.transitions(5, UP)[0].next_state, 1);
        assert_eq!(gw.transitions(5, DOWN)[0].next_state, 9);
        assert_eq!(gw.transitions(5, LEFT)[0].next_state, 4);
        assert_eq!(gw.transitions(5, RIGHT)[0].next_state, 6);

        // corner cell 11 = (2, 3)
        assert_eq!(gw.transitions(11, DOWN)[0].next_state, 11);
        assert_eq!(gw.transitions(11, RIGHT)[0].next_state, 11);

        for s in 1..gw.state_count() as Discrete {
            for a in gw.available_actions(s) {
                let ts = gw.transitions(s, a);
                assert_eq!(ts.len(), 1);
                assert_float_eq!(ts[0].probability, 1., abs <= 0.);
                assert_float_eq!(ts[0].reward, -1., abs <= 0.);
            }
        }
    }

    #[test]
    fn terminal_cell_absorbs() {
        let gw = GridWorld::new(3, 4);

        for a in gw.available_actions(0) {
            let ts = gw.transitions(0, a);
            assert_eq!(ts[0].next_state, 0);
            assert_float_eq!(ts[0].reward, 0., abs <= 0.);
        }
    }

    #[test]
    fn manhattan_distance() {
        let gw = GridWorld::new(3, 4);

        assert_eq!(gw.distance_to_terminal(0), 0);
        assert_eq!(gw.distance_to_terminal(3), 3);
        assert_eq!(gw.distance_to_terminal(11), 5);
    }
}
