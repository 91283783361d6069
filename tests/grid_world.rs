extern crate float_eq;
extern crate rldp;

use float_eq::*;
use rldp::envs::grid_world::*;
use rldp::mdps::solvers::policy_iteration::*;
use rldp::mdps::{Mdp, MdpSolver};
use rldp::*;
use std::rc::Rc;

const GAMMA: Continous = 0.9;
const THETA: Continous = 1e-3;

fn closed_form_value(d: usize) -> Continous {
    -(1. - GAMMA.powi(d as i32)) / (1. - GAMMA)
}

#[test]
fn gridworld_4x4_matches_the_closed_form_solution() {
    let gw = Rc::new(GridWorld::new(4, 4));
    let (v, pi) = policy_iteration(Rc::clone(&gw) as Rc<dyn Mdp>, GAMMA, THETA).unwrap();

    assert_eq!(v.len(), 16);
    assert_eq!(pi.len(), 16);
    assert_float_eq!(v[0], 0., abs <= 0.);
    assert_eq!(pi[0], UP);

    for s in 1..16 {
        let d = gw.distance_to_terminal(s as Discrete);
        assert_float_eq!(v[s], closed_form_value(d), abs <= THETA);

        // every policy step closes in on the terminal cell
        let next = gw.transitions(s as Discrete, pi[s])[0].next_state;
        assert_eq!(gw.distance_to_terminal(next), d - 1);
    }
}

#[test]
fn gridworld_solution_is_greedy_stable() {
    let gw = Rc::new(GridWorld::new(4, 4));
    let pi = &mut PolicyIteration::new(Rc::clone(&gw) as Rc<dyn Mdp>, GAMMA).unwrap();
    let ret = pi.exec(THETA, None).unwrap();
    assert!(ret.0);

    for s in 1..16 {
        let chosen = pi.q_star(s, pi.pi_star(s).unwrap()).unwrap();
        for a in gw.available_actions(s) {
            assert!(pi.q_star(s, a).unwrap() <= chosen + 1e-9);
        }
    }
}

#[test]
fn a_wider_grid_converges_too() {
    let gw = Rc::new(GridWorld::new(3, 6));
    let (v, _) = policy_iteration(Rc::clone(&gw) as Rc<dyn Mdp>, GAMMA, THETA).unwrap();

    for s in 1..gw.state_count() {
        let d = gw.distance_to_terminal(s as Discrete);
        assert_float_eq!(v[s], closed_form_value(d), abs <= THETA);
    }
}
