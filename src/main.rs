use itertools::Itertools;
use rldp::envs::grid_world::GridWorld;
use rldp::mdps::solvers::policy_iteration::*;
use rldp::mdps::{simulate, Mdp, MdpSolver, MdpSolverPolicy};
use rldp::*;
use std::rc::Rc;

fn main() -> Result<()> {
    env_logger::init();

    let mdp = Rc::new(GridWorld::new(4, 4)) as Rc<dyn Mdp>;
    let theta = 1e-3;
    let pi = &mut PolicyIteration::new(Rc::clone(&mdp), 0.9)?;
    let ret = pi.exec(theta, None)?;
    println!(
        "Theta: {}, Policy stable: {}, Number of iterations: {}",
        theta, ret.0, ret.1
    );

    let v_star = (0..mdp.state_count())
        .map(|s| pi.v_star(s as Discrete))
        .collect::<Vec<_>>();
    println!("Values: [{}]", v_star.iter().map(|v| format!("{v:.3}")).join(", "));
    let pi_star = (0..mdp.state_count())
        .map(|s| pi.pi_star(s as Discrete).unwrap())
        .collect::<Vec<_>>();
    println!("Policy: [{}]", pi_star.iter().join(", "));

    let solver = Rc::new(pi.clone()) as Rc<dyn MdpSolver<bool>>;
    let policy = MdpSolverPolicy { mdp_solver: solver };
    let start = (mdp.state_count() - 1) as Discrete;
    let ep = simulate::rollout(&*mdp, &policy, start, 100, 2718);
    println!("Episode: {}", serde_json::to_string(&ep).unwrap());

    Ok(())
}
