use crate::common::defs::*;
use crate::mdps::*;
use rand::distributions::WeightedIndex;
use rand::prelude::*;

/// Walks the MDP from `start` under `policy`, sampling each successor
/// from the full transition distribution. The walk ends on absorption
/// into state 0 or after `max_steps` transitions, whichever is first.
pub fn rollout(
    mdp: &dyn Mdp,
    policy: &dyn Policy,
    start: Discrete,
    max_steps: usize,
    seed: u64,
) -> Vec<EpisodeEvent> {
    let rng = &mut StdRng::seed_from_u64(seed);

    let mut ep = vec![EpisodeEvent { s: start, r: 0. }];
    let mut s = start;
    for _ in 0..max_steps {
        if s == 0 {
            break;
        }

        let ts = mdp.transitions(s, policy.policy(s));
        let dist = WeightedIndex::new(ts.iter().map(|t| t.probability)).unwrap();
        let next = &ts[dist.sample(rng)];
        ep.push(EpisodeEvent {
            s: next.next_state,
            r: next.reward,
        });

        s = next.next_state;
    }

    ep
}
