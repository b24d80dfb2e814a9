//! Simulation invariants
//!
//! Property checks over random seeds, population sizes and speeds.

use proptest::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use swarm_vote::renderer::pick_agent;
use swarm_vote::sim::{
    Arena, Decision, SwarmState, advance, all_decided, choose_weighted, create_agents,
    decision_weights, resolve_decision,
};

/// RNG that returns the same word forever
struct ConstRng(u64);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.0 as u8);
    }
}

proptest! {
    #[test]
    fn creation_yields_requested_count(seed in any::<u64>(), count in 0usize..40) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let agents = create_agents(count, &Arena::default(), &mut rng);
        prop_assert_eq!(agents.len(), count);
        prop_assert!(agents.iter().all(|a| a.decision == Decision::Analyzing));
    }

    #[test]
    fn steps_stay_in_arena(
        seed in any::<u64>(),
        count in 1usize..25,
        speed in 0.0f32..50.0,
        steps in 1usize..200,
    ) {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut agents = create_agents(count, &arena, &mut rng);
        for _ in 0..steps {
            agents = advance(&agents, speed, &arena, &mut rng);
            for a in &agents {
                prop_assert!(arena.contains(a.pos), "{:?} escaped", a.pos);
            }
        }
    }

    #[test]
    fn decisions_never_revert(seed in any::<u64>(), steps in 1usize..400) {
        let arena = Arena::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut agents = create_agents(12, &arena, &mut rng);
        for _ in 0..steps {
            let next = advance(&agents, 1.0, &arena, &mut rng);
            for (before, after) in agents.iter().zip(&next) {
                if before.decision.is_terminal() {
                    prop_assert_eq!(before.decision, after.decision);
                }
            }
            agents = next;
        }
    }

    #[test]
    fn weighted_choice_matches_intervals(
        trust in 0.2f32..1.0,
        confidence in 0.4f32..1.0,
        frac in 0.0f32..1.0,
    ) {
        let w = decision_weights(trust, confidence);
        let total: f32 = w.iter().sum();
        prop_assert!(w.iter().all(|x| *x >= 0.0));
        prop_assert!(total > 0.0);

        let draw = frac * total;
        let expected = if draw < w[0] {
            Decision::Yes
        } else if draw < w[0] + w[1] {
            Decision::No
        } else {
            Decision::Abstain
        };
        prop_assert_eq!(choose_weighted(w, draw), expected);
    }

    #[test]
    fn pointer_on_agent_hits_it_or_earlier(seed in any::<u64>(), count in 1usize..20) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let agents = create_agents(count, &Arena::default(), &mut rng);
        for agent in &agents {
            let hit = pick_agent(&agents, agent.pos);
            prop_assert!(hit.is_some());
            prop_assert!(hit.map(|h| h.id <= agent.id).unwrap_or(false));
        }
    }

    #[test]
    fn reset_keeps_shape(seed in any::<u64>(), count in 6usize..=20) {
        let mut state = SwarmState::new(seed, count, 1.0);
        state.start();
        for _ in 0..50 {
            state.step();
        }
        state.reset();
        prop_assert_eq!(state.agents().len(), count);
        prop_assert!(state.agents().iter().all(|a| a.is_analyzing()));
        prop_assert!(state.outcome().is_none());
    }
}

#[test]
fn zero_source_decides_everyone_yes() {
    // A zero word passes the decision roll and draws the bottom of [0, sum)
    let arena = Arena::default();
    let mut seed_rng = Pcg32::seed_from_u64(8);
    let agents = create_agents(10, &arena, &mut seed_rng);

    let next = advance(&agents, 1.0, &arena, &mut ConstRng(0));
    assert!(all_decided(&next));
    assert!(next.iter().all(|a| a.decision == Decision::Yes));
}

#[test]
fn saturated_source_never_decides() {
    let arena = Arena::default();
    let mut seed_rng = Pcg32::seed_from_u64(8);
    let mut agents = create_agents(10, &arena, &mut seed_rng);
    for _ in 0..100 {
        agents = advance(&agents, 1.0, &arena, &mut ConstRng(u64::MAX));
    }
    assert!(agents.iter().all(|a| a.is_analyzing()));
}

#[test]
fn top_draw_with_full_confidence_picks_no() {
    // Abstain has zero weight at confidence 1.0, so the top of the range is No
    let decision = resolve_decision(0.9, 1.0, &mut ConstRng(u64::MAX));
    assert_eq!(decision, Decision::No);
}
