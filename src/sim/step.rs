//! Per-frame agent stepping
//!
//! `advance` is a pure transform: it reads the current population and returns
//! the next one. The caller swaps the result in.

use rand::Rng;

use super::agent::{Agent, Decision};
use super::arena::Arena;
use crate::consts::DECISION_CHANCE;

/// Advance every agent by one step
pub fn advance<R: Rng + ?Sized>(
    agents: &[Agent],
    speed: f32,
    arena: &Arena,
    rng: &mut R,
) -> Vec<Agent> {
    agents
        .iter()
        .map(|agent| step_agent(agent, speed, arena, rng))
        .collect()
}

fn step_agent<R: Rng + ?Sized>(agent: &Agent, speed: f32, arena: &Arena, rng: &mut R) -> Agent {
    let mut next = agent.clone();

    next.pos += next.vel * speed;

    // One-shot reflection per axis, no continuous collision solve
    let (lo, hi) = (arena.min(), arena.max());
    if next.pos.x <= lo.x || next.pos.x >= hi.x {
        next.vel.x = -next.vel.x;
    }
    if next.pos.y <= lo.y || next.pos.y >= hi.y {
        next.vel.y = -next.vel.y;
    }
    next.pos = arena.clamp(next.pos);

    // Fixed chance per step, not per unit time
    if next.is_analyzing() && rng.random_bool(DECISION_CHANCE) {
        let decision = resolve_decision(next.trust_score, next.confidence, rng);
        next.decide(decision);
    }

    next
}

/// Choice weights for (Yes, No, Abstain)
pub fn decision_weights(trust_score: f32, confidence: f32) -> [f32; 3] {
    [
        trust_score * confidence,
        (1.0 - trust_score) * confidence,
        1.0 - confidence,
    ]
}

/// Draw a terminal decision weighted by trust and confidence
pub fn resolve_decision<R: Rng + ?Sized>(trust_score: f32, confidence: f32, rng: &mut R) -> Decision {
    let weights = decision_weights(trust_score, confidence);
    let total: f32 = weights.iter().sum();
    let draw = rng.random::<f32>() * total;
    choose_weighted(weights, draw)
}

/// Pick the option whose cumulative interval `[prev, cumulative)` holds `draw`.
///
/// Options are tested in the order Yes, No, Abstain. A draw sitting exactly on
/// a boundary belongs to the next option.
pub fn choose_weighted(weights: [f32; 3], draw: f32) -> Decision {
    let mut cumulative = 0.0;
    for (decision, weight) in Decision::TERMINAL.into_iter().zip(weights) {
        cumulative += weight;
        if draw < cumulative {
            return decision;
        }
    }

    // Rounding can leave draw == total; fall back to the last live option
    Decision::TERMINAL
        .into_iter()
        .zip(weights)
        .rev()
        .find(|(_, weight)| *weight > 0.0)
        .map(|(decision, _)| decision)
        .unwrap_or(Decision::Abstain)
}

/// True once no agent is still analyzing
pub fn all_decided(agents: &[Agent]) -> bool {
    agents.iter().all(|a| a.decision.is_terminal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::AgentId;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn agent_at(pos: Vec2, vel: Vec2) -> Agent {
        Agent::new(AgentId(0), pos, vel, 0.5, 0.7)
    }

    #[test]
    fn test_position_integrates_with_speed() {
        let mut rng = Pcg32::seed_from_u64(1);
        let agents = vec![agent_at(Vec2::new(100.0, 100.0), Vec2::new(1.0, -0.5))];
        let next = advance(&agents, 2.0, &Arena::default(), &mut rng);
        assert_eq!(next[0].pos, Vec2::new(102.0, 99.0));
        assert_eq!(next[0].vel, Vec2::new(1.0, -0.5));
        // Input untouched
        assert_eq!(agents[0].pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_reflects_on_each_axis_independently() {
        let mut rng = Pcg32::seed_from_u64(1);
        let agents = vec![agent_at(Vec2::new(674.5, 200.0), Vec2::new(1.0, 1.0))];
        let next = advance(&agents, 1.0, &Arena::default(), &mut rng);
        assert_eq!(next[0].vel, Vec2::new(-1.0, 1.0));
        assert_eq!(next[0].pos.x, 675.0);
    }

    #[test]
    fn test_touching_low_bound_reflects() {
        let mut rng = Pcg32::seed_from_u64(1);
        let agents = vec![agent_at(Vec2::new(100.0, 26.0), Vec2::new(0.0, -1.0))];
        let next = advance(&agents, 1.0, &Arena::default(), &mut rng);
        assert_eq!(next[0].pos.y, 25.0);
        assert_eq!(next[0].vel.y, 1.0);
    }

    #[test]
    fn test_extreme_speed_is_clamped() {
        let mut rng = Pcg32::seed_from_u64(1);
        let arena = Arena::default();
        let agents = vec![agent_at(Vec2::new(300.0, 300.0), Vec2::new(1.0, -1.0))];
        let next = advance(&agents, 10_000.0, &arena, &mut rng);
        assert!(arena.contains(next[0].pos));
        assert_eq!(next[0].pos, Vec2::new(675.0, 25.0));
    }

    #[test]
    fn test_zero_velocity_stays_put() {
        let mut rng = Pcg32::seed_from_u64(1);
        let agents = vec![agent_at(Vec2::new(300.0, 300.0), Vec2::ZERO)];
        let next = advance(&agents, 3.0, &Arena::default(), &mut rng);
        assert_eq!(next[0].pos, Vec2::new(300.0, 300.0));
    }

    #[test]
    fn test_weights() {
        let w = decision_weights(0.9, 1.0);
        assert!((w[0] - 0.9).abs() < 1e-6);
        assert!((w[1] - 0.1).abs() < 1e-6);
        assert_eq!(w[2], 0.0);
    }

    #[test]
    fn test_choose_weighted_boundaries() {
        let w = decision_weights(0.9, 1.0);
        assert_eq!(choose_weighted(w, 0.0), Decision::Yes);
        assert_eq!(choose_weighted(w, 0.899), Decision::Yes);
        // Exactly on the Yes boundary belongs to No
        assert_eq!(choose_weighted(w, w[0]), Decision::No);
        // Top of [0, sum) stays No since Abstain has no weight
        let total: f32 = w.iter().sum();
        assert_eq!(choose_weighted(w, total - 1e-6), Decision::No);
    }

    #[test]
    fn test_choose_weighted_abstain_band() {
        let w = decision_weights(0.5, 0.5); // [0.25, 0.25, 0.5]
        assert_eq!(choose_weighted(w, 0.3), Decision::No);
        assert_eq!(choose_weighted(w, 0.5), Decision::Abstain);
        assert_eq!(choose_weighted(w, 0.99), Decision::Abstain);
    }

    #[test]
    fn test_choose_weighted_draw_at_total_falls_back() {
        let w = decision_weights(0.9, 1.0);
        let total: f32 = w.iter().sum();
        assert_eq!(choose_weighted(w, total), Decision::No);
    }

    #[test]
    fn test_resolve_never_analyzing() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..1000 {
            let d = resolve_decision(0.2, 0.4, &mut rng);
            assert!(d.is_terminal());
        }
    }

    #[test]
    fn test_decision_chance_per_step() {
        // One step over many fresh agents: about 1% should decide
        let mut rng = Pcg32::seed_from_u64(2024);
        let arena = Arena::default();
        let trials = 20_000;
        let agents: Vec<Agent> = (0..trials)
            .map(|_| agent_at(Vec2::new(300.0, 300.0), Vec2::ZERO))
            .collect();
        let next = advance(&agents, 1.0, &arena, &mut rng);
        let decided = next.iter().filter(|a| a.decision.is_terminal()).count();
        let rate = decided as f64 / trials as f64;
        assert!(
            (0.007..=0.013).contains(&rate),
            "decision rate {} outside expected band",
            rate
        );
    }

    #[test]
    fn test_decisions_are_monotone() {
        let mut rng = Pcg32::seed_from_u64(11);
        let arena = Arena::default();
        let mut agents = crate::sim::create_agents(12, &arena, &mut rng);
        let mut seen: Vec<Option<Decision>> = vec![None; agents.len()];
        for _ in 0..2000 {
            agents = advance(&agents, 1.0, &arena, &mut rng);
            for (slot, a) in seen.iter_mut().zip(&agents) {
                match *slot {
                    Some(d) => assert_eq!(d, a.decision),
                    None if a.decision.is_terminal() => *slot = Some(a.decision),
                    None => {}
                }
            }
        }
        assert!(all_decided(&agents));
    }
}
