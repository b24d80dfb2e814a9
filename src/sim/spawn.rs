//! Population creation
//!
//! Builds a fresh agent population with randomized traits and cosmetic
//! connections. Nothing here touches existing state.

use glam::Vec2;
use rand::Rng;
use rand::seq::index;

use super::agent::{Agent, AgentId};
use super::arena::Arena;
use crate::consts::*;

/// Create `count` agents spread over the arena's spawn area
pub fn create_agents<R: Rng + ?Sized>(count: usize, arena: &Arena, rng: &mut R) -> Vec<Agent> {
    let lo = arena.spawn_min();
    let hi = arena.spawn_max();

    let mut agents: Vec<Agent> = (0..count)
        .map(|i| {
            let pos = Vec2::new(sample_axis(rng, lo.x, hi.x), sample_axis(rng, lo.y, hi.y));
            let vel = Vec2::new(
                rng.random_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED),
                rng.random_range(-MAX_SPAWN_SPEED..MAX_SPAWN_SPEED),
            );
            let trust = rng.random_range(TRUST_MIN..TRUST_MAX);
            let confidence = rng.random_range(CONFIDENCE_MIN..CONFIDENCE_MAX);
            Agent::new(AgentId(i as u32), pos, vel, trust, confidence)
        })
        .collect();

    wire_connections(&mut agents, rng);
    agents
}

/// Uniform in [lo, hi), collapsing to `lo` for degenerate arenas
fn sample_axis<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Give each agent 1..=3 distinct outgoing connections to other agents
fn wire_connections<R: Rng + ?Sized>(agents: &mut [Agent], rng: &mut R) {
    let n = agents.len();
    if n < 2 {
        return;
    }
    let others = n - 1;

    for i in 0..n {
        let wanted = rng.random_range(MIN_CONNECTIONS..=MAX_CONNECTIONS).min(others);
        // Sample over the other agents' slots, then skip past our own index
        let picks = index::sample(rng, others, wanted);
        for j in picks {
            let target = if j < i { j } else { j + 1 };
            let target_id = agents[target].id;
            agents[i].connect(target_id);
        }
    }
}
