//! Swarm state: the agent store plus run control
//!
//! The store owns exactly one population snapshot. Each step produces a new
//! snapshot and the old one is dropped.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agent::{Agent, Decision};
use super::arena::Arena;
use super::spawn::create_agents;
use super::step::{advance, all_decided};
use super::tally::Tally;
use crate::consts::*;

/// Final result of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Decision,
    pub tally: Tally,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SwarmState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub arena: Arena,
    agents: Vec<Agent>,
    agent_count: usize,
    speed: f32,
    /// Stepping gate; rendering ignores it
    pub running: bool,
    /// Set once per run, when every agent has decided
    outcome: Option<Outcome>,
    /// Steps taken in the current run
    pub step_count: u64,
    /// Incremented on every population rebuild
    pub run_index: u32,
}

impl SwarmState {
    /// Create a state with a fresh population
    pub fn new(seed: u64, agent_count: usize, speed: f32) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena: Arena::default(),
            agents: Vec::new(),
            agent_count: clamp_agent_count(agent_count),
            speed: clamp_speed(speed),
            running: false,
            outcome: None,
            step_count: 0,
            run_index: 0,
        };
        state.repopulate();
        state
    }

    /// Current population snapshot
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn tally(&self) -> Tally {
        Tally::from_agents(&self.agents)
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and rebuild the population at the current count
    pub fn reset(&mut self) {
        self.running = false;
        self.repopulate();
    }

    /// Stop and rebuild the population at a new size in one pass
    pub fn reset_with_count(&mut self, count: usize) {
        self.agent_count = clamp_agent_count(count);
        self.reset();
    }

    /// Change the population size. A change rebuilds the population and
    /// starts a new run; the running flag is left alone.
    pub fn set_agent_count(&mut self, count: usize) {
        let count = clamp_agent_count(count);
        if count != self.agent_count {
            self.agent_count = count;
            self.repopulate();
        }
    }

    /// Takes effect on the next step
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = clamp_speed(speed);
    }

    /// Advance one step, regardless of the running flag.
    ///
    /// Returns the outcome on the step where the run first completes.
    pub fn step(&mut self) -> Option<Outcome> {
        self.agents = advance(&self.agents, self.speed, &self.arena, &mut self.rng);
        self.step_count += 1;

        if self.outcome.is_some() || !all_decided(&self.agents) {
            return None;
        }

        let tally = self.tally();
        let outcome = Outcome {
            winner: tally.winner(),
            tally,
        };
        self.outcome = Some(outcome);
        self.running = false;
        log::info!(
            "Run {} finished after {} steps: {} (yes {}, no {}, abstain {})",
            self.run_index,
            self.step_count,
            outcome.winner.as_str(),
            tally.yes,
            tally.no,
            tally.abstain
        );
        Some(outcome)
    }

    /// First agent within hover range of `point`
    pub fn agent_at(&self, point: Vec2) -> Option<&Agent> {
        crate::renderer::pick_agent(&self.agents, point)
    }

    fn repopulate(&mut self) {
        self.agents = create_agents(self.agent_count, &self.arena, &mut self.rng);
        self.outcome = None;
        self.step_count = 0;
        self.run_index += 1;
        log::debug!(
            "Created {} agents (run {})",
            self.agents.len(),
            self.run_index
        );
    }
}

/// Clamp to the agent-count control range
pub fn clamp_agent_count(count: usize) -> usize {
    count.clamp(AGENT_COUNT_MIN, AGENT_COUNT_MAX)
}

/// Clamp to the speed control range (NaN falls back to the default)
pub fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        return SPEED_DEFAULT;
    }
    speed.clamp(SPEED_MIN, SPEED_MAX)
}
