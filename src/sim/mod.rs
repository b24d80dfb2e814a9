//! Swarm simulation module
//!
//! All voting/motion logic lives here. No rendering or platform dependencies:
//! - Randomness comes from one seeded `Pcg32` owned by `SwarmState`
//! - Stable iteration order (by agent index)
//! - Steps produce new snapshots rather than mutating in place

pub mod agent;
pub mod arena;
pub mod spawn;
pub mod state;
pub mod step;
pub mod tally;
pub mod tick;

pub use agent::{AGENT_PALETTE, Agent, AgentId, Decision};
pub use arena::Arena;
pub use spawn::create_agents;
pub use state::{Outcome, SwarmState, clamp_agent_count, clamp_speed};
pub use step::{advance, all_decided, choose_weighted, decision_weights, resolve_decision};
pub use tally::{Standing, Tally, tally};
pub use tick::{SwarmEvent, TickInput, tick};
