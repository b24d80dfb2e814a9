//! Proposals the swarm "votes" on
//!
//! Purely display text; the simulation never reads it.

pub const PRESET_PROPOSALS: [&str; 4] = [
    "Should the protocol increase the minimum stake requirement from 100 to 500 tokens?",
    "Should agents be allowed to auto-delegate votes?",
    "Should we switch to a quadratic voting system?",
    "Should the treasury be diversified into real-world assets?",
];

/// Index of `text` among the presets, if it is one
pub fn preset_index(text: &str) -> Option<usize> {
    PRESET_PROPOSALS.iter().position(|p| *p == text.trim())
}
