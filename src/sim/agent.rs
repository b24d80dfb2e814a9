//! Agent entity and decision types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{AGENT_BASE_RADIUS, AGENT_TRUST_RADIUS};

/// Stable agent identifier (unique within a run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u32);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agent-{}", self.0)
    }
}

/// An agent's vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Decision {
    /// Still undecided
    #[default]
    Analyzing,
    Yes,
    No,
    Abstain,
}

impl Decision {
    /// Terminal decisions in tie-break order
    pub const TERMINAL: [Decision; 3] = [Decision::Yes, Decision::No, Decision::Abstain];

    pub fn is_terminal(&self) -> bool {
        *self != Decision::Analyzing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Analyzing => "analyzing",
            Decision::Yes => "yes",
            Decision::No => "no",
            Decision::Abstain => "abstain",
        }
    }
}

/// Fixed agent body palette, assigned by creation index
pub const AGENT_PALETTE: [[f32; 4]; 6] = [
    [0.0, 0.824, 1.0, 1.0],   // #00D2FF
    [0.545, 0.361, 0.965, 1.0], // #8B5CF6
    [0.961, 0.620, 0.043, 1.0], // #F59E0B
    [0.937, 0.267, 0.267, 1.0], // #EF4444
    [0.063, 0.725, 0.506, 1.0], // #10B981
    [0.925, 0.282, 0.600, 1.0], // #EC4899
];

/// A simulated agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub pos: Vec2,
    pub vel: Vec2,
    /// In [0.2, 1.0), fixed at creation
    pub trust_score: f32,
    /// In [0.4, 1.0), fixed at creation
    pub confidence: f32,
    pub decision: Decision,
    /// Outgoing, cosmetic only
    pub connections: Vec<AgentId>,
    pub color: [f32; 4],
}

impl Agent {
    pub fn new(id: AgentId, pos: Vec2, vel: Vec2, trust_score: f32, confidence: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            trust_score,
            confidence,
            decision: Decision::Analyzing,
            connections: Vec::new(),
            color: AGENT_PALETTE[id.0 as usize % AGENT_PALETTE.len()],
        }
    }

    /// Body radius in pixels (grows with trust)
    pub fn radius(&self) -> f32 {
        AGENT_BASE_RADIUS + self.trust_score * AGENT_TRUST_RADIUS
    }

    pub fn is_analyzing(&self) -> bool {
        self.decision == Decision::Analyzing
    }

    /// Record an outgoing connection, ignoring self and duplicates
    pub fn connect(&mut self, other: AgentId) {
        if other != self.id && !self.connections.contains(&other) {
            self.connections.push(other);
        }
    }

    /// Settle on a terminal decision. No-op once decided.
    pub fn decide(&mut self, decision: Decision) {
        if self.is_analyzing() && decision.is_terminal() {
            self.decision = decision;
        }
    }
}
