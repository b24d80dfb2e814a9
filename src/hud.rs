//! Text shown around the canvas: tooltip, live results, banner, control labels

use crate::sim::{Agent, AgentId, Decision, Outcome, Standing, Tally};

/// Hover tooltip contents
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDetail {
    pub id: AgentId,
    pub trust_score: f32,
    pub confidence: f32,
    pub decision: Decision,
    pub connection_count: usize,
}

impl AgentDetail {
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            trust_score: agent.trust_score,
            confidence: agent.confidence,
            decision: agent.decision,
            connection_count: agent.connections.len(),
        }
    }

    /// Tooltip lines, top to bottom
    pub fn lines(&self) -> [String; 5] {
        [
            self.id.to_string(),
            format!("Trust Score: {}", percent(self.trust_score)),
            format!("Decision: {}", decision_label(self.decision)),
            format!("Confidence: {}", percent(self.confidence)),
            format!("Connections: {}", self.connection_count),
        ]
    }
}

/// Whole-number percentage, e.g. 0.456 -> "46%"
pub fn percent(value: f32) -> String {
    format!("{:.0}%", value * 100.0)
}

/// Upper-case decision label
pub fn decision_label(decision: Decision) -> String {
    decision.as_str().to_uppercase()
}

pub fn standing_label(standing: Standing) -> &'static str {
    match standing {
        Standing::Leading => "Proposal Leading",
        Standing::Failing => "Proposal Failing",
        Standing::Tied => "Tied Vote",
    }
}

/// Live results rows: (label, count)
pub fn result_rows(tally: &Tally) -> [(&'static str, usize); 4] {
    [
        ("Yes", tally.yes),
        ("No", tally.no),
        ("Abstain", tally.abstain),
        ("Analyzing", tally.analyzing),
    ]
}

/// Banner shown once a run finishes
pub fn outcome_banner(outcome: Option<&Outcome>) -> Option<String> {
    outcome.map(|o| format!("Final Decision: {}", decision_label(o.winner)))
}

pub fn run_button_label(running: bool) -> &'static str {
    if running { "Pause" } else { "Start" }
}

/// Speed slider label, e.g. "1.5x"
pub fn speed_label(speed: f32) -> String {
    format!("{}x", speed)
}

/// Last value pushed to a DOM element, so unchanged frames skip the write
#[derive(Debug, Clone)]
pub struct Shown<T> {
    last: Option<T>,
}

impl<T> Default for Shown<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq> Shown<T> {
    /// Record `next`; true when it differs from what is on screen
    pub fn update(&mut self, next: T) -> bool {
        if self.last.as_ref() == Some(&next) {
            return false;
        }
        self.last = Some(next);
        true
    }
}
