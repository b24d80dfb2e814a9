//! Vote counting and outcome selection

use serde::{Deserialize, Serialize};

use super::agent::{Agent, Decision};

/// Count of agents per decision kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub yes: usize,
    pub no: usize,
    pub abstain: usize,
    pub analyzing: usize,
}

/// Yes-vs-No standing while a vote is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Leading,
    Failing,
    Tied,
}

impl Tally {
    pub fn from_agents(agents: &[Agent]) -> Self {
        let mut tally = Self::default();
        for agent in agents {
            tally.record(agent.decision);
        }
        tally
    }

    pub fn record(&mut self, decision: Decision) {
        match decision {
            Decision::Yes => self.yes += 1,
            Decision::No => self.no += 1,
            Decision::Abstain => self.abstain += 1,
            Decision::Analyzing => self.analyzing += 1,
        }
    }

    pub fn count(&self, decision: Decision) -> usize {
        match decision {
            Decision::Yes => self.yes,
            Decision::No => self.no,
            Decision::Abstain => self.abstain,
            Decision::Analyzing => self.analyzing,
        }
    }

    pub fn total(&self) -> usize {
        self.yes + self.no + self.abstain + self.analyzing
    }

    /// Decision with the most votes.
    ///
    /// Ties go to the first kind in Yes, No, Abstain order.
    pub fn winner(&self) -> Decision {
        let mut best = Decision::Yes;
        for decision in Decision::TERMINAL {
            if self.count(decision) > self.count(best) {
                best = decision;
            }
        }
        best
    }

    pub fn standing(&self) -> Standing {
        use std::cmp::Ordering;
        match self.yes.cmp(&self.no) {
            Ordering::Greater => Standing::Leading,
            Ordering::Less => Standing::Failing,
            Ordering::Equal => Standing::Tied,
        }
    }
}

/// Frequency count of decisions across a population
pub fn tally(agents: &[Agent]) -> Tally {
    Tally::from_agents(agents)
}
