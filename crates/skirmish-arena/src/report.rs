//! Per-agent battle reports.

use skirmish_core::{AgentId, Location};
use std::fmt;

/// An agent's standing in the arena: where it is and how often it has
/// been penalised.
///
/// The arena owns every report. Callers only ever see clones, so a report
/// obtained from [`Arena::battle_report`](crate::Arena::battle_report) is
/// a snapshot and does not track later moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleReport {
    agent: AgentId,
    current_location: Location,
    penalties: u32,
}

impl BattleReport {
    pub(crate) fn new(agent: AgentId, initial_location: Location) -> Self {
        Self {
            agent,
            current_location: initial_location,
            penalties: 0,
        }
    }

    /// The agent this report belongs to.
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// Last location the arena approved.
    pub fn current_location(&self) -> Location {
        self.current_location
    }

    /// Number of rejected moves so far.
    pub fn penalties(&self) -> u32 {
        self.penalties
    }

    pub(crate) fn update_location(&mut self, location: Location) {
        self.current_location = location;
    }

    /// Returns the new penalty total.
    pub(crate) fn record_penalty(&mut self) -> u32 {
        self.penalties = self.penalties.saturating_add(1);
        self.penalties
    }
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - penalties: {}",
            self.agent, self.current_location, self.penalties
        )
    }
}
