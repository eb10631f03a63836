//! Agent identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`AgentId`] allocation.
static AGENT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for an agent.
///
/// Allocated from a monotonic atomic counter via [`AgentId::next`]. Two
/// agents always have different IDs, even if their state is identical,
/// so the arena keys its registry by instance rather than by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(u64);

impl AgentId {
    /// Allocate a fresh, unique agent ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(AGENT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}
