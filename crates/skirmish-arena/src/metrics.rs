//! Cumulative arbitration metrics for an arena.
//!
//! [`ArenaMetrics`] is a point-in-time copy of counters the arena bumps
//! as it arbitrates, useful for telemetry and for asserting on behaviour
//! in tests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of an arena's cumulative counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaMetrics {
    /// Successful registrations.
    pub registrations: u64,
    /// Registrations refused because the agent was already present.
    pub duplicate_registrations: u64,
    /// Registrations rolled back because the agent declined.
    pub declined_registrations: u64,
    /// Movement requests the boundary policy accepted.
    pub moves_accepted: u64,
    /// Movement requests the boundary policy rejected (one penalty each).
    pub moves_rejected: u64,
    /// Heading changes applied.
    pub heading_changes: u64,
    /// Requests issued on behalf of agents absent from the registry.
    pub unregistered_requests: u64,
    /// Agents withdrawn from the arena.
    pub withdrawals: u64,
}

/// Live counters behind [`ArenaMetrics`].
#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub(crate) registrations: AtomicU64,
    pub(crate) duplicate_registrations: AtomicU64,
    pub(crate) declined_registrations: AtomicU64,
    pub(crate) moves_accepted: AtomicU64,
    pub(crate) moves_rejected: AtomicU64,
    pub(crate) heading_changes: AtomicU64,
    pub(crate) unregistered_requests: AtomicU64,
    pub(crate) withdrawals: AtomicU64,
}

impl Counters {
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> ArenaMetrics {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        ArenaMetrics {
            registrations: load(&self.registrations),
            duplicate_registrations: load(&self.duplicate_registrations),
            declined_registrations: load(&self.declined_registrations),
            moves_accepted: load(&self.moves_accepted),
            moves_rejected: load(&self.moves_rejected),
            heading_changes: load(&self.heading_changes),
            unregistered_requests: load(&self.unregistered_requests),
            withdrawals: load(&self.withdrawals),
        }
    }
}
