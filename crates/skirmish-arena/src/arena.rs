//! The arena: registry owner and movement arbiter.
//!
//! # Locking
//!
//! The registry maps each [`AgentId`] to its own `Mutex<BattleReport>`.
//! Registration holds the registry lock only while checking for and
//! reserving the agent's slot, then releases it before asking the agent
//! to accept, so the agent may call straight back into the arena from
//! its acceptance hook. Requests hold the registry lock just long enough
//! to clone the report handle and then serialize on that one report:
//! concurrent requests from the same agent are ordered, requests from
//! different agents never contend.

use crate::boundary::BoundaryPolicy;
use crate::channel::Channel;
use crate::config::ArenaConfig;
use crate::metrics::{ArenaMetrics, Counters};
use crate::report::BattleReport;
use indexmap::IndexMap;
use skirmish_core::{
    AgentId, ConfigError, Heading, Location, Receipt, RegistrationError, Rejection,
};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

type ReportCell = Arc<Mutex<BattleReport>>;

/// Something that can be entered into an arena.
///
/// During [`Arena::register`] the arena reserves a report for the agent
/// and then calls [`accept_arena_status`](Contender::accept_arena_status)
/// with a fresh [`Channel`]. Returning `false` rolls the reservation back.
pub trait Contender<'a> {
    /// Identity the arena files this contender under.
    fn agent_id(&self) -> AgentId;

    /// Take up the channel and starting location, or refuse.
    ///
    /// Called without any arena lock held; the implementation may use
    /// `channel` immediately.
    fn accept_arena_status(&mut self, channel: Channel<'a>, starting_location: Location) -> bool;
}

/// Authoritative coordinator of agent positions and movement legality.
///
/// # Examples
///
/// ```
/// use skirmish_arena::{Arena, ArenaConfig, Channel, Contender};
/// use skirmish_core::{AgentId, Heading, Location};
///
/// struct Probe<'a> {
///     id: AgentId,
///     channel: Option<Channel<'a>>,
/// }
///
/// impl<'a> Contender<'a> for Probe<'a> {
///     fn agent_id(&self) -> AgentId {
///         self.id
///     }
///     fn accept_arena_status(&mut self, channel: Channel<'a>, _start: Location) -> bool {
///         self.channel.replace(channel).is_none()
///     }
/// }
///
/// let arena = Arena::new(ArenaConfig::new(5, 5)).unwrap();
/// let mut probe = Probe { id: AgentId::next(), channel: None };
/// arena.register(&mut probe, Location::new(Heading::North, 0, 4)).unwrap();
///
/// let channel = probe.channel.as_ref().unwrap();
/// assert!(!channel.request_move(Location::new(Heading::North, 0, 5)).accepted);
/// assert_eq!(arena.battle_report(probe.id).unwrap().penalties(), 1);
/// ```
pub struct Arena {
    policy: Box<dyn BoundaryPolicy>,
    registry: Mutex<IndexMap<AgentId, ReportCell>>,
    counters: Counters,
}

impl Arena {
    /// Build a rectangular arena from a validated config.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        let boundary = config.boundary()?;
        Ok(Self::with_policy(Box::new(boundary)))
    }

    /// Build an arena around an arbitrary boundary policy.
    pub fn with_policy(policy: Box<dyn BoundaryPolicy>) -> Self {
        Self {
            policy,
            registry: Mutex::new(IndexMap::new()),
            counters: Counters::default(),
        }
    }

    /// The boundary policy movement requests are judged against.
    pub fn policy(&self) -> &dyn BoundaryPolicy {
        self.policy.as_ref()
    }

    /// Enter `contender` into the arena at `starting_location`.
    ///
    /// Fails with [`RegistrationError::DuplicateRegistration`] and changes
    /// nothing if the agent is already registered here. Otherwise a report
    /// is reserved, the registry lock is dropped, and the contender is
    /// offered a [`Channel`]. If it declines, the reservation is removed
    /// and [`RegistrationError::Declined`] is returned. A panic in the
    /// contender's acceptance hook also removes the reservation before it
    /// unwinds out of this call.
    pub fn register<'a, C>(
        &'a self,
        contender: &mut C,
        starting_location: Location,
    ) -> Result<(), RegistrationError>
    where
        C: Contender<'a> + ?Sized,
    {
        let agent = contender.agent_id();

        let reserved = {
            let mut registry = self.registry();
            if registry.contains_key(&agent) {
                Counters::bump(&self.counters.duplicate_registrations);
                debug!(%agent, "duplicate registration refused");
                return Err(RegistrationError::DuplicateRegistration);
            }
            let cell = Arc::new(Mutex::new(BattleReport::new(agent, starting_location)));
            registry.insert(agent, Arc::clone(&cell));
            Reservation {
                arena: self,
                agent,
                cell,
                armed: true,
            }
        };

        if !contender.accept_arena_status(Channel::new(self, agent), starting_location) {
            drop(reserved);
            Counters::bump(&self.counters.declined_registrations);
            debug!(%agent, "agent declined arena status, reservation rolled back");
            return Err(RegistrationError::Declined);
        }
        reserved.keep();

        Counters::bump(&self.counters.registrations);
        info!(%agent, start = %starting_location, "agent registered");
        Ok(())
    }

    /// Arbitrate a move of `agent` to `desired`.
    ///
    /// If the boundary policy accepts the move from the agent's current
    /// recorded location, the report is updated and the receipt carries
    /// `desired`. Otherwise the agent is penalised, stays put, and the
    /// receipt carries its unchanged location with
    /// [`Rejection::OutOfBounds`]. Unknown agents get
    /// [`Rejection::NotRegistered`] and no location.
    pub fn request_move(&self, agent: AgentId, desired: Location) -> Receipt {
        let Some(cell) = self.report_cell(agent) else {
            return self.unregistered(agent);
        };
        let mut report = lock(&cell);
        let current = report.current_location();

        if self.policy.is_legal_move(&current, &desired) {
            report.update_location(desired);
            Counters::bump(&self.counters.moves_accepted);
            Receipt::accept(desired)
        } else {
            let penalties = report.record_penalty();
            Counters::bump(&self.counters.moves_rejected);
            debug!(%agent, from = %current, to = %desired, penalties, "move rejected");
            Receipt::reject(Rejection::OutOfBounds, Some(current))
        }
    }

    /// Turn `agent` to face `heading` without moving it.
    ///
    /// Never consults the boundary policy and never penalises.
    pub fn request_heading(&self, agent: AgentId, heading: Heading) -> Receipt {
        let Some(cell) = self.report_cell(agent) else {
            return self.unregistered(agent);
        };
        let mut report = lock(&cell);
        let turned = report.current_location().with_heading(heading);
        report.update_location(turned);
        Counters::bump(&self.counters.heading_changes);
        Receipt::accept(turned)
    }

    /// Snapshot of `agent`'s report, or `None` if it is not registered.
    pub fn battle_report(&self, agent: AgentId) -> Option<BattleReport> {
        self.report_cell(agent).map(|cell| lock(&cell).clone())
    }

    /// Remove `agent` from the arena and return its final report.
    ///
    /// Later requests on the agent's channel are answered with
    /// [`Rejection::NotRegistered`]. The agent keeps its channel, so it
    /// still cannot register with another arena.
    pub fn withdraw(&self, agent: AgentId) -> Option<BattleReport> {
        let cell = self.registry().shift_remove(&agent)?;
        let report = lock(&cell).clone();
        Counters::bump(&self.counters.withdrawals);
        info!(
            %agent,
            location = %report.current_location(),
            penalties = report.penalties(),
            "agent withdrawn"
        );
        Some(report)
    }

    /// Snapshots of every report, in registration order.
    pub fn standings(&self) -> Vec<BattleReport> {
        let cells: Vec<ReportCell> = self.registry().values().cloned().collect();
        cells.iter().map(|cell| lock(cell).clone()).collect()
    }

    /// Whether `agent` currently has a report here.
    pub fn contains(&self, agent: AgentId) -> bool {
        self.registry().contains_key(&agent)
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.registry().len()
    }

    /// Whether no agent is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current values of the arena's cumulative counters.
    pub fn metrics(&self) -> ArenaMetrics {
        self.counters.snapshot()
    }

    fn registry(&self) -> MutexGuard<'_, IndexMap<AgentId, ReportCell>> {
        lock(&self.registry)
    }

    fn report_cell(&self, agent: AgentId) -> Option<ReportCell> {
        self.registry().get(&agent).cloned()
    }

    fn unregistered(&self, agent: AgentId) -> Receipt {
        Counters::bump(&self.counters.unregistered_requests);
        debug!(%agent, "request from unregistered agent");
        Receipt::not_registered()
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("agents", &self.len())
            .field("metrics", &self.metrics())
            .finish_non_exhaustive()
    }
}

/// A report slot held during the acceptance hook.
///
/// Dropped while still armed (a decline, or a panicking hook), it removes
/// the slot again, but only if the slot is still the one it reserved.
struct Reservation<'r> {
    arena: &'r Arena,
    agent: AgentId,
    cell: ReportCell,
    armed: bool,
}

impl Reservation<'_> {
    fn keep(mut self) {
        self.armed = false;
    }
}

impl Drop for Reservation<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut registry = self.arena.registry();
        if registry
            .get(&self.agent)
            .is_some_and(|cell| Arc::ptr_eq(cell, &self.cell))
        {
            registry.shift_remove(&self.agent);
        }
    }
}

/// Every critical section leaves its data consistent, so a poisoned lock
/// is still safe to use.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Rectangle;

    struct Fighter<'a> {
        id: AgentId,
        channel: Option<Channel<'a>>,
    }

    impl Fighter<'_> {
        fn new() -> Self {
            Self {
                id: AgentId::next(),
                channel: None,
            }
        }

        fn channel(&self) -> &Channel<'_> {
            self.channel.as_ref().expect("fighter is registered")
        }
    }

    impl<'a> Contender<'a> for Fighter<'a> {
        fn agent_id(&self) -> AgentId {
            self.id
        }

        fn accept_arena_status(&mut self, channel: Channel<'a>, _start: Location) -> bool {
            if self.channel.is_some() {
                return false;
            }
            self.channel = Some(channel);
            true
        }
    }

    /// Moves one step during acceptance, then accepts.
    struct Eager {
        id: AgentId,
        during_accept: Option<Receipt>,
    }

    impl<'a> Contender<'a> for Eager {
        fn agent_id(&self) -> AgentId {
            self.id
        }

        fn accept_arena_status(&mut self, channel: Channel<'a>, start: Location) -> bool {
            self.during_accept = Some(channel.request_move(start.advanced(1)));
            true
        }
    }

    struct Refuser(AgentId);

    impl<'a> Contender<'a> for Refuser {
        fn agent_id(&self) -> AgentId {
            self.0
        }

        fn accept_arena_status(&mut self, _channel: Channel<'a>, _start: Location) -> bool {
            false
        }
    }

    fn arena() -> Arena {
        Arena::new(ArenaConfig::new(5, 5)).unwrap()
    }

    fn loc(h: Heading, x: i32, y: i32) -> Location {
        Location::new(h, x, y)
    }

    #[test]
    fn register_creates_report_at_start() {
        let arena = arena();
        let mut f = Fighter::new();
        let start = loc(Heading::East, 0, 2);
        arena.register(&mut f, start).unwrap();

        let report = arena.battle_report(f.id).unwrap();
        assert_eq!(report.agent(), f.id);
        assert_eq!(report.current_location(), start);
        assert_eq!(report.penalties(), 0);
        assert_eq!(f.channel().agent(), f.id);
    }

    #[test]
    fn second_registration_fails_and_leaves_registry_alone() {
        let arena = arena();
        let mut f = Fighter::new();
        arena.register(&mut f, loc(Heading::North, 1, 1)).unwrap();
        assert_eq!(arena.len(), 1);

        let again = arena.register(&mut f, loc(Heading::South, 3, 3));
        assert_eq!(again, Err(RegistrationError::DuplicateRegistration));
        assert_eq!(arena.len(), 1);
        assert_eq!(
            arena.battle_report(f.id).unwrap().current_location(),
            loc(Heading::North, 1, 1)
        );
        assert_eq!(arena.metrics().duplicate_registrations, 1);
    }

    #[test]
    fn declined_registration_is_rolled_back() {
        let arena = arena();
        let mut r = Refuser(AgentId::next());
        let result = arena.register(&mut r, loc(Heading::North, 0, 0));
        assert_eq!(result, Err(RegistrationError::Declined));
        assert!(arena.is_empty());
        assert!(arena.battle_report(r.0).is_none());
        assert_eq!(arena.metrics().declined_registrations, 1);
        assert_eq!(arena.metrics().registrations, 0);
    }

    #[test]
    fn agent_with_channel_declines_second_arena() {
        let first = arena();
        let second = arena();
        let mut f = Fighter::new();
        first.register(&mut f, loc(Heading::North, 0, 0)).unwrap();

        let result = second.register(&mut f, loc(Heading::North, 0, 0));
        assert_eq!(result, Err(RegistrationError::Declined));
        assert!(second.is_empty());
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn acceptance_hook_can_call_back_into_arena() {
        let arena = arena();
        let mut eager = Eager {
            id: AgentId::next(),
            during_accept: None,
        };
        arena.register(&mut eager, loc(Heading::North, 2, 2)).unwrap();

        let receipt = eager.during_accept.unwrap();
        assert!(receipt.accepted);
        assert_eq!(receipt.location, Some(loc(Heading::North, 2, 3)));
        assert_eq!(
            arena.battle_report(eager.id).unwrap().current_location(),
            loc(Heading::North, 2, 3)
        );
    }

    #[test]
    fn accepted_move_updates_report() {
        let arena = arena();
        let mut f = Fighter::new();
        arena.register(&mut f, loc(Heading::East, 0, 2)).unwrap();

        let receipt = arena.request_move(f.id, loc(Heading::East, 1, 2));
        assert_eq!(receipt, Receipt::accept(loc(Heading::East, 1, 2)));
        let report = arena.battle_report(f.id).unwrap();
        assert_eq!(report.current_location(), loc(Heading::East, 1, 2));
        assert_eq!(report.penalties(), 0);
    }

    #[test]
    fn rejected_move_penalises_and_returns_current_location() {
        let arena = arena();
        let mut f = Fighter::new();
        let start = loc(Heading::West, 0, 2);
        arena.register(&mut f, start).unwrap();

        let receipt = f.channel().request_move(loc(Heading::West, -1, 2));
        assert!(!receipt.accepted);
        assert_eq!(receipt.reason, Some(Rejection::OutOfBounds));
        assert_eq!(receipt.location, Some(start));

        let report = arena.battle_report(f.id).unwrap();
        assert_eq!(report.current_location(), start);
        assert_eq!(report.penalties(), 1);
    }

    #[test]
    fn penalties_count_rejections_and_location_tracks_last_acceptance() {
        let arena = arena();
        let mut f = Fighter::new();
        arena.register(&mut f, loc(Heading::North, 4, 3)).unwrap();
        let ch = f.channel();

        assert!(ch.request_move(loc(Heading::North, 4, 4)).accepted);
        assert!(!ch.request_move(loc(Heading::North, 4, 5)).accepted);
        assert!(!ch.request_move(loc(Heading::East, 5, 4)).accepted);
        assert!(ch.request_move(loc(Heading::West, 3, 4)).accepted);
        assert!(!ch.request_move(loc(Heading::West, 3, 9)).accepted);

        let report = arena.battle_report(f.id).unwrap();
        assert_eq!(report.penalties(), 3);
        assert_eq!(report.current_location(), loc(Heading::West, 3, 4));
        let m = arena.metrics();
        assert_eq!((m.moves_accepted, m.moves_rejected), (2, 3));
    }

    #[test]
    fn heading_change_never_penalises() {
        let arena = arena();
        let mut f = Fighter::new();
        arena.register(&mut f, loc(Heading::North, 0, 0)).unwrap();

        for h in [Heading::West, Heading::South, Heading::East, Heading::North] {
            let receipt = f.channel().request_heading(h);
            assert!(receipt.accepted);
            assert_eq!(receipt.location, Some(loc(h, 0, 0)));
        }
        assert_eq!(arena.battle_report(f.id).unwrap().penalties(), 0);
        assert_eq!(arena.metrics().heading_changes, 4);
    }

    #[test]
    fn heading_change_allowed_even_if_agent_started_outside() {
        let arena = arena();
        let mut f = Fighter::new();
        arena.register(&mut f, loc(Heading::North, -3, 9)).unwrap();
        let receipt = f.channel().request_heading(Heading::South);
        assert_eq!(receipt, Receipt::accept(loc(Heading::South, -3, 9)));
    }

    #[test]
    fn unregistered_agent_requests_fail_without_location() {
        let arena = arena();
        let stranger = AgentId::next();
        assert_eq!(
            arena.request_move(stranger, loc(Heading::North, 0, 0)),
            Receipt::not_registered()
        );
        assert_eq!(
            arena.request_heading(stranger, Heading::East),
            Receipt::not_registered()
        );
        assert!(arena.battle_report(stranger).is_none());
        assert_eq!(arena.metrics().unregistered_requests, 2);
    }

    #[test]
    fn withdraw_returns_final_report_and_closes_channel() {
        let arena = arena();
        let mut f = Fighter::new();
        arena.register(&mut f, loc(Heading::North, 0, 4)).unwrap();
        f.channel().request_move(loc(Heading::North, 0, 5));

        let report = arena.withdraw(f.id).unwrap();
        assert_eq!(report.penalties(), 1);
        assert!(!arena.contains(f.id));
        assert_eq!(
            f.channel().request_heading(Heading::East),
            Receipt::not_registered()
        );
        assert!(arena.withdraw(f.id).is_none());
        assert_eq!(arena.metrics().withdrawals, 1);
    }

    #[test]
    fn standings_follow_registration_order() {
        let arena = arena();
        let mut fighters: Vec<Fighter<'_>> = (0..4).map(|_| Fighter::new()).collect();
        for (i, f) in fighters.iter_mut().enumerate() {
            arena.register(f, loc(Heading::North, i as i32, 0)).unwrap();
        }
        let order: Vec<AgentId> = arena.standings().iter().map(|r| r.agent()).collect();
        let expected: Vec<AgentId> = fighters.iter().map(|f| f.id).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn report_is_a_snapshot() {
        let arena = arena();
        let mut f = Fighter::new();
        arena.register(&mut f, loc(Heading::North, 0, 0)).unwrap();
        let before = arena.battle_report(f.id).unwrap();
        f.channel().request_move(loc(Heading::North, 0, 1));
        assert_eq!(before.current_location(), loc(Heading::North, 0, 0));
    }

    /// Panics from inside the acceptance hook.
    struct Panicker(AgentId);

    impl<'a> Contender<'a> for Panicker {
        fn agent_id(&self) -> AgentId {
            self.0
        }

        fn accept_arena_status(&mut self, _channel: Channel<'a>, _start: Location) -> bool {
            panic!("acceptance hook failed");
        }
    }

    #[test]
    fn panicking_acceptance_hook_releases_reservation() {
        let arena = arena();
        let id = AgentId::next();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut p = Panicker(id);
            arena.register(&mut p, loc(Heading::North, 0, 0))
        }));
        assert!(result.is_err());
        assert!(!arena.contains(id));
        assert!(arena.is_empty());
        assert_eq!(arena.metrics().registrations, 0);

        // The slot is free again for the same identity.
        let mut f = Fighter { id, channel: None };
        arena.register(&mut f, loc(Heading::North, 1, 1)).unwrap();
        assert!(arena.contains(id));
    }

    #[test]
    fn policy_is_the_configured_rectangle() {
        let arena = Arena::new(ArenaConfig::new(7, 3)).unwrap();
        let rect = arena
            .policy()
            .downcast_ref::<Rectangle>()
            .expect("config builds a rectangle");
        assert_eq!((rect.width(), rect.height()), (7, 3));
        assert!(rect.contains(6, 2));
        assert!(!rect.contains(7, 2));
    }

    #[test]
    fn arena_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Arena>();
    }
}
