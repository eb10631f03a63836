//! Test utilities and mock types for Skirmish development.
//!
//! Provides mock [`BoundaryPolicy`] implementations that record how the
//! arena consults them, and a [`MockContender`] whose acceptance
//! behaviour can be scripted.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use skirmish_arena::{BoundaryPolicy, Channel, Contender};
use skirmish_core::{AgentId, Location, Receipt};

/// Accepts every move.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl BoundaryPolicy for AllowAll {
    fn is_legal_move(&self, _current: &Location, _target: &Location) -> bool {
        true
    }
}

/// Rejects every move.
#[derive(Clone, Copy, Debug, Default)]
pub struct DenyAll;

impl BoundaryPolicy for DenyAll {
    fn is_legal_move(&self, _current: &Location, _target: &Location) -> bool {
        false
    }
}

/// Shared view of what a [`RecordingPolicy`] has been asked.
///
/// Cloned out before the policy is boxed into an arena, so tests can
/// inspect it afterwards.
#[derive(Clone, Debug, Default)]
pub struct PolicyLog {
    calls: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<(Location, Location)>>>,
}

impl PolicyLog {
    /// Number of times the policy was consulted.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every `(current, target)` pair, in call order.
    pub fn queries(&self) -> Vec<(Location, Location)> {
        self.queries.lock().unwrap().clone()
    }
}

/// Delegates to an inner policy and records every query.
pub struct RecordingPolicy<P> {
    inner: P,
    log: PolicyLog,
}

impl<P: BoundaryPolicy> RecordingPolicy<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            log: PolicyLog::default(),
        }
    }

    /// Handle for inspecting the recorded queries.
    pub fn log(&self) -> PolicyLog {
        self.log.clone()
    }
}

impl<P: BoundaryPolicy> BoundaryPolicy for RecordingPolicy<P> {
    fn is_legal_move(&self, current: &Location, target: &Location) -> bool {
        self.log.calls.fetch_add(1, Ordering::SeqCst);
        self.log.queries.lock().unwrap().push((*current, *target));
        self.inner.is_legal_move(current, target)
    }
}

/// A contender with scripted acceptance behaviour.
///
/// By default it accepts the first channel it is offered and declines any
/// later one. [`declining`](MockContender::declining) makes it refuse
/// outright; [`moving_on_accept`](MockContender::moving_on_accept) makes
/// it issue a move through the new channel from inside the acceptance
/// hook.
pub struct MockContender<'a> {
    id: AgentId,
    channel: Option<Channel<'a>>,
    decline: bool,
    move_on_accept: Option<Location>,
    offers: usize,
    starting_location: Option<Location>,
    accept_receipt: Option<Receipt>,
}

impl<'a> MockContender<'a> {
    pub fn new() -> Self {
        Self {
            id: AgentId::next(),
            channel: None,
            decline: false,
            move_on_accept: None,
            offers: 0,
            starting_location: None,
            accept_receipt: None,
        }
    }

    /// A contender filed under an existing identity, for racing
    /// registrations of the same agent.
    pub fn with_id(id: AgentId) -> Self {
        Self { id, ..Self::new() }
    }

    /// Refuse every offer.
    pub fn declining() -> Self {
        Self {
            decline: true,
            ..Self::new()
        }
    }

    /// Request a move to `target` while accepting.
    pub fn moving_on_accept(target: Location) -> Self {
        Self {
            move_on_accept: Some(target),
            ..Self::new()
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    /// The channel, if an offer was accepted.
    pub fn channel(&self) -> Option<&Channel<'a>> {
        self.channel.as_ref()
    }

    /// How many times an arena offered arena status.
    pub fn offers(&self) -> usize {
        self.offers
    }

    /// Starting location from the accepted offer.
    pub fn starting_location(&self) -> Option<Location> {
        self.starting_location
    }

    /// Receipt of the move issued during acceptance, if scripted.
    pub fn accept_receipt(&self) -> Option<Receipt> {
        self.accept_receipt
    }
}

impl Default for MockContender<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Contender<'a> for MockContender<'a> {
    fn agent_id(&self) -> AgentId {
        self.id
    }

    fn accept_arena_status(&mut self, channel: Channel<'a>, starting_location: Location) -> bool {
        self.offers += 1;
        if self.decline || self.channel.is_some() {
            return false;
        }
        if let Some(target) = self.move_on_accept {
            self.accept_receipt = Some(channel.request_move(target));
        }
        self.channel = Some(channel);
        self.starting_location = Some(starting_location);
        true
    }
}
