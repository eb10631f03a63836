//! The narrow handle an agent uses to talk to its arena.

use crate::arena::Arena;
use skirmish_core::{AgentId, Heading, Location, Receipt};
use std::fmt;

/// A capability bound to one `(agent, arena)` pair.
///
/// Handed to an agent during [`Arena::register`]. It is the only way the
/// agent can affect shared arena state, and it can only act on behalf of
/// the agent it was issued to. The channel borrows the arena; it does not
/// own it, so an agent holding a channel cannot outlive its arena.
pub struct Channel<'a> {
    arena: &'a Arena,
    agent: AgentId,
}

impl<'a> Channel<'a> {
    pub(crate) fn new(arena: &'a Arena, agent: AgentId) -> Self {
        Self { arena, agent }
    }

    /// The agent this channel acts for.
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    /// Ask the arena to move the bound agent to `desired`.
    ///
    /// See [`Arena::request_move`].
    pub fn request_move(&self, desired: Location) -> Receipt {
        self.arena.request_move(self.agent, desired)
    }

    /// Ask the arena to turn the bound agent to `heading`.
    ///
    /// See [`Arena::request_heading`].
    pub fn request_heading(&self, heading: Heading) -> Receipt {
        self.arena.request_heading(self.agent, heading)
    }
}

impl fmt::Debug for Channel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("agent", &self.agent)
            .finish_non_exhaustive()
    }
}
