//! The commandable robot.

use crate::actuators::{Actuators, Plan};
use crate::vocabulary::{CharCommands, Vocabulary};
use skirmish_arena::{Channel, Contender};
use skirmish_core::{AgentId, Location, Receipt, Rejection};
use std::borrow::Borrow;
use std::fmt;
use tracing::debug;

/// What a robot holds once an arena has accepted it.
struct Engagement<'a> {
    channel: Channel<'a>,
    last_location: Location,
}

/// Result of running a sequence of commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainOutcome {
    /// Commands whose receipt was accepted.
    pub successful: usize,
    /// Commands executed in total.
    pub attempted: usize,
    /// The robot's last-known location afterwards, `None` if it was never
    /// registered.
    pub final_location: Option<Location>,
}

/// A robot driven by commands from vocabulary `V`.
///
/// The robot is a [`Contender`]: register it with
/// [`Arena::register`](skirmish_arena::Arena::register) and it keeps the
/// channel it is handed for the rest of its life. It will never accept a
/// second channel, so a robot belongs to at most one arena.
///
/// Each command is resolved by the vocabulary to a
/// [`Maneuver`](crate::Maneuver), planned by the robot's [`Actuators`] into
/// at most one arena request, and sent through the channel. Any location
/// the arena returns, on acceptance or rejection, becomes the robot's
/// last-known location.
///
/// # Examples
///
/// ```
/// use skirmish_arena::{Arena, ArenaConfig};
/// use skirmish_core::{Heading, Location};
/// use skirmish_robot::{CharCommands, Robot};
///
/// let arena = Arena::new(ArenaConfig::default()).unwrap();
/// let mut robot = Robot::new(CharCommands);
/// arena.register(&mut robot, Location::new(Heading::East, 0, 2)).unwrap();
///
/// let outcome = robot.execute_str("MLM");
/// assert_eq!(outcome.successful, 3);
/// assert_eq!(outcome.final_location, Some(Location::new(Heading::North, 1, 3)));
/// ```
pub struct Robot<'a, V: Vocabulary> {
    id: AgentId,
    vocabulary: V,
    actuators: Actuators,
    engagement: Option<Engagement<'a>>,
}

impl<'a, V: Vocabulary> Robot<'a, V> {
    /// A robot with both actuators working.
    pub fn new(vocabulary: V) -> Self {
        Self::with_actuators(vocabulary, Actuators::FULL)
    }

    /// A robot with the given actuator capability.
    pub fn with_actuators(vocabulary: V, actuators: Actuators) -> Self {
        Self {
            id: AgentId::next(),
            vocabulary,
            actuators,
            engagement: None,
        }
    }

    /// This robot's identity.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Which actuators work.
    pub fn actuators(&self) -> Actuators {
        self.actuators
    }

    /// The command vocabulary.
    pub fn vocabulary(&self) -> &V {
        &self.vocabulary
    }

    /// Whether the robot has accepted an arena channel.
    pub fn is_registered(&self) -> bool {
        self.engagement.is_some()
    }

    /// Last location the arena reported, or the starting location if no
    /// command has been executed yet.
    pub fn last_location(&self) -> Option<Location> {
        self.engagement.as_ref().map(|e| e.last_location)
    }

    /// Execute one command.
    pub fn execute(&mut self, command: &V::Command) -> Receipt {
        let Some(engagement) = self.engagement.as_mut() else {
            return Receipt::not_registered();
        };
        let last = engagement.last_location;

        let Some(maneuver) = self.vocabulary.resolve(command) else {
            debug!(agent = %self.id, ?command, "unrecognized command");
            return Receipt::reject(Rejection::UnrecognizedCommand, Some(last));
        };

        let receipt = match self.actuators.plan(maneuver, last) {
            Plan::Turn(heading) => engagement.channel.request_heading(heading),
            Plan::Move(target) => engagement.channel.request_move(target),
            Plan::Unavailable => {
                debug!(agent = %self.id, ?maneuver, "actuator unavailable");
                return Receipt::reject(Rejection::ActuatorUnavailable, Some(last));
            }
        };

        debug!(
            agent = %self.id,
            ?command,
            accepted = receipt.accepted,
            location = ?receipt.location,
            "command executed"
        );
        if let Some(location) = receipt.location {
            engagement.last_location = location;
        }
        receipt
    }

    /// Execute commands in order and count the accepted ones.
    ///
    /// Rejections do not stop the chain.
    pub fn execute_chain<I>(&mut self, commands: I) -> ChainOutcome
    where
        I: IntoIterator,
        I::Item: Borrow<V::Command>,
    {
        let mut successful = 0;
        let mut attempted = 0;
        for command in commands {
            attempted += 1;
            if self.execute(command.borrow()).accepted {
                successful += 1;
            }
        }
        ChainOutcome {
            successful,
            attempted,
            final_location: self.last_location(),
        }
    }
}

impl Robot<'_, CharCommands> {
    /// Execute every character of `commands`.
    ///
    /// Blanks are not skipped: like any other unknown character they are
    /// rejected as unrecognised and count against the chain.
    pub fn execute_str(&mut self, commands: &str) -> ChainOutcome {
        self.execute_chain(commands.chars())
    }
}

impl<'a, V: Vocabulary> Contender<'a> for Robot<'a, V> {
    fn agent_id(&self) -> AgentId {
        self.id
    }

    fn accept_arena_status(&mut self, channel: Channel<'a>, starting_location: Location) -> bool {
        if self.engagement.is_some() {
            debug!(agent = %self.id, "already engaged, declining second arena");
            return false;
        }
        self.engagement = Some(Engagement {
            channel,
            last_location: starting_location,
        });
        true
    }
}

impl<V: Vocabulary + fmt::Debug> fmt::Debug for Robot<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Robot")
            .field("id", &self.id)
            .field("vocabulary", &self.vocabulary)
            .field("actuators", &self.actuators)
            .field("last_location", &self.last_location())
            .finish()
    }
}
