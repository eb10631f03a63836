//! Actuator capability: how a robot's drive hardware carries out maneuvers.
//!
//! A robot has a left and a right actuator. Counter-clockwise turns need
//! the left one, clockwise turns the right one. Straight-line movement
//! needs both; with only one working, driving forward swings the robot
//! sideways and turns it toward the working actuator's turning side in a
//! single motion.

use crate::vocabulary::Maneuver;
use skirmish_core::{ConfigError, Heading, Location};

/// The arena request a maneuver turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    /// Ask the arena for a new heading.
    Turn(Heading),
    /// Ask the arena to move to this location.
    Move(Location),
    /// The hardware cannot do it; the arena is not contacted.
    Unavailable,
}

/// Which of a robot's two actuators work.
///
/// # Examples
///
/// ```
/// use skirmish_core::{Heading, Location};
/// use skirmish_robot::{Actuators, Maneuver, Plan};
///
/// let limping = Actuators::new(false, true).unwrap();
/// let here = Location::new(Heading::North, 2, 2);
///
/// assert_eq!(limping.plan(Maneuver::TurnLeft, here), Plan::Unavailable);
/// assert_eq!(
///     limping.plan(Maneuver::Forward { steps: 1 }, here),
///     Plan::Move(Location::new(Heading::East, 3, 2)),
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Actuators {
    left: bool,
    right: bool,
}

impl Actuators {
    /// Both actuators working.
    pub const FULL: Actuators = Actuators {
        left: true,
        right: true,
    };

    /// Describe which actuators work.
    ///
    /// Returns `Err(ConfigError::NoWorkingActuator)` if neither does: such
    /// a robot could not be commanded at all.
    pub fn new(left: bool, right: bool) -> Result<Self, ConfigError> {
        if !left && !right {
            return Err(ConfigError::NoWorkingActuator);
        }
        Ok(Self { left, right })
    }

    /// Only the right actuator works.
    pub fn left_disabled() -> Self {
        Self {
            left: false,
            right: true,
        }
    }

    /// Only the left actuator works.
    pub fn right_disabled() -> Self {
        Self {
            left: true,
            right: false,
        }
    }

    /// Whether the left actuator works.
    pub fn left(&self) -> bool {
        self.left
    }

    /// Whether the right actuator works.
    pub fn right(&self) -> bool {
        self.right
    }

    /// Whether either actuator is disabled.
    pub fn is_degraded(&self) -> bool {
        !(self.left && self.right)
    }

    /// Work out the arena request for `maneuver` from `last` location.
    pub fn plan(&self, maneuver: Maneuver, last: Location) -> Plan {
        let heading = last.heading();
        match maneuver {
            Maneuver::TurnLeft if self.left => Plan::Turn(heading.rotate_counter_clockwise()),
            Maneuver::TurnRight if self.right => Plan::Turn(heading.rotate_clockwise()),
            Maneuver::TurnLeft | Maneuver::TurnRight => Plan::Unavailable,
            Maneuver::Forward { steps } => match (self.left, self.right) {
                (true, true) => Plan::Move(last.advanced(steps)),
                (true, false) => {
                    let swung = last.with_heading(heading.rotate_counter_clockwise());
                    Plan::Move(swung.advanced(steps))
                }
                (false, true) => {
                    let swung = last.with_heading(heading.rotate_clockwise());
                    Plan::Move(swung.advanced(steps))
                }
                // Unreachable through the public constructors.
                (false, false) => Plan::Unavailable,
            },
        }
    }
}

impl Default for Actuators {
    fn default() -> Self {
        Self::FULL
    }
}
