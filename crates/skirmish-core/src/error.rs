//! Error types for the Skirmish arena.
//!
//! Organized by where they surface: per-request rejections carried in a
//! [`Receipt`](crate::Receipt), registration failures, construction-time
//! configuration errors, and invalid heading discriminants.

use std::error::Error;
use std::fmt;

/// Why a movement, heading, or command request was not carried out.
///
/// Used in [`Receipt::reason`](crate::Receipt) alongside the fallback
/// location. None of these are faults; they are ordinary outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The agent is not registered with the arena, or holds no channel.
    NotRegistered,
    /// The proposed target failed the arena's boundary policy. The agent
    /// was penalised and did not move.
    OutOfBounds,
    /// The command vocabulary did not recognise the command.
    UnrecognizedCommand,
    /// The robot's actuators cannot perform the requested maneuver.
    ActuatorUnavailable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRegistered => write!(f, "agent is not registered with an arena"),
            Self::OutOfBounds => write!(f, "target location is out of bounds"),
            Self::UnrecognizedCommand => write!(f, "command not recognised"),
            Self::ActuatorUnavailable => write!(f, "actuator unavailable for maneuver"),
        }
    }
}

impl Error for Rejection {}

/// Errors from registering an agent with an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationError {
    /// The agent already has a battle report in this arena.
    DuplicateRegistration,
    /// The agent refused arena status, usually because it already holds
    /// a channel from an earlier registration.
    Declined,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRegistration => write!(f, "agent is already registered"),
            Self::Declined => write!(f, "agent declined arena status"),
        }
    }
}

impl Error for RegistrationError {}

/// Errors detected while validating arena or robot configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Arena width or height is zero.
    EmptyArena,
    /// An arena dimension does not fit the `i32` coordinate range.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The configured value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// Both actuators were configured as disabled.
    NoWorkingActuator,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArena => write!(f, "arena must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "arena {name} {value} exceeds maximum of {max}")
            }
            Self::NoWorkingActuator => write!(f, "robot needs at least one working actuator"),
        }
    }
}

impl Error for ConfigError {}

/// A heading discriminant outside `0..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InvalidHeading {
    /// The rejected discriminant.
    pub value: u8,
}

impl fmt::Display for InvalidHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid heading discriminant {}", self.value)
    }
}

impl Error for InvalidHeading {}
