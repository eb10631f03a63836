//! Command vocabularies and the maneuvers they resolve to.
//!
//! A [`Vocabulary`] turns whatever a driver sends a robot (a character,
//! an enum value, ...) into a vocabulary-independent [`Maneuver`]. The
//! robot's actuators then decide how, or whether, that maneuver can be
//! carried out.

use std::fmt;

/// What a command asks the robot to do, independent of how it was spelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Maneuver {
    /// Rotate counter-clockwise by one compass step.
    TurnLeft,
    /// Rotate clockwise by one compass step.
    TurnRight,
    /// Drive forward along the current heading.
    Forward {
        /// Number of cells.
        steps: i32,
    },
}

/// Translates command values into maneuvers.
///
/// Returning `None` marks the command as unrecognised; the robot then
/// rejects it without contacting the arena.
pub trait Vocabulary {
    /// The command value type drivers send.
    type Command: fmt::Debug;

    /// Resolve one command.
    fn resolve(&self, command: &Self::Command) -> Option<Maneuver>;
}

/// Single-character commands: `L` turns left, `R` turns right, `M` moves
/// forward one cell. Anything else, including whitespace and lowercase
/// letters, is unrecognised.
///
/// # Examples
///
/// ```
/// use skirmish_robot::{CharCommands, Maneuver, Vocabulary};
///
/// let v = CharCommands;
/// assert_eq!(v.resolve(&'M'), Some(Maneuver::Forward { steps: 1 }));
/// assert_eq!(v.resolve(&'m'), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharCommands;

impl Vocabulary for CharCommands {
    type Command = char;

    fn resolve(&self, command: &char) -> Option<Maneuver> {
        match command {
            'L' => Some(Maneuver::TurnLeft),
            'R' => Some(Maneuver::TurnRight),
            'M' => Some(Maneuver::Forward { steps: 1 }),
            _ => None,
        }
    }
}

/// Discrete robot actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RobotAction {
    /// Turn right.
    RotateClockwise,
    /// Turn left.
    RotateAntiClockwise,
    /// Move one cell forward.
    MoveForward,
}

/// Vocabulary over [`RobotAction`]. Every action is recognised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionCommands;

impl Vocabulary for ActionCommands {
    type Command = RobotAction;

    fn resolve(&self, command: &RobotAction) -> Option<Maneuver> {
        Some(match command {
            RobotAction::RotateClockwise => Maneuver::TurnRight,
            RobotAction::RotateAntiClockwise => Maneuver::TurnLeft,
            RobotAction::MoveForward => Maneuver::Forward { steps: 1 },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_commands() {
        let v = CharCommands;
        assert_eq!(v.resolve(&'L'), Some(Maneuver::TurnLeft));
        assert_eq!(v.resolve(&'R'), Some(Maneuver::TurnRight));
        assert_eq!(v.resolve(&'M'), Some(Maneuver::Forward { steps: 1 }));
        for c in [' ', 'l', 'r', 'X', '\n', '1'] {
            assert_eq!(v.resolve(&c), None, "{c:?} should be unrecognised");
        }
    }

    #[test]
    fn action_commands_cover_every_action() {
        let v = ActionCommands;
        assert_eq!(v.resolve(&RobotAction::RotateClockwise), Some(Maneuver::TurnRight));
        assert_eq!(v.resolve(&RobotAction::RotateAntiClockwise), Some(Maneuver::TurnLeft));
        assert_eq!(
            v.resolve(&RobotAction::MoveForward),
            Some(Maneuver::Forward { steps: 1 })
        );
    }
}
