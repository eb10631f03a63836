//! Commandable robots for Skirmish arenas.
//!
//! A [`Robot`] combines three things:
//!
//! - a [`Vocabulary`] that resolves command values into [`Maneuver`]s
//!   ([`CharCommands`] for `L`/`R`/`M` strings, [`ActionCommands`] for
//!   [`RobotAction`] values);
//! - an [`Actuators`] capability that plans each maneuver into at most one
//!   arena request, so a robot with a disabled actuator is the same type
//!   configured differently;
//! - the [`Channel`](skirmish_arena::Channel) it receives when it registers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod actuators;
pub mod robot;
pub mod vocabulary;

pub use actuators::{Actuators, Plan};
pub use robot::{ChainOutcome, Robot};
pub use vocabulary::{ActionCommands, CharCommands, Maneuver, RobotAction, Vocabulary};
