//! Skirmish: a bounded grid arena where registered robots are commanded
//! and refereed.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Skirmish sub-crates and adds a scenario driver on top.
//!
//! # Quick start
//!
//! ```rust
//! use skirmish::prelude::*;
//!
//! let arena = Arena::new(ArenaConfig::default()).unwrap();
//! let mut robot = Robot::new(CharCommands);
//! arena.register(&mut robot, Location::new(Heading::East, 0, 2)).unwrap();
//!
//! robot.execute_str("MLMRMMMRMMRR");
//!
//! let report = arena.battle_report(robot.id()).unwrap();
//! assert_eq!(report.current_location(), Location::new(Heading::North, 4, 1));
//! assert_eq!(report.penalties(), 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `skirmish-core` | headings, locations, ids, receipts, errors |
//! | [`arena`] | `skirmish-arena` | `Arena`, channels, boundary policies, reports |
//! | [`robot`] | `skirmish-robot` | `Robot`, vocabularies, actuators |
//! | [`scenario`] | this crate | scenario driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`skirmish-core`).
pub use skirmish_core as types;

/// Arena coordination (`skirmish-arena`).
///
/// [`arena::Arena`] arbitrates requests against a
/// [`arena::BoundaryPolicy`] and keeps a [`arena::BattleReport`] per agent.
pub use skirmish_arena as arena;

/// Commandable robots (`skirmish-robot`).
pub use skirmish_robot as robot;

pub mod scenario;

/// Common imports for typical Skirmish usage.
///
/// ```rust
/// use skirmish::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use skirmish_core::{AgentId, Heading, Location, Receipt, Rejection};

    // Errors
    pub use skirmish_core::{ConfigError, RegistrationError};

    // Arena
    pub use skirmish_arena::{
        Arena, ArenaConfig, ArenaMetrics, BattleReport, BoundaryPolicy, Channel, Contender,
        Rectangle,
    };

    // Robot
    pub use skirmish_robot::{
        ActionCommands, Actuators, ChainOutcome, CharCommands, Robot, RobotAction, Vocabulary,
    };

    // Scenario driver
    pub use crate::scenario::{run_concurrently, run_scenario, Scenario, ScenarioOutcome};
}
