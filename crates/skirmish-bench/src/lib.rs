//! Reference scenarios and benchmark utilities for the Skirmish arena.
//!
//! - [`reference_arena`]: the 5×5 arena every reference scenario runs on
//! - [`reference_scenarios`]: four command strings with known standings
//! - [`degraded_scenarios`]: the same four, driven with the left actuator
//!   disabled
//! - [`command_stream`]: deterministic `L`/`R`/`M` strings via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use skirmish_arena::ArenaConfig;
use skirmish_core::{Heading, Location};
use skirmish_robot::Actuators;

/// Where a scenario's robot should end up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Standing {
    /// Final location recorded by the arena.
    pub location: Location,
    /// Penalties recorded by the arena.
    pub penalties: u32,
    /// Commands accepted out of the whole string.
    pub successful: usize,
}

/// A named command string with a known outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceScenario {
    /// Display name, e.g. `scenario-1`.
    pub alias: &'static str,
    /// Registration location.
    pub start: Location,
    /// `L`/`R`/`M` characters, fed one by one.
    pub commands: &'static str,
    /// Actuator capability of the robot.
    pub actuators: Actuators,
    /// Expected standing on [`reference_arena`].
    pub expected: Standing,
}

/// The 5×5 arena used by the reference scenarios.
pub fn reference_arena() -> ArenaConfig {
    ArenaConfig::new(5, 5)
}

const STARTS_AND_COMMANDS: [(&str, Location, &str); 4] = [
    ("scenario-1", Location::new(Heading::East, 0, 2), "MLMRMMMRMMRR"),
    ("scenario-2", Location::new(Heading::South, 4, 4), "LMLLMMLMMMRMM"),
    ("scenario-3", Location::new(Heading::West, 2, 2), "MLMLMLM RMRMRMRM"),
    ("scenario-4", Location::new(Heading::North, 1, 3), "MMLMMLMMMMM"),
];

fn build(actuators: Actuators, expected: [Standing; 4]) -> Vec<ReferenceScenario> {
    STARTS_AND_COMMANDS
        .iter()
        .zip(expected)
        .map(|(&(alias, start, commands), expected)| ReferenceScenario {
            alias,
            start,
            commands,
            actuators,
            expected,
        })
        .collect()
}

/// The four reference scenarios, driven with both actuators working.
///
/// Scenario 3 contains a blank, which is rejected as unrecognised.
pub fn reference_scenarios() -> Vec<ReferenceScenario> {
    build(
        Actuators::FULL,
        [
            Standing {
                location: Location::new(Heading::North, 4, 1),
                penalties: 0,
                successful: 12,
            },
            Standing {
                location: Location::new(Heading::West, 0, 1),
                penalties: 1,
                successful: 12,
            },
            Standing {
                location: Location::new(Heading::North, 2, 2),
                penalties: 0,
                successful: 15,
            },
            Standing {
                location: Location::new(Heading::South, 0, 0),
                penalties: 3,
                successful: 8,
            },
        ],
    )
}

/// The reference scenarios with the left actuator disabled.
///
/// Every `L` fails without reaching the arena and every `M` becomes a
/// clockwise arc.
pub fn degraded_scenarios() -> Vec<ReferenceScenario> {
    build(
        Actuators::left_disabled(),
        [
            Standing {
                location: Location::new(Heading::West, 2, 2),
                penalties: 1,
                successful: 10,
            },
            Standing {
                location: Location::new(Heading::South, 4, 3),
                penalties: 5,
                successful: 4,
            },
            Standing {
                location: Location::new(Heading::West, 2, 2),
                penalties: 0,
                successful: 12,
            },
            Standing {
                location: Location::new(Heading::East, 2, 3),
                penalties: 0,
                successful: 9,
            },
        ],
    )
}

/// Generate a deterministic command string of `len` characters from
/// `L`, `R` and `M`.
pub fn command_stream(len: usize, seed: u64) -> String {
    const ALPHABET: [char; 3] = ['L', 'R', 'M'];
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ALPHABET[((state >> 33) % 3) as usize]
        })
        .collect()
}
