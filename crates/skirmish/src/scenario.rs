//! Scenario driver: register a character-commanded robot, run its command
//! string, and read back the arena's verdict.
//!
//! [`run_concurrently`] runs several scenarios against one arena, one
//! scoped thread each, and returns their outcomes in submission order.

use crossbeam_channel::unbounded;
use skirmish_arena::{Arena, BattleReport};
use skirmish_core::{AgentId, Location, RegistrationError};
use skirmish_robot::{Actuators, ChainOutcome, CharCommands, Robot};
use std::thread;
use tracing::{info, warn};

/// A robot to register and the commands to feed it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    /// Display name used in logs and outcomes.
    pub alias: String,
    /// `L`/`R`/`M` command string. Other characters are sent too and
    /// rejected as unrecognised.
    pub commands: String,
    /// Registration location.
    pub start: Location,
    /// Actuator capability of the robot.
    pub actuators: Actuators,
}

impl Scenario {
    /// A scenario for a robot with both actuators working.
    pub fn new(alias: impl Into<String>, start: Location, commands: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            commands: commands.into(),
            start,
            actuators: Actuators::FULL,
        }
    }

    /// Replace the robot's actuator capability.
    pub fn with_actuators(mut self, actuators: Actuators) -> Self {
        self.actuators = actuators;
        self
    }
}

/// What happened when a [`Scenario`] ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScenarioOutcome {
    /// Alias of the scenario.
    pub alias: String,
    /// Identity the robot was registered under.
    pub agent: AgentId,
    /// Per-command tally from the robot's side.
    pub chain: ChainOutcome,
    /// The arena's report after the last command, `None` if the agent was
    /// withdrawn while the scenario ran.
    pub report: Option<BattleReport>,
}

/// Run one scenario against `arena`.
///
/// # Errors
///
/// Returns the [`RegistrationError`] if the robot could not be registered;
/// no commands are sent in that case.
pub fn run_scenario(
    arena: &Arena,
    scenario: &Scenario,
) -> Result<ScenarioOutcome, RegistrationError> {
    let mut robot = Robot::with_actuators(CharCommands, scenario.actuators);
    arena.register(&mut robot, scenario.start)?;

    let chain = robot.execute_str(&scenario.commands);
    let report = arena.battle_report(robot.id());
    match &report {
        Some(report) => info!(
            alias = %scenario.alias,
            successful = chain.successful,
            attempted = chain.attempted,
            location = %report.current_location(),
            penalties = report.penalties(),
            "scenario finished"
        ),
        None => warn!(alias = %scenario.alias, "agent withdrawn before scenario finished"),
    }

    Ok(ScenarioOutcome {
        alias: scenario.alias.clone(),
        agent: robot.id(),
        chain,
        report,
    })
}

/// Run every scenario on its own thread against the shared `arena`.
///
/// Outcomes are returned in the order the scenarios were given, whatever
/// order the threads finish in.
pub fn run_concurrently(
    arena: &Arena,
    scenarios: &[Scenario],
) -> Vec<Result<ScenarioOutcome, RegistrationError>> {
    let (tx, rx) = unbounded();

    thread::scope(|s| {
        for (index, scenario) in scenarios.iter().enumerate() {
            let tx = tx.clone();
            s.spawn(move || {
                // The receiver outlives the scope, so the send cannot fail.
                let _ = tx.send((index, run_scenario(arena, scenario)));
            });
        }
    });
    drop(tx);

    let mut outcomes: Vec<_> = rx.iter().collect();
    outcomes.sort_by_key(|(index, _)| *index);
    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}
