//! Run the reference scenarios on one arena and print the standings.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p skirmish --example scenarios
//! ```

use skirmish::prelude::*;
use skirmish_bench::{degraded_scenarios, reference_arena, reference_scenarios};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let arena = Arena::new(reference_arena())?;
    let scenarios: Vec<Scenario> = reference_scenarios()
        .into_iter()
        .chain(degraded_scenarios())
        .enumerate()
        .map(|(i, r)| {
            let alias = if i < 4 {
                r.alias.to_string()
            } else {
                format!("{}-degraded", r.alias)
            };
            Scenario::new(alias, r.start, r.commands).with_actuators(r.actuators)
        })
        .collect();

    println!("{} scenarios on a 5x5 arena", scenarios.len());
    for outcome in run_concurrently(&arena, &scenarios) {
        let outcome = outcome?;
        println!(
            "{:<20} {:>2}/{:<2} accepted",
            outcome.alias, outcome.chain.successful, outcome.chain.attempted
        );
    }

    println!();
    for report in arena.standings() {
        println!("{report}");
    }

    let m = arena.metrics();
    println!();
    println!(
        "moves: {} accepted, {} rejected; heading changes: {}",
        m.moves_accepted, m.moves_rejected, m.heading_changes
    );
    Ok(())
}
