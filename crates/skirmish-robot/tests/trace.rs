//! Per-command debug trace.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use skirmish_arena::{Arena, ArenaConfig};
use skirmish_core::{Heading, Location};
use skirmish_robot::{CharCommands, Robot};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn every_command_reaching_the_arena_is_traced() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let arena = Arena::new(ArenaConfig::default()).unwrap();
        let mut robot = Robot::new(CharCommands);
        arena
            .register(&mut robot, Location::new(Heading::North, 0, 4))
            .unwrap();
        // Turn, bump the wall, unknown command.
        robot.execute_str("RLMX");
    });

    let text = captured.text();
    let executed: Vec<&str> = text
        .lines()
        .filter(|l| l.contains("command executed"))
        .collect();
    assert_eq!(executed.len(), 3, "log was:\n{text}");
    assert_eq!(executed.iter().filter(|l| l.contains("accepted=true")).count(), 2);
    assert_eq!(executed.iter().filter(|l| l.contains("accepted=false")).count(), 1);
    assert!(text.contains("unrecognized command"));
}
