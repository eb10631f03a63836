//! Criterion micro-benchmarks for arena registration and request arbitration.

use criterion::{criterion_group, criterion_main, Criterion};
use skirmish_arena::{Arena, ArenaConfig};
use skirmish_core::{Heading, Location};
use skirmish_robot::{CharCommands, Robot};
use std::hint::black_box;

fn bench_register_100(c: &mut Criterion) {
    c.bench_function("register_100", |b| {
        b.iter(|| {
            let arena = Arena::new(ArenaConfig::new(100, 100)).unwrap();
            let mut robots: Vec<_> = (0..100).map(|_| Robot::new(CharCommands)).collect();
            for (i, robot) in robots.iter_mut().enumerate() {
                let start = Location::new(Heading::North, i as i32, 0);
                arena.register(robot, start).unwrap();
            }
            black_box(arena.len())
        });
    });
}

fn bench_request_move_accepted(c: &mut Criterion) {
    let arena = Arena::new(ArenaConfig::new(1000, 1000)).unwrap();
    let mut robot = Robot::new(CharCommands);
    arena
        .register(&mut robot, Location::new(Heading::East, 500, 500))
        .unwrap();
    let id = robot.id();
    let targets = [
        Location::new(Heading::East, 501, 500),
        Location::new(Heading::East, 500, 500),
    ];

    c.bench_function("request_move_accepted", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i ^= 1;
            black_box(arena.request_move(id, targets[i]))
        });
    });
}

fn bench_request_move_rejected(c: &mut Criterion) {
    let arena = Arena::new(ArenaConfig::default()).unwrap();
    let mut robot = Robot::new(CharCommands);
    arena
        .register(&mut robot, Location::new(Heading::North, 0, 4))
        .unwrap();
    let id = robot.id();
    let off_edge = Location::new(Heading::North, 0, 5);

    c.bench_function("request_move_rejected", |b| {
        b.iter(|| black_box(arena.request_move(id, black_box(off_edge))));
    });
}

fn bench_standings_1k(c: &mut Criterion) {
    let arena = Arena::new(ArenaConfig::new(1000, 1)).unwrap();
    let mut robots: Vec<_> = (0..1000).map(|_| Robot::new(CharCommands)).collect();
    for (i, robot) in robots.iter_mut().enumerate() {
        arena
            .register(robot, Location::new(Heading::North, i as i32, 0))
            .unwrap();
    }

    c.bench_function("standings_1k", |b| {
        b.iter(|| black_box(arena.standings()));
    });
}

criterion_group!(
    benches,
    bench_register_100,
    bench_request_move_accepted,
    bench_request_move_rejected,
    bench_standings_1k
);
criterion_main!(benches);
