use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pig_engine::core::{GameRng, MatchConfig, MatchOverrides};
use pig_engine::rules::TurnEngine;
use pig_engine::stats::MatchStats;

fn play_match(engine: &mut TurnEngine<GameRng>, hold_at: u32) {
    engine.reset(MatchOverrides::none());
    while engine.can_roll() {
        if engine.state().pending_score() >= hold_at {
            engine.hold();
        } else {
            engine.roll_die().unwrap();
        }
    }
}

fn bench_full_match(c: &mut Criterion) {
    let mut engine = TurnEngine::new(MatchConfig::default(), GameRng::new(42));
    c.bench_function("full_match_hold_at_20", |b| {
        b.iter(|| play_match(black_box(&mut engine), 20))
    });

    let mut observed = TurnEngine::new(MatchConfig::default(), GameRng::new(42));
    observed.subscribe(MatchStats::new());
    c.bench_function("full_match_with_stats", |b| {
        b.iter(|| play_match(black_box(&mut observed), 20))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = TurnEngine::new(MatchConfig::new(10_000).unwrap(), GameRng::new(7));
    for _ in 0..900 {
        engine.roll_die().unwrap();
        if engine.state().pending_score() >= 15 {
            engine.hold();
        }
    }
    c.bench_function("snapshot_with_full_history", |b| {
        b.iter(|| black_box(engine.snapshot()))
    });
}

criterion_group!(benches, bench_full_match, bench_snapshot);
criterion_main!(benches);
