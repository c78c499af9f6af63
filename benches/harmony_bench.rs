//! Performance benchmarks for the harmonic progression engine

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chorus_harmony::modulation::compute_modulation_path;
use chorus_harmony::{HarmonyEngine, PlayerSnapshot};

/// Synthetic room: 100 players spread over the assignable notes
fn synthetic_players() -> Vec<PlayerSnapshot> {
    let notes = [
        "C", "G", "F", "Am", "Em", "D", "A", "E", "Bm", "Dm", "C#", "F#",
    ];

    (0..100)
        .map(|i| PlayerSnapshot {
            id: format!("p{}", i),
            assigned_note: notes[i % notes.len()].to_string(),
            activity_score: (i % 10) as f32 / 10.0,
            cluster_duration_ms: (i * 150) as f32,
        })
        .collect()
}

fn bench_engine_tick(c: &mut Criterion) {
    let players = synthetic_players();

    c.bench_function("engine_tick_100_players", |b| {
        let mut engine = HarmonyEngine::new(0);
        let mut now = 0u64;
        b.iter(|| {
            now += 50;
            black_box(engine.tick(black_box(&players), now));
        });
    });
}

fn bench_modulation_planning(c: &mut Criterion) {
    c.bench_function("modulation_path_worst_case", |b| {
        b.iter(|| {
            // C to F# exhausts the bounded search before falling back
            black_box(compute_modulation_path(black_box("F#"), black_box("C")));
        });
    });
}

criterion_group!(benches, bench_engine_tick, bench_modulation_planning);
criterion_main!(benches);
