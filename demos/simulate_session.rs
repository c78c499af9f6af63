//! Example: Simulate a short session in one harmonic space
//!
//! Players join with difficulty-assigned notes, move around, compete, and
//! leave; the engine's state is printed after each phase.

use rand::rngs::StdRng;
use rand::SeedableRng;

use chorus_harmony::modulation::Difficulty;
use chorus_harmony::presentation::{chord_voicing, random_note_by_difficulty};
use chorus_harmony::{HarmonyEngine, PlayerSnapshot};

fn print_state(label: &str, engine: &HarmonyEngine) {
    let state = engine.state();
    let progression: Vec<String> = state
        .progression
        .iter()
        .map(|c| c.to_string())
        .collect();

    println!("{}:", label);
    println!("  key: {} ({:?})", state.current_key, state.current_mode);
    println!("  progression: {}", progression.join(" - "));
    println!("  tension: {:.2}", state.tension);
    for voice in chord_voicing(state) {
        println!("  voice: {:.2} Hz (gain {:.2})", voice.freq_hz, voice.gain);
    }
}

fn main() {
    // Initialize logger
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(7);
    let mut engine = HarmonyEngine::new(0);

    // Two players join on easy notes
    let note_a = random_note_by_difficulty(Difficulty::Easy, &mut rng);
    let mut note_b = random_note_by_difficulty(Difficulty::Easy, &mut rng);
    while note_b == note_a {
        note_b = random_note_by_difficulty(Difficulty::Easy, &mut rng);
    }
    println!("assigned notes: {} and {}", note_a, note_b);

    let mut now = 0u64;
    let mut players = vec![
        PlayerSnapshot {
            id: "alice".to_string(),
            assigned_note: note_a.to_string(),
            activity_score: 0.9,
            cluster_duration_ms: 0.0,
        },
        PlayerSnapshot {
            id: "bob".to_string(),
            assigned_note: note_b.to_string(),
            activity_score: 0.2,
            cluster_duration_ms: 0.0,
        },
    ];

    // Alice dominates for a few seconds
    for _ in 0..10 {
        now += 500;
        for p in &mut players {
            p.cluster_duration_ms += 500.0;
        }
        engine.tick(&players, now);
    }
    print_state("after alice dominates", &engine);

    // Bob wakes up and competes
    players[1].activity_score = 0.85;
    for _ in 0..4 {
        now += 500;
        for p in &mut players {
            p.cluster_duration_ms += 500.0;
        }
        engine.tick(&players, now);
    }
    print_state("while alice and bob compete", &engine);

    // Everyone leaves; the space resolves home and idles
    for _ in 0..10 {
        now += 1000;
        engine.tick(&[], now);
    }
    print_state("after the space empties", &engine);
}
