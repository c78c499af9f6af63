//! Pairwise harmonic compatibility scoring
//!
//! Judges how well two notes combine inside the current key. Used by
//! presentation layers to color nearby players; the state machine never
//! reads it.

use crate::theory::note::{pitch_class, semitone_distance, Mode};
use crate::theory::scale::diatonic_triads;

/// Score how well two notes combine in a key, in [0, 1]
///
/// Rules in priority order:
/// - either note missing: 0.0
/// - identical spellings: 0.9
/// - both notes inside a diatonic triad of the key: graded by that triad's
///   scale position (tonic 0.95, subdominant/dominant 0.9,
///   supertonic/submediant 0.8, mediant 0.75, other 0.7); the first
///   matching degree counts
/// - a perfect fourth or fifth apart: 0.6
/// - a major or minor third apart: 0.5
/// - otherwise: 0.3
///
/// When the key has no diatonic scale (minor-spelled or unparseable key
/// string) the score is a flat 0.5. Interval checks use the ascending
/// distance from `note_a` to `note_b`, so the score is order-sensitive for
/// non-chord pairs.
pub fn compute_harmonic_compatibility(
    note_a: Option<&str>,
    note_b: Option<&str>,
    current_key: &str,
    mode: Mode,
) -> f32 {
    let (a, b) = match (note_a, note_b) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    if a == b {
        return 0.9;
    }

    let triads = match diatonic_triads(current_key, mode) {
        Some(triads) => triads,
        None => return 0.5,
    };

    let pc_a = pitch_class(a);
    let pc_b = pitch_class(b);

    if let (Some(pc_a), Some(pc_b)) = (pc_a, pc_b) {
        let shared = triads
            .iter()
            .position(|triad| triad.contains(pc_a) && triad.contains(pc_b));

        if let Some(degree) = shared {
            return match degree {
                0 => 0.95,
                3 | 4 => 0.9,
                1 | 5 => 0.8,
                2 => 0.75,
                _ => 0.7,
            };
        }

        match semitone_distance(pc_a, pc_b) {
            5 | 7 => return 0.6,
            3 | 4 => return 0.5,
            _ => {}
        }
    }

    0.3
}
