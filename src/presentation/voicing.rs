//! Chord voicing for the synthesis collaborator
//!
//! Turns the current harmonic state into the triad voices (frequency and
//! gain per note) the external synthesizer plays. This is pure pitch
//! arithmetic; no audio is rendered here.

use serde::{Deserialize, Serialize};

use crate::engine::state::HarmonicState;
use crate::theory::note::{note_frequency, parse_key, Mode};
use crate::theory::scale::{Triad, TriadQuality};

/// One voice of a chord
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Frequency in Hz
    #[serde(rename = "freq")]
    pub freq_hz: f32,
    /// Relative gain in [0, 1]
    pub gain: f32,
}

/// The default C major voicing (C4, E4, G4)
fn default_voicing() -> Vec<Voice> {
    vec![
        Voice {
            freq_hz: 261.63,
            gain: 0.5,
        },
        Voice {
            freq_hz: 329.63,
            gain: 0.4,
        },
        Voice {
            freq_hz: 392.0,
            gain: 0.3,
        },
    ]
}

/// Voice the current key's triad in octave 4
///
/// The chord is named by combining the current key with the mode suffix; a
/// combination that does not name a chord (a minor-spelled key in minor
/// mode, an unparseable key) falls back to the default C major voicing.
/// Gains taper from the root down: 0.5, 0.25, 0.17.
pub fn chord_voicing(harmony: &HarmonicState) -> Vec<Voice> {
    let chord_name = match harmony.current_mode {
        Mode::Major => harmony.current_key.clone(),
        Mode::Minor => format!("{}m", harmony.current_key),
    };

    let (root_pc, quality) = match parse_key(&chord_name) {
        Some((pc, Mode::Major)) => (pc, TriadQuality::Major),
        Some((pc, Mode::Minor)) => (pc, TriadQuality::Minor),
        None => {
            log::warn!("No chord for key {:?}; voicing default", chord_name);
            return default_voicing();
        }
    };

    let triad = Triad { root_pc, quality };

    triad
        .pitch_classes()
        .iter()
        .enumerate()
        .map(|(i, pc)| Voice {
            freq_hz: note_frequency(*pc, 4),
            gain: 0.5 / (i + 1) as f32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::create_initial_harmony;

    #[test]
    fn test_initial_state_voices_c_major() {
        let harmony = create_initial_harmony(0);
        let voices = chord_voicing(&harmony);

        assert_eq!(voices.len(), 3);
        assert!((voices[0].freq_hz - 261.63).abs() < 0.01); // C4
        assert!((voices[1].freq_hz - 329.63).abs() < 0.01); // E4
        assert!((voices[2].freq_hz - 392.0).abs() < 0.01); // G4
        assert_eq!(voices[0].gain, 0.5);
        assert!(voices[1].gain < voices[0].gain);
    }

    #[test]
    fn test_minor_mode_voices_minor_triad() {
        let mut harmony = create_initial_harmony(0);
        harmony.current_key = "A".to_string();
        harmony.current_mode = Mode::Minor;

        let voices = chord_voicing(&harmony);
        // Every chord tone is voiced in octave 4
        assert!((voices[0].freq_hz - 440.0).abs() < 0.01); // A4
        assert!((voices[1].freq_hz - 261.63).abs() < 0.01); // C4
        assert!((voices[2].freq_hz - 329.63).abs() < 0.01); // E4
    }

    #[test]
    fn test_invalid_combination_falls_back() {
        let mut harmony = create_initial_harmony(0);
        // A minor-spelled key in minor mode names no chord ("Amm")
        harmony.current_key = "Am".to_string();
        harmony.current_mode = Mode::Minor;

        assert_eq!(chord_voicing(&harmony), default_voicing());
    }

    #[test]
    fn test_minor_spelled_key_in_major_mode_is_minor_chord() {
        let mut harmony = create_initial_harmony(0);
        harmony.current_key = "Am".to_string();

        let voices = chord_voicing(&harmony);
        // A-C-E, not the default
        assert!((voices[0].freq_hz - 440.0).abs() < 0.01);
        assert!((voices[1].freq_hz - 261.63).abs() < 0.01);
    }
}
