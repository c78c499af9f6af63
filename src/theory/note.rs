//! Note names and pitch-class arithmetic
//!
//! Notes are identified by their spelled names ("C", "F#", "Bb"); keys may
//! carry a trailing `m` for minor ("Am", "C#m"). Enharmonic spellings are
//! deliberately distinct identifiers throughout the engine — "C#" and "Db"
//! never compare equal — so parsing maps spellings onto pitch classes without
//! canonicalizing the strings themselves.

use serde::{Deserialize, Serialize};

/// Major/minor quality of a key or scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Major mode
    Major,
    /// Minor (natural) mode
    Minor,
}

/// Sharp-spelled names for the 12 pitch classes (0 = C, ..., 11 = B)
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Parse a plain note name into its pitch class (0-11)
///
/// Accepts a letter A-G with an optional single `#` or `b` accidental,
/// including the theoretical spellings "E#", "B#", "Cb", "Fb". A trailing
/// `m` is NOT accepted here; minor-suffixed names are key names, not note
/// names (see [`parse_key`]).
///
/// Returns `None` for anything else.
pub fn pitch_class(name: &str) -> Option<u8> {
    let mut chars = name.chars();
    let letter = chars.next()?;

    let base: i8 = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let accidental: i8 = match chars.next() {
        None => 0,
        Some('#') => 1,
        Some('b') => -1,
        Some(_) => return None,
    };

    if chars.next().is_some() {
        return None;
    }

    Some((base + accidental).rem_euclid(12) as u8)
}

/// Parse a key name into its root pitch class and mode
///
/// "C" → (0, Major), "Am" → (9, Minor), "Bb" → (10, Major),
/// "F#m" → (6, Minor). Returns `None` for unparseable names.
pub fn parse_key(name: &str) -> Option<(u8, Mode)> {
    if let Some(pc) = pitch_class(name) {
        return Some((pc, Mode::Major));
    }

    let root = name.strip_suffix('m')?;
    pitch_class(root).map(|pc| (pc, Mode::Minor))
}

/// Ascending semitone distance from one pitch class to another (0-11)
pub fn semitone_distance(from_pc: u8, to_pc: u8) -> u8 {
    (to_pc + 12 - from_pc) % 12
}

/// Relative minor of a major key, as a spelled key name
///
/// This is a fixed spelling table, not an arithmetic derivation: the system
/// it models pairs "A#" with "F#m" and uses the theoretical "E#m"/"B#m"
/// spellings, so regenerating entries from pitch classes would change
/// behavior in the bridge graph.
pub fn relative_minor(major_key: &str) -> Option<&'static str> {
    let minor = match major_key {
        "C" => "Am",
        "G" => "Em",
        "D" => "Bm",
        "A" => "F#m",
        "E" => "C#m",
        "B" => "G#m",
        "F#" => "D#m",
        "C#" => "A#m",
        "G#" => "E#m",
        "D#" => "B#m",
        "A#" => "F#m",
        "F" => "Dm",
        _ => return None,
    };
    Some(minor)
}

/// Equal-temperament frequency of a pitch class at a given octave
///
/// A4 = 440 Hz; octave 4 spans C4 (261.63 Hz) through B4.
pub fn note_frequency(pc: u8, octave: i32) -> f32 {
    let midi = (octave + 1) * 12 + pc as i32;
    440.0 * 2.0f32.powf((midi - 69) as f32 / 12.0)
}
