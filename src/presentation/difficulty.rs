//! Note difficulty classification
//!
//! Rates every assignable note by how hard it is to reach from the C major
//! home key. Easy notes modulate directly, medium notes need one bridge,
//! hard notes need two or more. The game layer draws from these pools when
//! assigning notes to joining participants.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::modulation::Difficulty;

/// Difficulty rating of an assignable note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDifficulty {
    /// The note name
    pub note: String,
    /// Difficulty class relative to C major
    pub difficulty: Difficulty,
    /// Short functional description
    pub description: String,
    /// Whether the note is reachable from C without bridges
    #[serde(rename = "directModulationFromC")]
    pub direct_modulation_from_c: bool,
    /// Bridge keys required from C
    pub required_steps: u8,
}

/// The fixed difficulty table, in pool order
const NOTE_TABLE: [(&str, Difficulty, &str, bool, u8); 18] = [
    // Easy: the primary chords of C major and their relative minors
    ("C", Difficulty::Easy, "tonic, the home note", true, 0),
    ("G", Difficulty::Easy, "dominant, direct modulation", true, 0),
    ("F", Difficulty::Easy, "subdominant, direct modulation", true, 0),
    ("Am", Difficulty::Easy, "relative minor, direct modulation", true, 0),
    ("Em", Difficulty::Easy, "relative minor of G", true, 0),
    // Medium: one bridge required
    ("D", Difficulty::Medium, "supertonic, one bridge", false, 1),
    ("A", Difficulty::Medium, "submediant, one bridge", false, 1),
    ("E", Difficulty::Medium, "mediant, one bridge", false, 1),
    ("Bm", Difficulty::Medium, "leading-tone minor, one bridge", false, 1),
    ("Dm", Difficulty::Medium, "supertonic minor, one bridge", false, 1),
    // Hard: distant keys, two or more bridges
    ("C#", Difficulty::Hard, "distant key, two or more bridges", false, 2),
    ("F#", Difficulty::Hard, "distant key, two or more bridges", false, 2),
    ("G#", Difficulty::Hard, "distant key, two or more bridges", false, 2),
    ("A#", Difficulty::Hard, "distant key, two or more bridges", false, 2),
    ("Bb", Difficulty::Hard, "distant key, two or more bridges", false, 2),
    ("Eb", Difficulty::Hard, "distant key, two or more bridges", false, 2),
    ("Ab", Difficulty::Hard, "distant key, two or more bridges", false, 2),
    ("Db", Difficulty::Hard, "distant key, two or more bridges", false, 2),
];

/// Difficulty rating for a note
///
/// Unknown notes rate as hard with three required steps.
pub fn note_difficulty(note: &str) -> NoteDifficulty {
    NOTE_TABLE
        .iter()
        .find(|(name, ..)| *name == note)
        .map(|(name, difficulty, description, direct, steps)| NoteDifficulty {
            note: name.to_string(),
            difficulty: *difficulty,
            description: description.to_string(),
            direct_modulation_from_c: *direct,
            required_steps: *steps,
        })
        .unwrap_or_else(|| NoteDifficulty {
            note: note.to_string(),
            difficulty: Difficulty::Hard,
            description: "unknown note".to_string(),
            direct_modulation_from_c: false,
            required_steps: 3,
        })
}

/// All notes of a difficulty class, in table order
pub fn notes_by_difficulty(difficulty: Difficulty) -> Vec<&'static str> {
    NOTE_TABLE
        .iter()
        .filter(|(_, d, ..)| *d == difficulty)
        .map(|(name, ..)| *name)
        .collect()
}

/// Pick a random note of a difficulty class
///
/// The RNG is caller-supplied so note assignment stays outside the engine's
/// deterministic tick path.
pub fn random_note_by_difficulty<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> &'static str {
    let pool = notes_by_difficulty(difficulty);
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_notes() {
        let c = note_difficulty("C");
        assert_eq!(c.difficulty, Difficulty::Easy);
        assert!(c.direct_modulation_from_c);
        assert_eq!(c.required_steps, 0);

        let d = note_difficulty("D");
        assert_eq!(d.difficulty, Difficulty::Medium);
        assert_eq!(d.required_steps, 1);

        let fs = note_difficulty("F#");
        assert_eq!(fs.difficulty, Difficulty::Hard);
        assert_eq!(fs.required_steps, 2);
    }

    #[test]
    fn test_enharmonic_rows_are_distinct() {
        // Bb and A# are separate table entries
        assert_eq!(note_difficulty("Bb").note, "Bb");
        assert_eq!(note_difficulty("A#").note, "A#");
    }

    #[test]
    fn test_unknown_note_is_hard() {
        let x = note_difficulty("X");
        assert_eq!(x.difficulty, Difficulty::Hard);
        assert_eq!(x.required_steps, 3);
        assert!(!x.direct_modulation_from_c);
    }

    #[test]
    fn test_pools_partition_the_table() {
        let easy = notes_by_difficulty(Difficulty::Easy);
        let medium = notes_by_difficulty(Difficulty::Medium);
        let hard = notes_by_difficulty(Difficulty::Hard);

        assert_eq!(easy, vec!["C", "G", "F", "Am", "Em"]);
        assert_eq!(medium, vec!["D", "A", "E", "Bm", "Dm"]);
        assert_eq!(hard.len(), 8);
        assert_eq!(easy.len() + medium.len() + hard.len(), NOTE_TABLE.len());
    }

    #[test]
    fn test_random_pick_stays_in_pool() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let note = random_note_by_difficulty(Difficulty::Medium, &mut rng);
            assert!(notes_by_difficulty(Difficulty::Medium).contains(&note));
        }
    }
}
