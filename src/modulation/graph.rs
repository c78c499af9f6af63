//! Static key graph: the circle of fifths and its bridge relationships
//!
//! All relationships here are fixed data. The bridge table in particular is
//! not uniformly derivable from pitch-class arithmetic (several relative-minor
//! entries and theoretical spellings deviate), so it is preserved as a table
//! rather than generated.

use crate::theory::note::relative_minor;

/// The 12 major keys ordered by ascending fifths
pub const CIRCLE_OF_FIFTHS: [&str; 12] = [
    "C", "G", "D", "A", "E", "B", "F#", "C#", "G#", "D#", "A#", "F",
];

fn fifths_index(key: &str) -> Option<usize> {
    CIRCLE_OF_FIFTHS.iter().position(|&k| k == key)
}

/// Whether `to` is directly reachable from `from`
///
/// True iff both keys sit on the fifths cycle and their wraparound distance
/// is at most one step (a perfect fourth or fifth apart). Minor-spelled keys
/// are off the cycle and never directly reachable.
pub fn is_directly_reachable(from: &str, to: &str) -> bool {
    let (from_idx, to_idx) = match (fifths_index(from), fifths_index(to)) {
        (Some(f), Some(t)) => (f, t),
        _ => return false,
    };

    let diff = from_idx.abs_diff(to_idx);
    diff <= 1 || diff == CIRCLE_OF_FIFTHS.len() - 1
}

/// Keys commonly reachable from a given key in one step
///
/// Each entry lists the dominant, subdominant, and their relative minors —
/// the keys that share enough chords for a smooth single modulation.
fn common_bridges(key: &str) -> &'static [&'static str] {
    match key {
        "C" => &["G", "F", "Am", "Em"],
        "G" => &["D", "C", "Em", "Bm"],
        "F" => &["Bb", "C", "Dm", "Am"],
        "D" => &["A", "G", "Bm", "F#m"],
        "A" => &["E", "D", "F#m", "C#m"],
        "E" => &["B", "A", "C#m", "G#m"],
        "B" => &["F#", "E", "G#m", "D#m"],
        "F#" => &["C#", "B", "D#m", "A#m"],
        "C#" => &["G#", "F#", "A#m", "E#m"],
        "G#" => &["D#", "C#", "E#m", "B#m"],
        "D#" => &["A#", "G#", "B#m", "F#m"],
        "A#" => &["F", "D#", "F#m", "C#m"],
        "Am" => &["Em", "C", "F", "Dm"],
        "Em" => &["Bm", "G", "C", "Am"],
        "Dm" => &["Am", "F", "Bb", "Gm"],
        "Bm" => &["F#m", "D", "G", "Em"],
        _ => &[],
    }
}

/// First key commonly reachable from both `from` and `to`, if any
pub fn direct_bridge(from: &str, to: &str) -> Option<&'static str> {
    let from_bridges = common_bridges(from);
    let to_bridges = common_bridges(to);

    from_bridges
        .iter()
        .find(|b| to_bridges.contains(b))
        .copied()
}

/// Neighbor keys for multi-hop search
///
/// Fifth up, fifth down, and the relative minor, in that order (the order
/// fixes BFS tie-breaking). Keys off the fifths cycle have no neighbors and
/// dead-end the search.
pub fn neighbors(key: &str) -> Vec<&'static str> {
    let idx = match fifths_index(key) {
        Some(idx) => idx,
        None => return Vec::new(),
    };

    let len = CIRCLE_OF_FIFTHS.len();
    let mut next = vec![
        CIRCLE_OF_FIFTHS[(idx + 1) % len],
        CIRCLE_OF_FIFTHS[(idx + len - 1) % len],
    ];

    if let Some(minor) = relative_minor(key) {
        next.push(minor);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directly_reachable_adjacent_fifths() {
        assert!(is_directly_reachable("C", "G"));
        assert!(is_directly_reachable("C", "F")); // wraparound
        assert!(is_directly_reachable("C", "C"));
        assert!(is_directly_reachable("F", "C"));
    }

    #[test]
    fn test_not_directly_reachable() {
        assert!(!is_directly_reachable("C", "D"));
        assert!(!is_directly_reachable("C", "F#"));
        assert!(!is_directly_reachable("C", "Am")); // off the cycle
        assert!(!is_directly_reachable("X", "C"));
    }

    #[test]
    fn test_direct_bridge() {
        // C and D share G (and Em and Bm; G is listed first for C)
        assert_eq!(direct_bridge("C", "D"), Some("G"));
        // C and F# share nothing
        assert_eq!(direct_bridge("C", "F#"), None);
        // Minor keys participate through their own rows
        assert_eq!(direct_bridge("Am", "Em"), Some("C"));
    }

    #[test]
    fn test_neighbors_order() {
        // fifth up, fifth down, relative minor
        assert_eq!(neighbors("C"), vec!["G", "F", "Am"]);
        assert_eq!(neighbors("F"), vec!["C", "A#", "Dm"]);
    }

    #[test]
    fn test_neighbors_off_cycle() {
        assert!(neighbors("Am").is_empty());
        assert!(neighbors("X").is_empty());
    }
}
