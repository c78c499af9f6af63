//! The shared harmonic state and its cadence tables
//!
//! `HarmonicState` is the single piece of persistent state a harmonic space
//! carries. Transitions never mutate it; they build the next value from the
//! previous one, so prior states stay valid for debugging or audit.

use serde::{Deserialize, Serialize};

use crate::theory::note::{parse_key, semitone_distance, Mode};
use crate::theory::scale::ChordSymbol;

/// The key every space ultimately resolves toward
pub const RESOLUTION_TARGET: &str = "C";

/// Snapshot of an above-threshold cluster at the last transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    /// The cluster's note
    pub note: String,
    /// Cluster strength at transition time
    pub strength: f32,
}

/// The globally shared harmonic state of one space
///
/// Owned and advanced only by its space's engine; every other component
/// reads a reference or a serialized copy. Field names on the wire follow
/// the realtime protocol (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonicState {
    /// Prevailing key ("C", "F#", "Am", ...)
    pub current_key: String,
    /// Prevailing mode
    pub current_mode: Mode,
    /// Key a single dominant cluster is driving toward; `None` while
    /// resolving tension or idling
    pub target_key: Option<String>,
    /// Chord sequence currently being played out, active step first
    pub progression: Vec<ChordSymbol>,
    /// Harmonic competition level: 0 when resolved or idle, 0.7 while
    /// clusters compete
    pub tension: f32,
    /// The key this space resolves toward when it empties
    pub resolution_target: String,
    /// Timestamp of the last transition, in milliseconds
    pub last_update: u64,
    /// Above-threshold clusters at the last transition
    pub active_clusters: Vec<ClusterSummary>,
}

/// The harmonic state a space starts from: C major, tonic only
pub fn create_initial_harmony(now_ms: u64) -> HarmonicState {
    HarmonicState {
        current_key: RESOLUTION_TARGET.to_string(),
        current_mode: Mode::Major,
        target_key: None,
        progression: vec![ChordSymbol::Tonic],
        tension: 0.0,
        resolution_target: RESOLUTION_TARGET.to_string(),
        last_update: now_ms,
        active_clusters: Vec::new(),
    }
}

/// Cadence that walks an abandoned key home to the tonic
///
/// Keyed by the specific departure key; departures without an entry drop
/// straight to the tonic chord.
pub fn resolve_to_tonic(target_key: &str, from_key: &str) -> Vec<ChordSymbol> {
    use ChordSymbol::*;

    match (from_key, target_key) {
        ("F", "C") => vec![Subdominant, Dominant, Tonic],
        ("G", "C") => vec![Dominant, Tonic],
        ("D", "C") => vec![Supertonic, Dominant, Tonic],
        ("A", "C") => vec![Submediant, Dominant, Tonic],
        _ => vec![Tonic],
    }
}

/// Cadence for a direct modulation between two keys
///
/// The cadence depends on the ascending interval from the old key's root to
/// the new one: a perfect fourth pivots over the subdominant, a perfect
/// fifth over the dominant, a major second through ii-V; anything else takes
/// the dominant cadence. Unparseable keys degrade to the bare tonic.
pub fn modulate_to_key(from_key: &str, to_key: &str, mode: Mode) -> Vec<ChordSymbol> {
    use ChordSymbol::*;

    let (from_pc, to_pc) = match (parse_key(from_key), parse_key(to_key)) {
        (Some((from_pc, _)), Some((to_pc, _))) => (from_pc, to_pc),
        _ => {
            log::warn!("Cannot modulate {} -> {}; holding tonic", from_key, to_key);
            return vec![Tonic];
        }
    };

    match (semitone_distance(from_pc, to_pc), mode) {
        // Perfect fourth
        (5, Mode::Major) => vec![Tonic, Subdominant, Tonic],
        (5, Mode::Minor) => vec![TonicMinor, SubdominantMinor, TonicMinor],
        // Perfect fifth
        (7, Mode::Major) => vec![Tonic, Dominant, Tonic],
        (7, Mode::Minor) => vec![TonicMinor, DominantMinor, TonicMinor],
        // Major second
        (2, Mode::Major) => vec![Tonic, Supertonic, Dominant, Tonic],
        (2, Mode::Minor) => vec![TonicMinor, SupertonicDim, DominantMinor, TonicMinor],
        // Everything else takes the dominant cadence
        (_, Mode::Major) => vec![Tonic, Dominant, Tonic],
        (_, Mode::Minor) => vec![TonicMinor, DominantMinor, TonicMinor],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ChordSymbol::*;

    #[test]
    fn test_initial_harmony() {
        let state = create_initial_harmony(1234);
        assert_eq!(state.current_key, "C");
        assert_eq!(state.current_mode, Mode::Major);
        assert_eq!(state.target_key, None);
        assert_eq!(state.progression, vec![Tonic]);
        assert_eq!(state.tension, 0.0);
        assert_eq!(state.resolution_target, "C");
        assert_eq!(state.last_update, 1234);
        assert!(state.active_clusters.is_empty());
    }

    #[test]
    fn test_resolve_to_tonic_table() {
        assert_eq!(resolve_to_tonic("C", "F"), vec![Subdominant, Dominant, Tonic]);
        assert_eq!(resolve_to_tonic("C", "G"), vec![Dominant, Tonic]);
        assert_eq!(resolve_to_tonic("C", "D"), vec![Supertonic, Dominant, Tonic]);
        assert_eq!(resolve_to_tonic("C", "A"), vec![Submediant, Dominant, Tonic]);
        assert_eq!(resolve_to_tonic("C", "F#"), vec![Tonic]);
        assert_eq!(resolve_to_tonic("C", "Am"), vec![Tonic]);
    }

    #[test]
    fn test_modulate_perfect_fifth() {
        assert_eq!(
            modulate_to_key("C", "G", Mode::Major),
            vec![Tonic, Dominant, Tonic]
        );
        assert_eq!(
            modulate_to_key("C", "G", Mode::Minor),
            vec![TonicMinor, DominantMinor, TonicMinor]
        );
    }

    #[test]
    fn test_modulate_perfect_fourth() {
        // C up to F is a perfect fourth
        assert_eq!(
            modulate_to_key("C", "F", Mode::Major),
            vec![Tonic, Subdominant, Tonic]
        );
        // G up to C as well: the distance is ascending
        assert_eq!(
            modulate_to_key("G", "C", Mode::Major),
            vec![Tonic, Subdominant, Tonic]
        );
    }

    #[test]
    fn test_modulate_major_second() {
        assert_eq!(
            modulate_to_key("C", "D", Mode::Major),
            vec![Tonic, Supertonic, Dominant, Tonic]
        );
    }

    #[test]
    fn test_modulate_default_cadence() {
        // C to E is a major third: no special cadence
        assert_eq!(
            modulate_to_key("C", "E", Mode::Major),
            vec![Tonic, Dominant, Tonic]
        );
        // Minor-spelled targets parse by their root and usually land here
        assert_eq!(
            modulate_to_key("C", "Am", Mode::Major),
            vec![Tonic, Dominant, Tonic]
        );
    }

    #[test]
    fn test_modulate_unparseable_holds_tonic() {
        assert_eq!(modulate_to_key("C", "X", Mode::Major), vec![Tonic]);
        assert_eq!(modulate_to_key("?", "G", Mode::Minor), vec![Tonic]);
    }

    #[test]
    fn test_wire_field_names() {
        let state = create_initial_harmony(0);
        let json = serde_json::to_value(&state).unwrap();

        assert!(json.get("currentKey").is_some());
        assert!(json.get("currentMode").is_some());
        assert!(json.get("targetKey").is_some());
        assert!(json.get("resolutionTarget").is_some());
        assert!(json.get("lastUpdate").is_some());
        assert!(json.get("activeClusters").is_some());
        assert_eq!(json["currentMode"], "major");
        assert_eq!(json["progression"][0], "I");
    }
}
