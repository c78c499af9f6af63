//! Tension-chord resolution for competing clusters
//!
//! When two or more clusters pull the harmony toward different notes at
//! once, the resolver looks for the diatonic chord of the current key that
//! harmonizes all of them, then derives the short cadential progression that
//! leads there. Each scale degree has a fixed functional-harmony idiom; the
//! tables are data, not derivation.

use serde::{Deserialize, Serialize};

use super::cluster::NoteCluster;
use crate::theory::note::{pitch_class, Mode};
use crate::theory::scale::{diatonic_triads, ChordSymbol, Triad};

/// A tension chord and the cadence leading to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TensionChord {
    /// Cadential progression toward the resolving chord
    pub progression: Vec<ChordSymbol>,
    /// Name of the resolving chord ("G7", "Dm", ...)
    pub chord_name: String,
}

/// Find the chord that harmonizes all competing clusters in the current key
///
/// Requires at least two competitors; with fewer, or when any lookup fails
/// (unparseable key or note, no diatonic chord containing every competitor),
/// the dominant-seventh default is returned. Never fails.
///
/// Matching prefers the diatonic triad sharing the most pitch classes with
/// the competitor set; ties keep the first match in scale-degree order.
pub fn compute_tension_chord(
    competitors: &[NoteCluster],
    current_key: &str,
    current_mode: Mode,
) -> TensionChord {
    if competitors.len() < 2 {
        return dominant_default(None);
    }

    let triads = match diatonic_triads(current_key, current_mode) {
        Some(triads) => triads,
        None => {
            log::warn!(
                "No diatonic scale for {} {:?}; answering dominant default",
                current_key,
                current_mode
            );
            return dominant_default(None);
        }
    };

    // Competitor notes parse as plain pitch names; a minor-spelled note can
    // never sit inside a triad and pushes the result toward the default.
    let competitor_pcs: Vec<Option<u8>> = competitors
        .iter()
        .map(|c| pitch_class(&c.note))
        .collect();

    let matching: Vec<(usize, &Triad)> = triads
        .iter()
        .enumerate()
        .filter(|(_, triad)| {
            competitor_pcs
                .iter()
                .all(|pc| pc.map_or(false, |pc| triad.contains(pc)))
        })
        .collect();

    let (degree, chord) = match matching.first() {
        None => return dominant_default(Some(&triads)),
        Some(first) => {
            // Most common tones wins; strictly-greater keeps the first on ties
            let mut best = *first;
            for candidate in &matching[1..] {
                if common_tones(candidate.1, &competitor_pcs) > common_tones(best.1, &competitor_pcs)
                {
                    best = *candidate;
                }
            }
            best
        }
    };

    log::debug!(
        "Tension between {} clusters resolves to {} (degree {}) in {} {:?}",
        competitors.len(),
        chord.name(),
        degree + 1,
        current_key,
        current_mode
    );

    use ChordSymbol::*;
    let (progression, chord_name) = match degree {
        // Tonic: push through the dominant seventh
        0 => (vec![DominantSeventh], triads[4].seventh_name()),
        // Supertonic: dominant preparation
        1 => (vec![Dominant, Tonic], triads[4].name()),
        // Mediant: the long way around
        2 => (
            vec![Submediant, Subdominant, Dominant, Tonic],
            triads[2].name(),
        ),
        // Subdominant: ii-V
        3 => (vec![Supertonic, Dominant], triads[1].name()),
        // Dominant: resolve home
        4 => (vec![Tonic], triads[0].name()),
        // Submediant: subdominant then dominant
        5 => (vec![Subdominant, Dominant, Tonic], triads[5].name()),
        // Leading tone and anything else: ii-V-I
        _ => (vec![Supertonic, Dominant, Tonic], triads[1].name()),
    };

    TensionChord {
        progression,
        chord_name,
    }
}

fn common_tones(triad: &Triad, competitor_pcs: &[Option<u8>]) -> usize {
    triad
        .pitch_classes()
        .iter()
        .filter(|pc| competitor_pcs.contains(&Some(**pc)))
        .count()
}

/// The dominant-seventh fallback, named from the scale when available
fn dominant_default(triads: Option<&[Triad]>) -> TensionChord {
    TensionChord {
        progression: vec![ChordSymbol::DominantSeventh],
        chord_name: triads
            .map(|t| t[4].seventh_name())
            .unwrap_or_else(|| "G7".to_string()),
    }
}
