//! Per-player dominance metrics
//!
//! Measures how much a single participant is steering the shared harmony:
//! matching the current or target key makes a player dominant, and dominance
//! amplifies their influence on what everyone hears. The transport layer
//! supplies the activity score; the engine never computes it here.

use serde::{Deserialize, Serialize};

use crate::engine::state::HarmonicState;

/// A participant's pull on the shared harmony
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DominanceMetrics {
    /// Participant id
    pub player_id: String,
    /// Overall dominance in [0, 1]
    pub dominance_level: f32,
    /// Influence on the global audio in [0, 1]
    pub influence_level: f32,
    /// Whether the player's note matches the current or target key
    pub is_dominant: bool,
    /// Strength of the player's cluster in [0, 1]
    pub cluster_strength: f32,
}

/// Compute a participant's dominance metrics
///
/// Dominant players weigh activity and cluster strength at 40% each plus a
/// flat 0.2 for holding the key; others split evenly between activity and
/// cluster strength. Influence gets a 20% boost when dominant and a 40% cut
/// otherwise. With no harmony yet, all metrics are zero.
pub fn compute_dominance_level(
    player_id: &str,
    assigned_note: Option<&str>,
    activity_score: f32,
    harmony: Option<&HarmonicState>,
    cluster_strength: f32,
) -> DominanceMetrics {
    let harmony = match harmony {
        Some(h) => h,
        None => {
            return DominanceMetrics {
                player_id: player_id.to_string(),
                dominance_level: 0.0,
                influence_level: 0.0,
                is_dominant: false,
                cluster_strength: 0.0,
            }
        }
    };

    let is_dominant = assigned_note.is_some_and(|note| {
        harmony.current_key == note || harmony.target_key.as_deref() == Some(note)
    });

    let cluster_strength = cluster_strength.min(1.0);

    let dominance_level = if is_dominant {
        activity_score * 0.4 + cluster_strength * 0.4 + 0.2
    } else {
        activity_score * 0.5 + cluster_strength * 0.5
    };

    let influence_level = if is_dominant {
        dominance_level * 1.2
    } else {
        dominance_level * 0.6
    };

    DominanceMetrics {
        player_id: player_id.to_string(),
        dominance_level: dominance_level.min(1.0),
        influence_level: influence_level.min(1.0),
        is_dominant,
        cluster_strength,
    }
}
