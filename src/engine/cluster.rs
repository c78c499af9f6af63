//! Note clustering
//!
//! Groups participant snapshots by assigned note and scores each group's
//! pull on the shared harmony. Clusters are recomputed from scratch every
//! tick and never mutated in place.

use serde::{Deserialize, Serialize};

/// Duration at which the dwell-time component saturates (10 seconds)
const DURATION_REFERENCE_MS: f32 = 10_000.0;

/// Member count at which the size component saturates
const SIZE_REFERENCE: f32 = 10.0;

/// Strength weights: activity / duration / size
const ACTIVITY_WEIGHT: f32 = 0.4;
const DURATION_WEIGHT: f32 = 0.3;
const SIZE_WEIGHT: f32 = 0.3;

/// Per-tick participant snapshot delivered by the transport layer
///
/// The transport is responsible for computing `activity_score` from movement
/// and `assigned_note` from its id-to-note scheme, and for filtering and
/// deduplicating ids; the engine does not validate these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// Participant id
    pub id: String,
    /// Assigned note name ("C", "F#", "Am", ...)
    pub assigned_note: String,
    /// Activity score in [0, 1]
    pub activity_score: f32,
    /// Time spent in the current cluster, in milliseconds
    #[serde(rename = "clusterDuration")]
    pub cluster_duration_ms: f32,
}

/// A participant's contribution to a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMember {
    /// Participant id
    pub id: String,
    /// Activity score in [0, 1]
    pub activity_score: f32,
    /// Time spent in the cluster, in milliseconds
    #[serde(rename = "clusterDuration")]
    pub cluster_duration_ms: f32,
}

/// Participants sharing an assigned note, with aggregate scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCluster {
    /// The shared assigned note
    pub note: String,
    /// Members of the cluster, in snapshot order
    #[serde(rename = "players")]
    pub members: Vec<ClusterMember>,
    /// Sum of member activity scores
    pub total_activity: f32,
    /// Mean member dwell time in milliseconds
    #[serde(rename = "averageDuration")]
    pub average_duration_ms: f32,
    /// Member count
    pub size: usize,
    /// Aggregate pull on the harmony, in [0, 1]
    pub strength: f32,
}

/// Group participants by assigned note and score each group
///
/// Pure function of the snapshot; carries no state between ticks. Grouping
/// is by exact string match — enharmonic spellings form distinct clusters.
/// Output order follows first appearance of each note in the input;
/// consumers must not depend on it.
///
/// Strength is the weighted combination of mean activity (40%), dwell time
/// capped at a 10 second reference (30%), and size capped at 10 members
/// (30%), clamped to [0, 1].
pub fn compute_note_clusters(players: &[PlayerSnapshot]) -> Vec<NoteCluster> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: std::collections::HashMap<&str, Vec<&PlayerSnapshot>> =
        std::collections::HashMap::new();

    for player in players {
        let entry = groups.entry(player.assigned_note.as_str()).or_default();
        if entry.is_empty() {
            order.push(player.assigned_note.as_str());
        }
        entry.push(player);
    }

    order
        .into_iter()
        .map(|note| {
            let members = &groups[note];
            let size = members.len();

            let total_activity: f32 = members.iter().map(|p| p.activity_score).sum();
            let average_duration_ms =
                members.iter().map(|p| p.cluster_duration_ms).sum::<f32>() / size as f32;

            let activity_norm = total_activity / (size as f32).max(1.0);
            let duration_norm = (average_duration_ms / DURATION_REFERENCE_MS).min(1.0);
            let size_norm = (size as f32 / SIZE_REFERENCE).min(1.0);

            let strength = (activity_norm * ACTIVITY_WEIGHT
                + duration_norm * DURATION_WEIGHT
                + size_norm * SIZE_WEIGHT)
                .min(1.0);

            NoteCluster {
                note: note.to_string(),
                members: members
                    .iter()
                    .map(|p| ClusterMember {
                        id: p.id.clone(),
                        activity_score: p.activity_score,
                        cluster_duration_ms: p.cluster_duration_ms,
                    })
                    .collect(),
                total_activity,
                average_duration_ms,
                size,
                strength,
            }
        })
        .collect()
}
