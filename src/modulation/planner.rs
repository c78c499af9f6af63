//! Modulation path planning
//!
//! Computes the functional path from one key to another and classifies how
//! hard the move is:
//!
//! 1. Direct neighbors on the fifths cycle modulate directly (easy)
//! 2. A shared bridge key gives a one-stop path (medium)
//! 3. Otherwise a breadth-first search over fifth/relative-minor edges,
//!    bounded to three hops, finds the shortest path (hard)
//!
//! The planner is total: when the search exhausts its bound it answers with
//! the degenerate `[from, to]` path rather than failing.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use super::graph;

/// Paths found by BFS never exceed this many keys (origin included)
const MAX_SEARCH_DEPTH: usize = 3;

/// Modulation difficulty classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Direct relationship, no bridges required
    Easy,
    /// Exactly one bridge key between source and target
    Medium,
    /// Multi-hop path (or degenerate fallback) required
    Hard,
}

/// A planned route between two keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModulationPath {
    /// Source key
    pub from: String,
    /// Target key
    pub to: String,
    /// Keys to pass through, ending at the target
    pub steps: Vec<String>,
    /// How hard the move is
    pub difficulty: Difficulty,
    /// Intermediate keys that must be established on the way
    pub required_bridges: Vec<String>,
}

/// Compute the functional modulation path from `from_key` to `target_key`
///
/// Never fails: unknown keys and exhausted searches fall through to the
/// degenerate direct path, classified hard.
///
/// # Example
///
/// ```
/// use chorus_harmony::modulation::{compute_modulation_path, Difficulty};
///
/// let path = compute_modulation_path("G", "C");
/// assert_eq!(path.difficulty, Difficulty::Easy);
///
/// let path = compute_modulation_path("F#", "C");
/// assert_eq!(path.difficulty, Difficulty::Hard);
/// assert!(!path.required_bridges.is_empty());
/// ```
pub fn compute_modulation_path(target_key: &str, from_key: &str) -> ModulationPath {
    // Staying put is always easy, whatever the spelling. The bridge table
    // would otherwise classify a minor key against itself as medium.
    if from_key == target_key || graph::is_directly_reachable(from_key, target_key) {
        return ModulationPath {
            from: from_key.to_string(),
            to: target_key.to_string(),
            steps: vec![target_key.to_string()],
            difficulty: Difficulty::Easy,
            required_bridges: Vec::new(),
        };
    }

    if let Some(bridge) = graph::direct_bridge(from_key, target_key) {
        return ModulationPath {
            from: from_key.to_string(),
            to: target_key.to_string(),
            steps: vec![bridge.to_string(), target_key.to_string()],
            difficulty: Difficulty::Medium,
            required_bridges: vec![bridge.to_string()],
        };
    }

    let steps = find_multi_step_path(from_key, target_key);
    log::debug!(
        "Modulation {} -> {} needs {} steps: {:?}",
        from_key,
        target_key,
        steps.len(),
        steps
    );

    let required_bridges = steps[..steps.len() - 1].to_vec();
    ModulationPath {
        from: from_key.to_string(),
        to: target_key.to_string(),
        steps,
        difficulty: Difficulty::Hard,
        required_bridges,
    }
}

/// Breadth-first search over the key graph, bounded to [`MAX_SEARCH_DEPTH`]
///
/// FIFO order guarantees shortest-by-hop-count; ties break by enqueue order
/// (fifth up, fifth down, relative minor). Paths include the origin. Falls
/// back to `[from, to]` when the bound is exhausted.
fn find_multi_step_path(from: &str, to: &str) -> Vec<String> {
    let mut queue: VecDeque<Vec<String>> = VecDeque::new();
    let mut visited: HashSet<String> = HashSet::new();

    queue.push_back(vec![from.to_string()]);
    visited.insert(from.to_string());

    while let Some(path) = queue.pop_front() {
        let current = path.last().expect("paths are never empty");

        if current == to {
            return path;
        }

        if path.len() >= MAX_SEARCH_DEPTH {
            continue;
        }

        for next in graph::neighbors(current) {
            if visited.contains(next) {
                continue;
            }
            visited.insert(next.to_string());

            let mut extended = path.clone();
            extended.push(next.to_string());
            queue.push_back(extended);
        }
    }

    vec![from.to_string(), to.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_is_easy() {
        for key in graph::CIRCLE_OF_FIFTHS {
            let path = compute_modulation_path(key, key);
            assert_eq!(path.difficulty, Difficulty::Easy, "major key {}", key);
            assert!(path.required_bridges.is_empty());
        }
        // Minor spellings too, despite the bridge table matching them
        let path = compute_modulation_path("Am", "Am");
        assert_eq!(path.difficulty, Difficulty::Easy);
        assert!(path.required_bridges.is_empty());
    }

    #[test]
    fn test_direct_modulation_is_easy() {
        let path = compute_modulation_path("G", "C");
        assert_eq!(path.difficulty, Difficulty::Easy);
        assert_eq!(path.steps, vec!["G".to_string()]);
        assert!(path.required_bridges.is_empty());
    }

    #[test]
    fn test_one_bridge_is_medium() {
        // C to D via G
        let path = compute_modulation_path("D", "C");
        assert_eq!(path.difficulty, Difficulty::Medium);
        assert_eq!(path.steps, vec!["G".to_string(), "D".to_string()]);
        assert_eq!(path.required_bridges, vec!["G".to_string()]);
    }

    #[test]
    fn test_distant_key_is_hard() {
        // C to F#: no direct relation, no shared bridge, BFS exhausts its
        // three-hop bound and falls back to the degenerate path
        let path = compute_modulation_path("F#", "C");
        assert_eq!(path.difficulty, Difficulty::Hard);
        assert_eq!(path.steps.last().unwrap(), "F#");
        assert!(!path.required_bridges.is_empty());
    }

    #[test]
    fn test_bfs_exhaustion_falls_back() {
        // C to A: no direct relation, no shared bridge row, and A sits three
        // fifths out, past the search bound. The degenerate path keeps the
        // origin as a required bridge.
        let path = compute_modulation_path("A", "C");
        assert_eq!(path.difficulty, Difficulty::Hard);
        assert_eq!(
            path.steps,
            vec!["C".to_string(), "A".to_string()],
            "fallback path expected"
        );
        assert_eq!(path.required_bridges, vec!["C".to_string()]);
    }

    #[test]
    fn test_never_longer_than_four_entries() {
        let keys: Vec<String> = graph::CIRCLE_OF_FIFTHS
            .iter()
            .map(|k| k.to_string())
            .chain(
                graph::CIRCLE_OF_FIFTHS
                    .iter()
                    .filter_map(|k| crate::theory::note::relative_minor(k))
                    .map(|k| k.to_string()),
            )
            .collect();

        for from in &keys {
            for to in &keys {
                let path = compute_modulation_path(to, from);
                assert!(
                    path.steps.len() <= 4,
                    "path {} -> {} too long: {:?}",
                    from,
                    to,
                    path.steps
                );
                assert!(!path.steps.is_empty());
            }
        }
    }

    #[test]
    fn test_unknown_keys_fall_back() {
        let path = compute_modulation_path("X", "Y");
        assert_eq!(path.difficulty, Difficulty::Hard);
        assert_eq!(path.steps, vec!["Y".to_string(), "X".to_string()]);
    }
}
