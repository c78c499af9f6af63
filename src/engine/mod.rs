//! The harmonic progression engine
//!
//! Stateful core of the system:
//! - Note clustering of participant snapshots
//! - The tick-driven harmonic state machine
//! - Tension-chord resolution for competing clusters
//!
//! One [`HarmonyEngine`] exists per harmonic space and owns that space's
//! `HarmonicState` together with the idle-progression cycler; independent
//! spaces must never share an engine.

pub mod cluster;
pub mod machine;
pub mod state;
pub mod tension;

pub use cluster::{compute_note_clusters, ClusterMember, NoteCluster, PlayerSnapshot};
pub use machine::{compute_harmonic_progression, IdleCycler};
pub use state::{create_initial_harmony, ClusterSummary, HarmonicState};
pub use tension::{compute_tension_chord, TensionChord};

use crate::config::EngineConfig;
use crate::error::HarmonyError;

/// The harmonic engine of one shared space
///
/// Consumes participant snapshots tick by tick and maintains the space's
/// single `HarmonicState`. All computation is synchronous and CPU-bound;
/// each tick runs to completion before the next begins.
///
/// # Example
///
/// ```
/// use chorus_harmony::{HarmonyEngine, PlayerSnapshot};
///
/// let mut engine = HarmonyEngine::new(0);
///
/// let players = vec![PlayerSnapshot {
///     id: "p1".to_string(),
///     assigned_note: "G".to_string(),
///     activity_score: 0.9,
///     cluster_duration_ms: 8000.0,
/// }];
///
/// let state = engine.tick(&players, 1000);
/// assert_eq!(state.current_key, "G");
/// ```
#[derive(Debug, Clone)]
pub struct HarmonyEngine {
    config: EngineConfig,
    state: HarmonicState,
    cycler: IdleCycler,
}

impl HarmonyEngine {
    /// Engine with default configuration, starting from C major
    pub fn new(now_ms: u64) -> Self {
        Self {
            config: EngineConfig::default(),
            state: create_initial_harmony(now_ms),
            cycler: IdleCycler::new(now_ms),
        }
    }

    /// Engine with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `HarmonyError::InvalidConfig` if the configuration fails
    /// validation.
    pub fn with_config(config: EngineConfig, now_ms: u64) -> Result<Self, HarmonyError> {
        config.validate()?;
        Ok(Self {
            config,
            state: create_initial_harmony(now_ms),
            cycler: IdleCycler::new(now_ms),
        })
    }

    /// The space's current harmonic state
    pub fn state(&self) -> &HarmonicState {
        &self.state
    }

    /// The engine's configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Advance one tick from raw participant snapshots
    ///
    /// Clusters the snapshots, then runs the state machine. Returns the new
    /// state, which is also retained as the engine's current state.
    pub fn tick(&mut self, players: &[PlayerSnapshot], now_ms: u64) -> &HarmonicState {
        let clusters = compute_note_clusters(players);
        self.advance(&clusters, now_ms)
    }

    /// Advance one tick from precomputed clusters
    pub fn advance(&mut self, clusters: &[NoteCluster], now_ms: u64) -> &HarmonicState {
        self.state = compute_harmonic_progression(
            &self.state,
            clusters,
            &mut self.cycler,
            &self.config,
            now_ms,
        );
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_starts_at_initial_harmony() {
        let engine = HarmonyEngine::new(42);
        assert_eq!(engine.state().current_key, "C");
        assert_eq!(engine.state().last_update, 42);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = EngineConfig {
            activity_threshold: -1.0,
            ..EngineConfig::default()
        };
        assert!(HarmonyEngine::with_config(config, 0).is_err());
    }

    #[test]
    fn test_independent_spaces_do_not_interact() {
        let mut room_a = HarmonyEngine::new(0);
        let mut room_b = HarmonyEngine::new(0);

        let players = vec![PlayerSnapshot {
            id: "p1".to_string(),
            assigned_note: "G".to_string(),
            activity_score: 0.9,
            cluster_duration_ms: 9000.0,
        }];

        room_a.tick(&players, 100);
        room_b.tick(&[], 100);

        assert_eq!(room_a.state().current_key, "G");
        assert_eq!(room_b.state().current_key, "C");
    }
}
