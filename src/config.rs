//! Configuration parameters for the harmonic progression engine

use crate::error::HarmonyError;

/// Engine configuration parameters
///
/// The thresholds here are product tuning knobs with no derived "correct"
/// value; the defaults are the values the system shipped with.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    // Clustering
    /// Minimum cluster strength for a cluster to count as active (default: 0.3)
    /// Clusters at or below this threshold are treated as silence
    pub activity_threshold: f32,

    /// Competition ratio against the strongest cluster (default: 0.7)
    /// An active cluster competes when its strength exceeds
    /// `ratio * strongest.strength`
    pub competition_ratio: f32,

    // Idle progression
    /// Wall-clock duration of one idle-progression chord step in
    /// milliseconds (default: 2000)
    pub idle_step_ms: u64,
}

impl EngineConfig {
    /// Validate configuration parameters
    ///
    /// # Errors
    ///
    /// Returns `HarmonyError::InvalidConfig` if:
    /// - `activity_threshold` is outside [0, 1) or not finite
    /// - `competition_ratio` is outside (0, 1] or not finite
    /// - `idle_step_ms` is zero
    pub fn validate(&self) -> Result<(), HarmonyError> {
        if !self.activity_threshold.is_finite() || !(0.0..1.0).contains(&self.activity_threshold) {
            return Err(HarmonyError::InvalidConfig(format!(
                "activity_threshold must be in [0, 1), got {}",
                self.activity_threshold
            )));
        }

        if !self.competition_ratio.is_finite()
            || self.competition_ratio <= 0.0
            || self.competition_ratio > 1.0
        {
            return Err(HarmonyError::InvalidConfig(format!(
                "competition_ratio must be in (0, 1], got {}",
                self.competition_ratio
            )));
        }

        if self.idle_step_ms == 0 {
            return Err(HarmonyError::InvalidConfig(
                "idle_step_ms must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            activity_threshold: 0.3,
            competition_ratio: 0.7,
            idle_step_ms: 2000,
        }
    }
}
