//! The harmonic state machine
//!
//! Advances a space's `HarmonicState` once per tick from the current note
//! clusters. Three situations, checked in priority order:
//!
//! 1. **Idle** — no active cluster: resolve back toward the tonic, then
//!    cycle through a small library of C major progressions
//! 2. **Competing** — two or more near-equal strong clusters: resolve the
//!    tension chord that harmonizes them
//! 3. **SingleDominant** — one cluster clearly strongest: modulate toward
//!    its note
//!
//! The idle cycler's position is owned per space; independent spaces never
//! share it.

use crate::config::EngineConfig;
use crate::theory::note::Mode;
use crate::theory::scale::ChordSymbol;

use super::cluster::NoteCluster;
use super::state::{modulate_to_key, resolve_to_tonic, ClusterSummary, HarmonicState};
use super::tension::compute_tension_chord;

/// Tension level reported while clusters compete
const COMPETING_TENSION: f32 = 0.7;

/// Idiomatic I-IV-V progressions cycled through while the space idles in C
/// major. Patterns rotate in order; each completed cycle moves to the next.
const IDLE_PATTERNS: [&[ChordSymbol]; 5] = {
    use ChordSymbol::*;
    [
        &[Tonic, Subdominant, Dominant, Tonic],
        &[Tonic, Submediant, Subdominant, Dominant, Tonic],
        &[Tonic, Supertonic, Dominant, Tonic],
        &[Tonic, Mediant, Submediant, Subdominant, Dominant, Tonic],
        &[Tonic, Subdominant, Tonic, Dominant, Tonic],
    ]
};

/// Walks the idle-progression library one chord at a time
///
/// One cycler exists per harmonic space, alongside its `HarmonicState`; the
/// position counters are reset whenever an active cluster reappears.
#[derive(Debug, Clone)]
pub struct IdleCycler {
    pattern_index: usize,
    step_index: usize,
    last_step_ms: u64,
}

impl IdleCycler {
    /// Cycler positioned at the start of the first pattern
    pub fn new(now_ms: u64) -> Self {
        Self {
            pattern_index: 0,
            step_index: 0,
            last_step_ms: now_ms,
        }
    }

    /// Reset to pattern 0, step 0 (a cluster became active)
    pub fn reset(&mut self, now_ms: u64) {
        self.pattern_index = 0;
        self.step_index = 0;
        self.last_step_ms = now_ms;
    }

    /// Advance by wall-clock time and return the current pattern rotated so
    /// the active step comes first
    ///
    /// A pattern switch after a completed cycle takes effect on the next
    /// call: the rotation is always taken over the pattern that was current
    /// when the call began.
    fn advance(&mut self, now_ms: u64, step_ms: u64) -> Vec<ChordSymbol> {
        let pattern = IDLE_PATTERNS[self.pattern_index % IDLE_PATTERNS.len()];

        if now_ms.saturating_sub(self.last_step_ms) >= step_ms {
            self.step_index = (self.step_index + 1) % pattern.len();
            self.last_step_ms = now_ms;

            if self.step_index == 0 {
                self.pattern_index = (self.pattern_index + 1) % IDLE_PATTERNS.len();
            }
        }

        let mut rotated = Vec::with_capacity(pattern.len());
        rotated.extend_from_slice(&pattern[self.step_index..]);
        rotated.extend_from_slice(&pattern[..self.step_index]);
        rotated
    }
}

/// Advance the harmonic state by one tick
///
/// Pure with respect to the state value: the next `HarmonicState` is built
/// from the previous one plus the tick's clusters; only the cycler mutates.
/// Replaying the same `(state, clusters, now_ms)` sequence reproduces the
/// same trajectory.
///
/// # Arguments
///
/// * `current` - The previous tick's state
/// * `clusters` - This tick's note clusters
/// * `cycler` - This space's idle cycler
/// * `config` - Engine thresholds
/// * `now_ms` - Current time in milliseconds
pub fn compute_harmonic_progression(
    current: &HarmonicState,
    clusters: &[NoteCluster],
    cycler: &mut IdleCycler,
    config: &EngineConfig,
    now_ms: u64,
) -> HarmonicState {
    let active: Vec<&NoteCluster> = clusters
        .iter()
        .filter(|c| c.strength > config.activity_threshold)
        .collect();

    if active.is_empty() {
        return idle_transition(current, cycler, config, now_ms);
    }

    let strongest = active
        .iter()
        .copied()
        .reduce(|max, c| if c.strength > max.strength { c } else { max })
        .expect("active is non-empty");

    let competitors: Vec<&NoteCluster> = active
        .iter()
        .copied()
        .filter(|c| {
            c.strength > strongest.strength * config.competition_ratio && c.note != strongest.note
        })
        .collect();

    if !competitors.is_empty() {
        log::debug!(
            "{} clusters competing with {} (strength {:.2})",
            competitors.len(),
            strongest.note,
            strongest.strength
        );

        let mut group: Vec<NoteCluster> = Vec::with_capacity(competitors.len() + 1);
        group.push(strongest.clone());
        group.extend(competitors.iter().map(|c| (*c).clone()));

        let tension =
            compute_tension_chord(&group, &current.current_key, current.current_mode);
        cycler.reset(now_ms);

        return HarmonicState {
            target_key: None,
            progression: tension.progression,
            tension: COMPETING_TENSION,
            last_update: now_ms,
            active_clusters: summarize(&active),
            ..current.clone()
        };
    }

    // Single dominant cluster drives a modulation toward its note
    let target_key = strongest.note.clone();
    cycler.reset(now_ms);

    let progression = if current.current_key == target_key {
        vec![ChordSymbol::Tonic]
    } else {
        log::debug!(
            "Dominant cluster {} (strength {:.2}) modulating {} -> {}",
            strongest.note,
            strongest.strength,
            current.current_key,
            target_key
        );
        modulate_to_key(&current.current_key, &target_key, Mode::Major)
    };

    HarmonicState {
        current_key: target_key.clone(),
        current_mode: Mode::Major,
        target_key: Some(target_key),
        progression,
        tension: 0.0,
        last_update: now_ms,
        active_clusters: summarize(&active),
        ..current.clone()
    }
}

/// No active clusters: resolve home, hold the initial tonic, or cycle
fn idle_transition(
    current: &HarmonicState,
    cycler: &mut IdleCycler,
    config: &EngineConfig,
    now_ms: u64,
) -> HarmonicState {
    let home = current.resolution_target.clone();

    // Away from home: play the cadence back to the tonic first
    if current.current_key != home {
        log::debug!("Space emptied; resolving {} back to {}", current.current_key, home);

        return HarmonicState {
            current_key: home.clone(),
            current_mode: Mode::Major,
            target_key: Some(home.clone()),
            progression: resolve_to_tonic(&home, &current.current_key),
            tension: 0.0,
            last_update: now_ms,
            active_clusters: Vec::new(),
            ..current.clone()
        };
    }

    // The bare tonic marks a space nobody has played in yet; hold it
    if current.progression.as_slice() == [ChordSymbol::Tonic] {
        return HarmonicState {
            current_key: home.clone(),
            current_mode: Mode::Major,
            target_key: Some(home),
            progression: vec![ChordSymbol::Tonic],
            tension: 0.0,
            last_update: now_ms,
            active_clusters: Vec::new(),
            ..current.clone()
        };
    }

    // Players came and went: keep the space alive with idle progressions
    let progression = cycler.advance(now_ms, config.idle_step_ms);

    HarmonicState {
        current_key: home.clone(),
        current_mode: Mode::Major,
        target_key: Some(home),
        progression,
        tension: 0.0,
        last_update: now_ms,
        active_clusters: Vec::new(),
        ..current.clone()
    }
}

fn summarize(active: &[&NoteCluster]) -> Vec<ClusterSummary> {
    active
        .iter()
        .map(|c| ClusterSummary {
            note: c.note.clone(),
            strength: c.strength,
        })
        .collect()
}
