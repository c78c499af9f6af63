//! # Chorus Harmony
//!
//! A harmonic progression engine for shared real-time musical spaces.
//! Participants are assigned notes; the engine clusters them by note and
//! activity and derives a single, globally shared harmonic state (key, mode,
//! chord progression, tension) that drives what every listener hears.
//!
//! ## Features
//!
//! - **Note clustering**: weighted scoring of note groups by activity, dwell
//!   time, and size
//! - **Harmonic state machine**: tick-driven transitions between idle,
//!   single-dominant, and competing situations, following functional-harmony
//!   conventions
//! - **Modulation planning**: circle-of-fifths graph search with bridge keys
//!   and easy/medium/hard classification
//! - **Presentation helpers**: compatibility scoring, note difficulty pools,
//!   bridge availability, dominance metrics, chord voicing
//!
//! ## Quick Start
//!
//! ```
//! use chorus_harmony::{HarmonyEngine, PlayerSnapshot};
//!
//! // One engine per shared space
//! let mut engine = HarmonyEngine::new(0);
//!
//! // Each tick, feed the current participant snapshots
//! let players = vec![PlayerSnapshot {
//!     id: "p1".to_string(),
//!     assigned_note: "G".to_string(),
//!     activity_score: 0.9,
//!     cluster_duration_ms: 8000.0,
//! }];
//!
//! let state = engine.tick(&players, 1000);
//! println!("key: {} {:?}", state.current_key, state.current_mode);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Participant snapshots -> NoteClusterer -> HarmonicStateMachine -> HarmonicState
//!                                             |            |
//!                                     TensionResolver  ModulationPlanner
//! ```
//!
//! The transport layer delivers snapshots and ships the resulting state to
//! listeners; the synthesis backend turns voicings into sound. Neither lives
//! in this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod error;
pub mod modulation;
pub mod presentation;
pub mod theory;

// Re-export main types
pub use config::EngineConfig;
pub use engine::{
    compute_note_clusters, create_initial_harmony, HarmonicState, HarmonyEngine, NoteCluster,
    PlayerSnapshot,
};
pub use error::HarmonyError;
pub use modulation::{compute_modulation_path, Difficulty, ModulationPath};
pub use presentation::compute_harmonic_compatibility;
pub use theory::note::Mode;
pub use theory::scale::ChordSymbol;
