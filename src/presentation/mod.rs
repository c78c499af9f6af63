//! Read-only helpers for presentation collaborators
//!
//! Everything here consumes the shared `HarmonicState` (or the static key
//! graph) without ever advancing it:
//! - Pairwise note compatibility scoring
//! - Note difficulty classification and assignment pools
//! - Bridge availability for "how far from home" displays
//! - Per-player dominance metrics
//! - Chord voicing for the synthesis collaborator

pub mod bridge;
pub mod compat;
pub mod difficulty;
pub mod dominance;
pub mod voicing;

pub use bridge::{check_bridge_availability, BridgeAvailability, BridgeCluster};
pub use compat::compute_harmonic_compatibility;
pub use difficulty::{note_difficulty, notes_by_difficulty, random_note_by_difficulty, NoteDifficulty};
pub use dominance::{compute_dominance_level, DominanceMetrics};
pub use voicing::{chord_voicing, Voice};
