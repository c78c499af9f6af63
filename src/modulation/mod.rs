//! Key relationships and modulation planning
//!
//! Models the 12 major keys on the circle of fifths (plus relative minors)
//! and plans the bridge keys required to move between distant keys:
//! - Direct reachability (one step on the fifths cycle)
//! - Common-bridge lookup (one intermediate key)
//! - Bounded breadth-first search for distant modulations

pub mod graph;
pub mod planner;

pub use graph::{direct_bridge, is_directly_reachable, neighbors, CIRCLE_OF_FIFTHS};
pub use planner::{compute_modulation_path, Difficulty, ModulationPath};
