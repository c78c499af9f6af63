//! Music theory primitives
//!
//! Self-contained pitch-class arithmetic replacing an external music-theory
//! library:
//! - Note name parsing and intervals
//! - Diatonic scales and triads
//! - Roman-numeral chord symbols

pub mod note;
pub mod scale;

pub use note::{parse_key, pitch_class, Mode};
pub use scale::{diatonic_triads, ChordSymbol, Triad, TriadQuality};
