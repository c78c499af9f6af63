//! Diatonic scales, triads, and roman-numeral chord symbols
//!
//! Triads are built by fixed semitone offsets per quality rather than looked
//! up from a chord dictionary. The diatonic quality patterns are the standard
//! ones: major keys run M-m-m-M-M-m-dim, natural minor keys run
//! m-dim-M-m-m-M-M.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::note::{pitch_class, Mode, NOTE_NAMES};

/// Scale-degree offsets in semitones from the tonic
const MAJOR_SCALE_STEPS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];
const MINOR_SCALE_STEPS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Diatonic triad qualities by scale degree
const MAJOR_QUALITIES: [TriadQuality; 7] = [
    TriadQuality::Major,
    TriadQuality::Minor,
    TriadQuality::Minor,
    TriadQuality::Major,
    TriadQuality::Major,
    TriadQuality::Minor,
    TriadQuality::Diminished,
];
const MINOR_QUALITIES: [TriadQuality; 7] = [
    TriadQuality::Minor,
    TriadQuality::Diminished,
    TriadQuality::Major,
    TriadQuality::Minor,
    TriadQuality::Minor,
    TriadQuality::Major,
    TriadQuality::Major,
];

/// Triad quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriadQuality {
    /// Major third + perfect fifth
    Major,
    /// Minor third + perfect fifth
    Minor,
    /// Minor third + diminished fifth
    Diminished,
}

/// A three-note chord rooted on a scale degree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triad {
    /// Root pitch class (0-11)
    pub root_pc: u8,
    /// Quality of the triad
    pub quality: TriadQuality,
}

impl Triad {
    /// Pitch classes of root, third, and fifth
    pub fn pitch_classes(&self) -> [u8; 3] {
        let (third, fifth) = match self.quality {
            TriadQuality::Major => (4, 7),
            TriadQuality::Minor => (3, 7),
            TriadQuality::Diminished => (3, 6),
        };
        [
            self.root_pc,
            (self.root_pc + third) % 12,
            (self.root_pc + fifth) % 12,
        ]
    }

    /// Whether the triad contains a pitch class
    pub fn contains(&self, pc: u8) -> bool {
        self.pitch_classes().contains(&(pc % 12))
    }

    /// Chord name: root plus quality suffix ("C", "Dm", "Bdim")
    pub fn name(&self) -> String {
        let root = NOTE_NAMES[self.root_pc as usize];
        match self.quality {
            TriadQuality::Major => root.to_string(),
            TriadQuality::Minor => format!("{}m", root),
            TriadQuality::Diminished => format!("{}dim", root),
        }
    }

    /// Dominant-seventh name of this root ("G7")
    pub fn seventh_name(&self) -> String {
        format!("{}7", NOTE_NAMES[self.root_pc as usize])
    }
}

/// Build the seven diatonic triads of a key
///
/// `key_root` must be a plain note name; minor-suffixed key strings ("Am")
/// are not valid scale roots and yield `None`, which callers treat as a
/// lookup failure and answer with their documented defaults.
pub fn diatonic_triads(key_root: &str, mode: Mode) -> Option<Vec<Triad>> {
    let tonic = pitch_class(key_root)?;

    let (steps, qualities) = match mode {
        Mode::Major => (&MAJOR_SCALE_STEPS, &MAJOR_QUALITIES),
        Mode::Minor => (&MINOR_SCALE_STEPS, &MINOR_QUALITIES),
    };

    Some(
        steps
            .iter()
            .zip(qualities.iter())
            .map(|(step, quality)| Triad {
                root_pc: (tonic + step) % 12,
                quality: *quality,
            })
            .collect(),
    )
}

/// Roman-numeral chord symbol
///
/// The closed set of scale-degree symbols the progression tables emit. Case
/// carries quality, as in conventional functional-harmony notation; symbols
/// serialize to those conventional strings ("I", "ii", "vii°", "V7").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordSymbol {
    /// I — major tonic
    #[serde(rename = "I")]
    Tonic,
    /// ii — minor supertonic
    #[serde(rename = "ii")]
    Supertonic,
    /// iii — minor mediant
    #[serde(rename = "iii")]
    Mediant,
    /// IV — major subdominant
    #[serde(rename = "IV")]
    Subdominant,
    /// V — major dominant
    #[serde(rename = "V")]
    Dominant,
    /// vi — minor submediant
    #[serde(rename = "vi")]
    Submediant,
    /// vii° — diminished leading tone
    #[serde(rename = "vii°")]
    LeadingTone,
    /// V7 — dominant seventh
    #[serde(rename = "V7")]
    DominantSeventh,
    /// i — minor tonic
    #[serde(rename = "i")]
    TonicMinor,
    /// ii° — diminished supertonic
    #[serde(rename = "ii°")]
    SupertonicDim,
    /// III — major mediant
    #[serde(rename = "III")]
    MediantMajor,
    /// iv — minor subdominant
    #[serde(rename = "iv")]
    SubdominantMinor,
    /// v — minor dominant
    #[serde(rename = "v")]
    DominantMinor,
    /// VI — major submediant
    #[serde(rename = "VI")]
    SubmediantMajor,
    /// VII — major subtonic
    #[serde(rename = "VII")]
    Subtonic,
}

impl ChordSymbol {
    /// Conventional string form of the symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            ChordSymbol::Tonic => "I",
            ChordSymbol::Supertonic => "ii",
            ChordSymbol::Mediant => "iii",
            ChordSymbol::Subdominant => "IV",
            ChordSymbol::Dominant => "V",
            ChordSymbol::Submediant => "vi",
            ChordSymbol::LeadingTone => "vii°",
            ChordSymbol::DominantSeventh => "V7",
            ChordSymbol::TonicMinor => "i",
            ChordSymbol::SupertonicDim => "ii°",
            ChordSymbol::MediantMajor => "III",
            ChordSymbol::SubdominantMinor => "iv",
            ChordSymbol::DominantMinor => "v",
            ChordSymbol::SubmediantMajor => "VI",
            ChordSymbol::Subtonic => "VII",
        }
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
