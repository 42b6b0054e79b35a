// Pitch classes of the 12-tone equal-tempered octave.
//
// Notes are spelled with flats only (`Db`, not `C#`), matching the names
// used in the chord catalog and in scale names like `Dbmaj`. The enum is
// ordered chromatically from C so that note sets print in a stable order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 12 pitch classes, independent of octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

/// The chromatic cycle in canonical order. Index `i` holds pitch class `i`.
pub const CHROMATIC: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::Db,
    PitchClass::D,
    PitchClass::Eb,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Gb,
    PitchClass::G,
    PitchClass::Ab,
    PitchClass::A,
    PitchClass::Bb,
    PitchClass::B,
];

impl PitchClass {
    /// Position in the chromatic cycle (C = 0 ... B = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The pitch class `semitones` above this one, wrapping at the octave.
    pub fn transpose(self, semitones: u8) -> PitchClass {
        CHROMATIC[(self.index() + semitones as usize) % 12]
    }

    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Db => "Db",
            PitchClass::D => "D",
            PitchClass::Eb => "Eb",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Gb => "Gb",
            PitchClass::G => "G",
            PitchClass::Ab => "Ab",
            PitchClass::A => "A",
            PitchClass::Bb => "Bb",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = ();

    /// Parse a canonical flat spelling. Sharps and lowercase are rejected:
    /// the catalog is hand-authored and a stray spelling there is a typo.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CHROMATIC.iter().copied().find(|pc| pc.name() == s).ok_or(())
    }
}
