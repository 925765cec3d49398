//! # Pitch-Class Cycle
//!
//! The twelve pitch classes of the chromatic scale, ordered from C and named
//! with sharps. Every transposition in the crate is rotation over this cycle.
//!
//! ```
//! use autotranspose::{transpose, PitchClass};
//!
//! assert_eq!(transpose(PitchClass::C, -2), PitchClass::ASharp);
//! assert_eq!(transpose(PitchClass::ASharp, 5), PitchClass::DSharp);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TransposeError;
use crate::spelling::normalize;

/// Number of semitones in one octave cycle.
pub const CYCLE_LEN: i32 = 12;

/// One of the twelve pitch classes, ignoring octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

/// Canonical cycle, index `i` holds the pitch class `i` semitones above C.
pub const NOTES_CYCLE: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::CSharp,
    PitchClass::D,
    PitchClass::DSharp,
    PitchClass::E,
    PitchClass::F,
    PitchClass::FSharp,
    PitchClass::G,
    PitchClass::GSharp,
    PitchClass::A,
    PitchClass::ASharp,
    PitchClass::B,
];

/// Reduce any semitone count into `0..12`.
///
/// `%` keeps the sign of the dividend, so the remainder is shifted by a full
/// cycle and reduced again. All index arithmetic in the crate goes through here.
pub fn wrap_semitones(semitones: i32) -> usize {
    (((semitones % CYCLE_LEN) + CYCLE_LEN) % CYCLE_LEN) as usize
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = NOTES_CYCLE;

    /// Position in the cycle, 0 for C through 11 for B.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at `index`, wrapping any integer onto the cycle.
    pub fn from_index(index: i32) -> PitchClass {
        NOTES_CYCLE[wrap_semitones(index)]
    }

    /// Canonical (sharp) spelling.
    pub fn sharp_name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// True for the seven white-key pitch classes.
    pub fn is_natural(self) -> bool {
        !matches!(
            self,
            PitchClass::CSharp
                | PitchClass::DSharp
                | PitchClass::FSharp
                | PitchClass::GSharp
                | PitchClass::ASharp
        )
    }

    /// Upward interval from `self` to `other`, in `0..12`.
    pub fn semitones_to(self, other: PitchClass) -> usize {
        wrap_semitones(other.index() as i32 - self.index() as i32)
    }

    /// Shorthand for [`transpose`].
    pub fn transpose(self, semitones: i32) -> PitchClass {
        transpose(self, semitones)
    }
}

/// Rotate `pitch` by `semitones` around the cycle.
///
/// Total over all of `i32`: the offset is reduced before it is added, so the
/// sum stays within `0..24` and cannot overflow.
pub fn transpose(pitch: PitchClass, semitones: i32) -> PitchClass {
    let offset = wrap_semitones(semitones) as i32;
    PitchClass::from_index(pitch.index() as i32 + offset)
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sharp_name())
    }
}

impl FromStr for PitchClass {
    type Err = TransposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl Serialize for PitchClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.sharp_name())
    }
}

impl<'de> Deserialize<'de> for PitchClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        normalize(&token).map_err(serde::de::Error::custom)
    }
}
