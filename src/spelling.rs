//! # Note-Name Spellings
//!
//! Converts between textual note names and [`PitchClass`] values.
//!
//! ## Accepted input
//! The vocabulary is closed: the seven naturals, the five canonical sharps,
//! the seven single flats (including `Cb` and `Fb`) and the two uncommon
//! sharps `E#` and `B#`. Matching is case-sensitive after trimming
//! surrounding whitespace. Double accidentals (`C##`, `Fbb`) are rejected.
//!
//! ## Display
//! Results are canonical sharps. [`DisplayMode::Flats`] re-spells the five
//! accidental pitch classes as flats; naturals never change.

use crate::error::TransposeError;
use crate::pitch::{PitchClass, NOTES_CYCLE};

/// Every token [`normalize`] accepts, with the pitch class it names.
pub const ACCEPTED_SPELLINGS: [(&str, PitchClass); 21] = [
    // Canonical cycle
    ("C", PitchClass::C),
    ("C#", PitchClass::CSharp),
    ("D", PitchClass::D),
    ("D#", PitchClass::DSharp),
    ("E", PitchClass::E),
    ("F", PitchClass::F),
    ("F#", PitchClass::FSharp),
    ("G", PitchClass::G),
    ("G#", PitchClass::GSharp),
    ("A", PitchClass::A),
    ("A#", PitchClass::ASharp),
    ("B", PitchClass::B),
    // Flats
    ("Db", PitchClass::CSharp),
    ("Eb", PitchClass::DSharp),
    ("Gb", PitchClass::FSharp),
    ("Ab", PitchClass::GSharp),
    ("Bb", PitchClass::ASharp),
    // Accidentals that cross a letter boundary
    ("Cb", PitchClass::B),
    ("Fb", PitchClass::E),
    ("E#", PitchClass::F),
    ("B#", PitchClass::C),
];

/// Resolve a note name to its pitch class.
///
/// # Examples
/// ```
/// use autotranspose::{normalize, PitchClass};
///
/// assert_eq!(normalize(" Db ").unwrap(), PitchClass::CSharp);
/// assert_eq!(normalize("B#").unwrap(), PitchClass::C);
/// assert!(normalize("C##").is_err());
/// ```
///
/// # Errors
/// [`TransposeError::InvalidNoteName`] when the trimmed token is not in
/// [`ACCEPTED_SPELLINGS`].
pub fn normalize(spelling: &str) -> Result<PitchClass, TransposeError> {
    let token = spelling.trim();
    ACCEPTED_SPELLINGS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, pitch)| *pitch)
        .ok_or_else(|| TransposeError::InvalidNoteName {
            token: spelling.to_string(),
            vocabulary: canonical_vocabulary(),
        })
}

/// Names of the canonical cycle, in order.
pub fn canonical_vocabulary() -> Vec<String> {
    NOTES_CYCLE.iter().map(|p| p.sharp_name().to_string()).collect()
}

/// Which accidental to use when spelling a black-key pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Sharps,
    Flats,
}

impl DisplayMode {
    pub fn from_prefer_flats(prefer_flats: bool) -> Self {
        if prefer_flats {
            DisplayMode::Flats
        } else {
            DisplayMode::Sharps
        }
    }

    pub fn prefers_flats(self) -> bool {
        self == DisplayMode::Flats
    }

    pub fn render(self, pitch: PitchClass) -> &'static str {
        to_display(pitch, self.prefers_flats())
    }
}

/// Spell `pitch` for display.
///
/// # Examples
/// ```
/// use autotranspose::{to_display, PitchClass};
///
/// assert_eq!(to_display(PitchClass::CSharp, true), "Db");
/// assert_eq!(to_display(PitchClass::CSharp, false), "C#");
/// assert_eq!(to_display(PitchClass::C, true), "C");
/// ```
pub fn to_display(pitch: PitchClass, prefer_flats: bool) -> &'static str {
    if !prefer_flats {
        return pitch.sharp_name();
    }
    match pitch {
        PitchClass::CSharp => "Db",
        PitchClass::DSharp => "Eb",
        PitchClass::FSharp => "Gb",
        PitchClass::GSharp => "Ab",
        PitchClass::ASharp => "Bb",
        natural => natural.sharp_name(),
    }
}
