pub mod error;
pub mod instruments;
pub mod pitch;
pub mod spelling;
pub mod transpose;

pub use error::*;
pub use instruments::{lookup, Instrument, InstrumentTable, INSTRUMENTS};
pub use pitch::{transpose, wrap_semitones, PitchClass, NOTES_CYCLE};
pub use spelling::{normalize, to_display, DisplayMode, ACCEPTED_SPELLINGS};
pub use transpose::{
    transpose_chain, transpose_note_name, OffsetSource, TransposeRequest, TransposeResult,
};

/// Move `note` from one instrument's frame to another's and spell the result.
/// This is the main entry point for the library.
///
/// Unknown instrument names are treated as concert pitch.
///
/// ```
/// assert_eq!(autotranspose::transpose_between("C", "Trumpet in B♭", "Piano", true)?, "Bb");
/// # Ok::<(), autotranspose::TransposeError>(())
/// ```
pub fn transpose_between(
    note: &str,
    from_instrument: &str,
    to_instrument: &str,
    prefer_flats: bool,
) -> Result<&'static str, TransposeError> {
    let pitch = normalize(note)?;
    let pitch = transpose_chain(
        pitch,
        &[
            lookup(from_instrument).unwrap_or(0),
            lookup(to_instrument).unwrap_or(0),
        ],
    );
    Ok(to_display(pitch, prefer_flats))
}
