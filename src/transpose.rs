use crate::error::TransposeError;
use crate::instruments::InstrumentTable;
use crate::pitch::{transpose, PitchClass};
use crate::spelling::{normalize, DisplayMode};

/// Where a transposition offset comes from: a named instrument or a number
/// typed in directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetSource {
    Instrument(String),
    Semitones(i32),
}

impl Default for OffsetSource {
    fn default() -> Self {
        OffsetSource::Semitones(0)
    }
}

impl OffsetSource {
    /// Offset in semitones, failing on instrument names the table lacks.
    pub fn resolve_strict(&self, table: &InstrumentTable) -> Result<i32, TransposeError> {
        match self {
            OffsetSource::Instrument(name) => table.lookup_strict(name),
            OffsetSource::Semitones(n) => Ok(*n),
        }
    }

    /// Offset in semitones, treating unknown instruments as concert pitch.
    pub fn resolve(&self, table: &InstrumentTable) -> i32 {
        match self {
            OffsetSource::Instrument(name) => table.offset_or_zero(name),
            OffsetSource::Semitones(n) => *n,
        }
    }
}

/// A note moved from one instrument's frame to another's.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransposeRequest {
    pub note: String,
    pub from: OffsetSource,
    pub to: OffsetSource,
    pub display: DisplayMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransposeResult {
    /// The input note after normalization.
    pub input: PitchClass,
    /// The pitch class after every offset was applied.
    pub pitch: PitchClass,
    /// Spelling used by [`name`](Self::name).
    pub display: DisplayMode,
}

impl TransposeResult {
    pub fn name(&self) -> &'static str {
        self.display.render(self.pitch)
    }

    /// Same pitch class, spelled with `display`.
    pub fn with_display(self, display: DisplayMode) -> Self {
        TransposeResult { display, ..self }
    }
}

/// Apply each offset in order to a normalized pitch.
pub fn transpose_chain(pitch: PitchClass, offsets: &[i32]) -> PitchClass {
    offsets.iter().fold(pitch, |p, &offset| transpose(p, offset))
}

/// Transpose a note name by `semitones`, returning the sharp spelling.
///
/// # Example
/// ```
/// use autotranspose::transpose_note_name;
///
/// assert_eq!(transpose_note_name("C", -2)?, "A#");
/// assert_eq!(transpose_note_name("Bb", 5)?, "D#");
/// # Ok::<(), autotranspose::TransposeError>(())
/// ```
pub fn transpose_note_name(
    note_name: &str,
    semitones: i32,
) -> Result<&'static str, TransposeError> {
    let pitch = normalize(note_name)?;
    Ok(transpose(pitch, semitones).sharp_name())
}

impl TransposeRequest {
    pub fn new(note: impl Into<String>) -> Self {
        TransposeRequest {
            note: note.into(),
            ..Default::default()
        }
    }

    pub fn from(mut self, source: OffsetSource) -> Self {
        self.from = source;
        self
    }

    pub fn to(mut self, source: OffsetSource) -> Self {
        self.to = source;
        self
    }

    pub fn display(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    /// Normalize the note, apply the `from` then `to` offsets, and attach the
    /// display mode.
    ///
    /// # Example
    /// ```
    /// use autotranspose::{DisplayMode, InstrumentTable, OffsetSource, TransposeRequest};
    ///
    /// let table = InstrumentTable::builtin();
    /// let result = TransposeRequest::new("C")
    ///     .from(OffsetSource::Instrument("Trumpet in B♭".to_string()))
    ///     .to(OffsetSource::Instrument("French Horn in F".to_string()))
    ///     .display(DisplayMode::Flats)
    ///     .run(&table)?;
    /// assert_eq!(result.name(), "Eb");
    /// # Ok::<(), autotranspose::TransposeError>(())
    /// ```
    ///
    /// # Errors
    /// [`TransposeError::InvalidNoteName`] for an unreadable note, or
    /// [`TransposeError::UnknownInstrument`] for a name missing from `table`.
    pub fn run(&self, table: &InstrumentTable) -> Result<TransposeResult, TransposeError> {
        let input = normalize(&self.note)?;
        let from = self.from.resolve_strict(table)?;
        let to = self.to.resolve_strict(table)?;
        tracing::debug!(note = %self.note, input = %input, from, to, "transposing");

        let pitch = transpose_chain(input, &[from, to]);
        let result = TransposeResult {
            input,
            pitch,
            display: self.display,
        };
        tracing::trace!(pitch = %pitch, shown = result.name(), "transposed");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semis(n: i32) -> OffsetSource {
        OffsetSource::Semitones(n)
    }

    fn instrument(name: &str) -> OffsetSource {
        OffsetSource::Instrument(name.to_string())
    }

    #[test]
    fn test_transpose_note_name() {
        assert_eq!(transpose_note_name("C", 0).unwrap(), "C");
        assert_eq!(transpose_note_name("Db", 1).unwrap(), "D");
        assert_eq!(transpose_note_name("E#", -1).unwrap(), "E");
        assert_eq!(transpose_note_name("Cb", 1).unwrap(), "C");
        assert!(transpose_note_name("X", 3).is_err());
    }

    #[test]
    fn test_chain_matches_sum() {
        let p = transpose_chain(PitchClass::G, &[-2, 5, 11, -30]);
        assert_eq!(p, transpose(PitchClass::G, -2 + 5 + 11 - 30));
        assert_eq!(transpose_chain(PitchClass::G, &[]), PitchClass::G);
    }

    #[test]
    fn test_bb_to_f_instrument() {
        let table = InstrumentTable::builtin();
        let result = TransposeRequest::new("C")
            .from(semis(-2))
            .to(semis(5))
            .run(&table)
            .unwrap();
        assert_eq!(result.pitch, PitchClass::DSharp);
        assert_eq!(result.name(), "D#");
        assert_eq!(result.with_display(DisplayMode::Flats).name(), "Eb");
    }

    #[test]
    fn test_instrument_sources() {
        let table = InstrumentTable::builtin();
        let result = TransposeRequest::new("G")
            .from(instrument("Alto Saxophone in E♭"))
            .to(instrument("Clarinet in A"))
            .run(&table)
            .unwrap();
        assert_eq!(result.input, PitchClass::G);
        assert_eq!(result.pitch, PitchClass::G);
    }

    #[test]
    fn test_unknown_instrument() {
        let table = InstrumentTable::builtin();
        let err = TransposeRequest::new("C")
            .from(instrument("Kazoo"))
            .run(&table)
            .unwrap_err();
        assert!(matches!(err, TransposeError::UnknownInstrument(name) if name == "Kazoo"));
        assert_eq!(instrument("Kazoo").resolve(&table), 0);
    }

    #[test]
    fn test_invalid_note_fails_before_offsets() {
        let table = InstrumentTable::builtin();
        let err = TransposeRequest::new("C##")
            .from(instrument("Kazoo"))
            .run(&table)
            .unwrap_err();
        assert!(matches!(err, TransposeError::InvalidNoteName { .. }));
    }

    #[test]
    fn test_default_request_is_identity() {
        let table = InstrumentTable::builtin();
        let result = TransposeRequest::new("A#").run(&table).unwrap();
        assert_eq!(result.pitch, result.input);
        assert_eq!(result.name(), "A#");
        assert_eq!(result.with_display(DisplayMode::Flats).name(), "Bb");
    }
}
