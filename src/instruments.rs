//! # Instrument Transposition Table
//!
//! Maps instrument names to the semitone offset between written and concert
//! pitch.
//!
//! ## Offset convention
//! Offsets are pitch-class intervals, reduced to the simplest equivalent
//! within one octave. An instrument that sounds a perfect fifth lower than
//! written (English Horn, French Horn) is recorded as `+5`, and the Alto
//! Saxophone (a major sixth lower) as `+3`. Octave-displacing instruments
//! such as Piccolo or Double Bass are `0`. The table only ever drives
//! pitch-class rotation, where `-7` and `+5` land on the same note, so these
//! values must not be widened to the full multi-octave interval.
//!
//! ## Custom tables
//! A table can be loaded from YAML:
//!
//! ```yaml
//! instruments:
//!   - name: Clarinet in B♭
//!     transposition: -2
//!   - name: Alto Saxophone in E♭
//!     transposition: 3
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TransposeError;

/// An instrument and its fixed transposition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
    pub transposition: i32,
}

/// Entry of the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinInstrument {
    pub name: &'static str,
    pub transposition: i32,
}

const fn entry(name: &'static str, transposition: i32) -> BuiltinInstrument {
    BuiltinInstrument {
        name,
        transposition,
    }
}

/// Standard orchestral and band instruments.
pub static INSTRUMENTS: &[BuiltinInstrument] = &[
    entry("Piccolo", 0),
    entry("Flute", 0),
    entry("Alto Flute in G", -4),
    entry("Oboe", 0),
    entry("English Horn in F", 5),
    entry("Clarinet in E♭", 3),
    entry("Clarinet in B♭", -2),
    entry("Clarinet in A", -3),
    entry("Bass Clarinet in B♭", -2),
    entry("Bassoon", 0),
    entry("Contrabassoon", 0),
    entry("Soprano Saxophone in B♭", -2),
    entry("Alto Saxophone in E♭", 3),
    entry("Tenor Saxophone in B♭", -2),
    entry("Baritone Saxophone in E♭", 3),
    entry("French Horn in F", 5),
    entry("Trumpet in B♭", -2),
    entry("Cornet in B♭", -2),
    entry("Flugelhorn in B♭", -2),
    entry("Trombone", 0),
    entry("Bass Trombone", 0),
    entry("Euphonium", 0),
    entry("Tuba", 0),
    entry("Timpani", 0),
    entry("Glockenspiel", 0),
    entry("Xylophone", 0),
    entry("Celesta", 0),
    entry("Harp", 0),
    entry("Piano", 0),
    entry("Violin", 0),
    entry("Viola", 0),
    entry("Cello", 0),
    entry("Double Bass", 0),
    entry("Guitar", 0),
];

/// Offset of a built-in instrument, by exact name.
///
/// ```
/// use autotranspose::lookup;
///
/// assert_eq!(lookup("Clarinet in B♭"), Some(-2));
/// assert_eq!(lookup("Kazoo"), None);
/// ```
pub fn lookup(instrument_name: &str) -> Option<i32> {
    INSTRUMENTS
        .iter()
        .find(|i| i.name == instrument_name)
        .map(|i| i.transposition)
}

#[derive(Debug, Deserialize)]
struct TableFile {
    instruments: Vec<Instrument>,
}

/// An ordered, read-only set of instruments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentTable {
    instruments: Vec<Instrument>,
}

impl Default for InstrumentTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl InstrumentTable {
    pub fn builtin() -> Self {
        InstrumentTable {
            instruments: INSTRUMENTS
                .iter()
                .map(|i| Instrument {
                    name: i.name.to_string(),
                    transposition: i.transposition,
                })
                .collect(),
        }
    }

    /// Build a table from a list, dropping blank names and repeated names.
    ///
    /// # Errors
    /// Returns [`TransposeError::InstrumentTable`] if an entry has an empty name.
    pub fn new(instruments: Vec<Instrument>) -> Result<Self, TransposeError> {
        let mut kept: Vec<Instrument> = Vec::with_capacity(instruments.len());
        for (i, instrument) in instruments.into_iter().enumerate() {
            if instrument.name.trim().is_empty() {
                return Err(TransposeError::InstrumentTable(format!(
                    "entry {} has an empty name",
                    i + 1
                )));
            }
            if kept.iter().any(|k| k.name == instrument.name) {
                tracing::warn!(name = %instrument.name, "duplicate instrument ignored");
                continue;
            }
            kept.push(instrument);
        }
        Ok(InstrumentTable { instruments: kept })
    }

    /// Parse a YAML table (see the module docs for the layout).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TransposeError> {
        let file: TableFile = serde_yaml::from_str(yaml)
            .map_err(|e| TransposeError::InstrumentTable(e.to_string()))?;
        Self::new(file.instruments)
    }

    pub fn from_path(path: &Path) -> Result<Self, TransposeError> {
        let yaml = fs::read_to_string(path).map_err(|source| TransposeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_yaml_str(&yaml)?;
        tracing::debug!(
            path = %path.display(),
            count = table.len(),
            "loaded instrument table"
        );
        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Offset for `instrument_name`, `None` if the table has no such entry.
    pub fn lookup(&self, instrument_name: &str) -> Option<i32> {
        self.instruments
            .iter()
            .find(|i| i.name == instrument_name)
            .map(|i| i.transposition)
    }

    /// Like [`lookup`](Self::lookup), but unknown names count as concert pitch.
    pub fn offset_or_zero(&self, instrument_name: &str) -> i32 {
        self.lookup(instrument_name).unwrap_or(0)
    }

    pub fn lookup_strict(&self, instrument_name: &str) -> Result<i32, TransposeError> {
        self.lookup(instrument_name)
            .ok_or_else(|| TransposeError::UnknownInstrument(instrument_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table() {
        assert_eq!(INSTRUMENTS.len(), 34);
        assert_eq!(INSTRUMENTS[0].name, "Piccolo");
        assert_eq!(INSTRUMENTS[33].name, "Guitar");
        assert_eq!(InstrumentTable::builtin().len(), 34);
    }

    #[test]
    fn test_octave_reduced_offsets() {
        assert_eq!(lookup("Alto Saxophone in E♭"), Some(3));
        assert_eq!(lookup("Baritone Saxophone in E♭"), Some(3));
        assert_eq!(lookup("French Horn in F"), Some(5));
        assert_eq!(lookup("English Horn in F"), Some(5));
        assert_eq!(lookup("Tenor Saxophone in B♭"), Some(-2));
        assert_eq!(lookup("Double Bass"), Some(0));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup("clarinet in B♭"), None);
        assert_eq!(lookup("Clarinet in Bb"), None);
        assert_eq!(lookup(" Flute"), None);
        assert_eq!(InstrumentTable::default().offset_or_zero("Kazoo"), 0);
    }

    #[test]
    fn test_lookup_strict() {
        let table = InstrumentTable::builtin();
        assert_eq!(table.lookup_strict("Clarinet in A").unwrap(), -3);
        let err = table.lookup_strict("Kazoo").unwrap_err();
        assert_eq!(err.to_string(), "Unknown instrument: Kazoo");
    }

    #[test]
    fn test_yaml_table() {
        let yaml = r#"
instruments:
  - name: Mellophone in F
    transposition: 5
  - name: Soprano Cornet in E♭
    transposition: 3
  - name: Mellophone in F
    transposition: -7
"#;
        let table = InstrumentTable::from_yaml_str(yaml).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("Mellophone in F"), Some(5));
        assert_eq!(table.lookup("Soprano Cornet in E♭"), Some(3));
        assert_eq!(table.lookup("Flute"), None);
    }

    #[test]
    fn test_yaml_table_rejects_bad_input() {
        let empty_name = "instruments:\n  - name: \"  \"\n    transposition: 1\n";
        assert!(matches!(
            InstrumentTable::from_yaml_str(empty_name),
            Err(TransposeError::InstrumentTable(_))
        ));

        let not_a_number = "instruments:\n  - name: Horn\n    transposition: up\n";
        assert!(matches!(
            InstrumentTable::from_yaml_str(not_a_number),
            Err(TransposeError::InstrumentTable(_))
        ));
    }

    #[test]
    fn test_table_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "instruments:\n  - name: Horn in E♭\n    transposition: 3").unwrap();
        let table = InstrumentTable::from_path(file.path()).unwrap();
        assert_eq!(table.lookup("Horn in E♭"), Some(3));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            InstrumentTable::from_path(&missing),
            Err(TransposeError::Io { .. })
        ));
    }
}
