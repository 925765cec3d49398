//! # Error Types
//!
//! Only [`TransposeError::InvalidNoteName`] can come out of the engine itself.
//! The remaining variants belong to the configuration and pipeline layers
//! (instrument tables loaded from disk, strict instrument resolution).
//!
//! ## Usage
//! ```rust
//! use autotranspose::{normalize, TransposeError};
//!
//! match normalize("H") {
//!     Ok(pitch) => println!("pitch class {}", pitch),
//!     Err(TransposeError::InvalidNoteName { token, .. }) => {
//!         eprintln!("cannot read note {:?}", token);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransposeError {
    /// A note name that is not one of the accepted spellings.
    ///
    /// `vocabulary` lists the canonical cycle so the message tells the user
    /// what would have been accepted.
    ///
    /// # Example
    /// ```
    /// # use autotranspose::TransposeError;
    /// let err = TransposeError::InvalidNoteName {
    ///     token: "H".to_string(),
    ///     vocabulary: vec!["C".to_string(), "C#".to_string()],
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid or unsupported note name: \"H\". Could not normalize to one of C, C#."
    /// );
    /// ```
    #[error(
        "Invalid or unsupported note name: \"{token}\". Could not normalize to one of {}.",
        .vocabulary.join(", ")
    )]
    InvalidNoteName {
        token: String,
        vocabulary: Vec<String>,
    },

    /// An instrument name that a strict lookup could not resolve.
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    /// An instrument table that failed to parse or validate.
    #[error("Invalid instrument table: {0}")]
    InstrumentTable(String),

    /// A table file that could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
