//! Error types for the extraction workflow.
//!
//! Every failure maps to one [`Error`] variant carrying the offending path,
//! so callers can report actionable messages. All variants are recoverable
//! at the boundary; nothing here is fatal to the process.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors surfaced by the extract/render/save workflow.
#[derive(Debug, Error)]
pub enum Error {
    /// The stop-word file could not be read.
    ///
    /// A missing or unreadable list is a hard failure; it is never
    /// downgraded to an empty set.
    #[error("failed to read stop-word file `{path}`: {source}")]
    StopWordLoad {
        path: PathBuf,
        source: io::Error,
    },

    /// The input text file could not be read.
    #[error("failed to read input file `{path}`: {source}")]
    InputRead {
        path: PathBuf,
        source: io::Error,
    },

    /// The report could not be written to the chosen output file.
    #[error("failed to write report to `{path}`: {source}")]
    OutputWrite {
        path: PathBuf,
        source: io::Error,
    },

    /// Render or save was requested before a successful extraction.
    #[error("no tags extracted yet; run an extraction first")]
    NoData,
}
