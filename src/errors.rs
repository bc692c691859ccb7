//! Error types for lexicon storage and document processing.
//!
//! A missing lexicon record is never an error: it surfaces as
//! [`Classification::Unknown`](crate::Classification::Unknown). Everything
//! else that goes wrong while touching storage is reported here so that
//! permission problems and corrupt records are not mistaken for misses.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`LexiconStore`](crate::LexiconStore).
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Reading or writing a record failed for a reason other than absence.
    #[error("lexicon I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record exists but its content is not a valid encoding.
    #[error("corrupt lexicon record for {word:?}: {content:?}")]
    Corrupt { word: String, content: String },

    /// The key is not a non-empty `a`-`z` word.
    #[error("invalid lexicon key {word:?}")]
    InvalidKey { word: String },
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors that abort the processing of a single document.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The input document could not be read.
    #[error("failed to read document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output artifact could not be written.
    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The lexicon failed underneath the pipeline.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
