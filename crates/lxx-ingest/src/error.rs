use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("csv error in {path}: {source}")]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    /// A reference-corpus row that cannot become a (VerseRef, Word) pair.
    /// Surfaced immediately; silently skipping rows would leave holes in
    /// the reference index.
    #[error("{path}:{line}: malformed reference row: {reason}")]
    MalformedReferenceRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("line {line}: unknown book heading {heading:?}")]
    UnknownBook { heading: String, line: usize },
    #[error("unknown {edition} book code {code:?}")]
    UnknownBookCode { edition: String, code: String },
    #[error("{path}:{line}: malformed correction row: {reason}")]
    MalformedCorrectionRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
