//! Error Types
//!
//! Typed failures surfaced by the corpus loader and the query engine.
//! The binary wraps these in `anyhow` at its top level; library callers can
//! match on the variants to show specific messages.

use std::path::PathBuf;
use thiserror::Error;

/// A present book file could not be turned into a `Book`.
///
/// Returned by `Corpus::load`. The whole load fails, so the caller never
/// sees a partially populated corpus.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid book file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

impl LoadError {
    /// The file that caused the failure.
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Read { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No book in the corpus has a single verse to draw from.
    #[error("the corpus has no verses loaded")]
    EmptyCorpus,

    /// A parameter was blank or out of range.
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// The selected book is canonical but was not loaded.
    #[error("the book '{0}' is unavailable")]
    BookUnavailable(String),
}

impl QueryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        QueryError::InvalidQuery {
            reason: reason.into(),
        }
    }
}
