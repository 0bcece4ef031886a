//! Viewer Configuration
//!
//! Defaults and validation for the values the front end hands to the library.
//! Resolution order for the corpus directory is: command line flag, then the
//! `BIBLE_CORPUS_DIR` environment variable, then `DEFAULT_CORPUS_DIR`.

use crate::error::QueryError;
use std::path::PathBuf;

/// Directory searched when neither the flag nor the environment variable is set.
pub const DEFAULT_CORPUS_DIR: &str = "kjv_bible";

/// Environment variable consulted for the corpus directory.
pub const CORPUS_DIR_ENV: &str = "BIBLE_CORPUS_DIR";

/// Extension of the per-book files inside the corpus directory.
pub const BOOK_FILE_EXTENSION: &str = "json";

/// Number of books listed in the search ranking.
pub const TOP_BOOKS: usize = 5;

pub const DEFAULT_MAX_WORDS: usize = 50;
pub const MIN_MAX_WORDS: usize = 10;
pub const MAX_MAX_WORDS: usize = 100;
pub const MAX_WORDS_STEP: usize = 10;

/// Resolved settings for one run of the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub corpus_dir: PathBuf,
    pub verbose: bool,
    /// Seed for the random verse generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl ViewerConfig {
    pub fn new(corpus_dir: Option<PathBuf>, verbose: bool, seed: Option<u64>) -> Self {
        Self {
            corpus_dir: corpus_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS_DIR)),
            verbose,
            seed,
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new(None, false, None)
    }
}

/// Checks a word cloud size against the choices offered by the viewer
/// (10, 20, ... 100).
pub fn validate_max_words(max_words: usize) -> Result<usize, QueryError> {
    if !(MIN_MAX_WORDS..=MAX_MAX_WORDS).contains(&max_words) || max_words % MAX_WORDS_STEP != 0 {
        return Err(QueryError::invalid(format!(
            "number of words must be one of {}..={} in steps of {}, got {}",
            MIN_MAX_WORDS, MAX_MAX_WORDS, MAX_WORDS_STEP, max_words
        )));
    }
    Ok(max_words)
}
