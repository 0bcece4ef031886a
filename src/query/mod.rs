//! Query Engine Module
//!
//! Read-only analytical queries over a loaded `Corpus`.
//!
//! ## Overview
//! Every query is a plain function of its inputs: it borrows the corpus, never
//! mutates it and keeps no state between calls. The only outside input is the
//! random number generator for `random_verse`, which the caller supplies so
//! runs can be made reproducible with a seed.
//!
//! ## Submodules
//! - **`random`**: Random verse selection.
//! - **`search`**: Substring search with per-book and per-chapter statistics.
//! - **`text`**: Concatenation of verse text for a book, the corpus or a scope.
//! - **`tokenizer`**: Word tokenization and frequency ranking.
//! - **`types`**: Result types shared with the viewer.

pub mod random;
pub mod search;
pub mod text;
pub mod tokenizer;
pub mod types;

pub use random::random_verse;
pub use search::{match_spans, search};
pub use text::{book_text, corpus_text, scope_text};
pub use tokenizer::{tokenize_words, word_frequencies};
pub use types::{CloudScope, SearchResult, VerseRef, WordWeight};
