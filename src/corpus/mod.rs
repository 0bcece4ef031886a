//! Corpus Store Module
//!
//! Owns the in-memory representation of the scripture text.
//!
//! ## Overview
//! A corpus is a directory of per-book JSON files, one for each of the 66
//! canonical books that is available. Loading reads them once, validates the
//! record shape and number rules, and produces an immutable `Corpus` that the
//! query engine and the viewer borrow for the rest of the process.
//!
//! ## Submodules
//! - **`canon`**: The fixed canonical book order and the `BookId` handle.
//! - **`loader`**: Directory loading and per-file validation.
//! - **`types`**: `Corpus`, `Book`, `Chapter` and `Verse` records.

pub mod canon;
pub mod loader;
pub mod types;

pub use canon::{BookId, Testament};
pub use types::{Book, Chapter, Corpus, Verse};

#[cfg(test)]
mod tests;
