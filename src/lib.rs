//! Bible Viewer Library
//!
//! Loads a 66-book scripture corpus from per-book JSON files and answers a
//! small set of read-only queries over it. The binary (`main.rs`) is a thin
//! terminal front end over these modules.
//!
//! ## Architecture Modules
//! Data flows one way: files → `corpus` → `query` → `viewer`.
//!
//! - **`corpus`**: The canonical book list, the typed book / chapter / verse
//!   model and the directory loader.
//! - **`query`**: Random verse selection, keyword search with statistics, and
//!   word frequency ranking for word clouds.
//! - **`viewer`**: Reading position state and text renderers for every screen.
//! - **`config`**: Defaults and validation for front end settings.
//! - **`error`**: `LoadError` and `QueryError`.

pub mod config;
pub mod corpus;
pub mod error;
pub mod query;
pub mod viewer;

#[cfg(test)]
mod fixtures;
