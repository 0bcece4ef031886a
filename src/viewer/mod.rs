//! Viewer Module
//!
//! The display layer on top of the corpus and query engine.
//!
//! ## Responsibilities
//! - **Navigation**: An explicit reading position (book and chapter position)
//!   changed only through next / previous / select-book transitions.
//! - **Rendering**: Plain `String` output for each screen of the viewer, so the
//!   terminal front end only has to print.

pub mod navigation;
pub mod render;

pub use navigation::Navigator;
pub use render::{
    highlight_keyword, render_about, render_chapter, render_contents, render_page,
    render_random_verse, render_search_report, render_word_cloud, Markup,
};
