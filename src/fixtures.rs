//! Shared builders for unit tests.

use crate::corpus::{Book, BookId, Chapter, Corpus, Verse};
use std::fs;
use std::path::Path;

pub fn book(chapters: &[(u32, &[(u32, &str)])]) -> Book {
    Book {
        chapters: chapters
            .iter()
            .map(|(number, verses)| Chapter {
                number: *number,
                verses: verses
                    .iter()
                    .map(|(n, text)| Verse {
                        number: *n,
                        text: text.to_string(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub fn id(name: &str) -> BookId {
    BookId::from_name(name).unwrap_or_else(|| panic!("unknown book {}", name))
}

pub fn corpus(books: Vec<(&str, Book)>) -> Corpus {
    Corpus::from_books(books.into_iter().map(|(name, b)| (id(name), b)))
}

/// Writes `book` as `<name>.json` in the shape the loader expects.
pub fn write_book(dir: &Path, name: &str, book: &Book) {
    let json = serde_json::to_string_pretty(book).unwrap();
    fs::write(dir.join(format!("{}.json", name)), json).unwrap();
}

pub fn write_raw(dir: &Path, name: &str, raw: &str) {
    fs::write(dir.join(format!("{}.json", name)), raw).unwrap();
}
