//! Corpus Data Types
//!
//! Strongly typed records for the three-level book → chapter → verse hierarchy.
//! The serde layout matches the on-disk book files, so a file that deserializes
//! into `Book` already has the expected shape; number rules are checked by the
//! loader afterwards.

use super::canon::BookId;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    #[serde(rename = "verse", deserialize_with = "number_or_string")]
    pub number: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter number as written in the file. Not necessarily equal to the
    /// chapter's position in `Book::chapters`.
    #[serde(rename = "chapter", deserialize_with = "number_or_string")]
    pub number: u32,
    pub verses: Vec<Verse>,
}

impl Chapter {
    pub fn verse(&self, number: u32) -> Option<&Verse> {
        self.verses.iter().find(|v| v.number == number)
    }
}

/// One book file. Chapters are kept in file order; navigation walks this
/// sequence by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Chapter at a sequence position.
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn chapter_by_number(&self, number: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.number == number)
    }

    /// Sequence position of the chapter with the given number.
    pub fn chapter_index(&self, number: u32) -> Option<usize> {
        self.chapters.iter().position(|c| c.number == number)
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.iter().map(|c| c.verses.len()).sum()
    }

    pub fn verses(&self) -> impl Iterator<Item = (&Chapter, &Verse)> {
        self.chapters
            .iter()
            .flat_map(|c| c.verses.iter().map(move |v| (c, v)))
    }
}

/// All loaded books, keyed and iterated in canonical order.
///
/// Built once by `Corpus::load` (or `Corpus::from_books`) and never mutated
/// afterwards; every query takes it by shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    books: BTreeMap<BookId, Book>,
}

impl Corpus {
    /// Builds a corpus from books already in memory. A repeated `BookId`
    /// keeps the last book given.
    pub fn from_books(books: impl IntoIterator<Item = (BookId, Book)>) -> Self {
        Self {
            books: books.into_iter().collect(),
        }
    }

    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Book> {
        BookId::from_name(name).and_then(|id| self.get(id))
    }

    pub fn contains(&self, id: BookId) -> bool {
        self.books.contains_key(&id)
    }

    /// Present books in canonical order.
    pub fn books(&self) -> impl Iterator<Item = (BookId, &Book)> {
        self.books.iter().map(|(id, book)| (*id, book))
    }

    pub fn book_ids(&self) -> impl Iterator<Item = BookId> + '_ {
        self.books.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn chapter_count(&self) -> usize {
        self.books.values().map(|b| b.chapters.len()).sum()
    }

    pub fn verse_count(&self) -> usize {
        self.books.values().map(Book::verse_count).sum()
    }
}

/// Accepts `1` or `"1"`. Published KJV book files store chapter and verse
/// numbers as strings.
fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    struct NumberVisitor;

    impl<'de> Visitor<'de> for NumberVisitor {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative integer or a string of digits")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("number {} is too large", v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::custom(format!("number {} is out of range", v)))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
            v.trim()
                .parse::<u32>()
                .map_err(|_| E::custom(format!("'{}' is not a number", v)))
        }
    }

    deserializer.deserialize_any(NumberVisitor)
}
