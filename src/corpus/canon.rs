//! Canonical Book List
//!
//! The fixed 66-book sequence (39 Old Testament, 27 New Testament). Position in
//! this list defines navigation order and every tie-break in the query engine.

use serde::{Serialize, Serializer};
use std::fmt;

pub const OLD_TESTAMENT: [&str; 39] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1Samuel",
    "2Samuel",
    "1Kings",
    "2Kings",
    "1Chronicles",
    "2Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "SongofSolomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
];

pub const NEW_TESTAMENT: [&str; 27] = [
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1Corinthians",
    "2Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1Thessalonians",
    "2Thessalonians",
    "1Timothy",
    "2Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1Peter",
    "2Peter",
    "1John",
    "2John",
    "3John",
    "Jude",
    "Revelation",
];

pub const BOOK_COUNT: usize = OLD_TESTAMENT.len() + NEW_TESTAMENT.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn title(self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }

    /// Books of this testament in canonical order.
    pub fn books(self) -> impl Iterator<Item = BookId> {
        let range = match self {
            Testament::Old => 0..OLD_TESTAMENT.len(),
            Testament::New => OLD_TESTAMENT.len()..BOOK_COUNT,
        };
        range.map(|i| BookId(i as u8))
    }
}

/// Handle for one canonical book.
///
/// Ordering follows the canon, so a `BTreeMap<BookId, _>` iterates in
/// navigation order regardless of insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(u8);

impl BookId {
    /// All 66 books in canonical order.
    pub fn all() -> impl Iterator<Item = BookId> {
        (0..BOOK_COUNT).map(|i| BookId(i as u8))
    }

    /// Genesis.
    pub fn first() -> BookId {
        BookId(0)
    }

    pub fn from_index(index: usize) -> Option<BookId> {
        (index < BOOK_COUNT).then(|| BookId(index as u8))
    }

    /// Resolves a book name. An exact canonical name wins; otherwise the
    /// comparison ignores case and whitespace ("song of solomon", "1 john").
    pub fn from_name(name: &str) -> Option<BookId> {
        if let Some(id) = BookId::all().find(|id| id.name() == name) {
            return Some(id);
        }

        let wanted = squash(name);
        if wanted.is_empty() {
            return None;
        }
        BookId::all().find(|id| squash(id.name()) == wanted)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn name(self) -> &'static str {
        let i = self.index();
        if i < OLD_TESTAMENT.len() {
            OLD_TESTAMENT[i]
        } else {
            NEW_TESTAMENT[i - OLD_TESTAMENT.len()]
        }
    }

    pub fn testament(self) -> Testament {
        if self.index() < OLD_TESTAMENT.len() {
            Testament::Old
        } else {
            Testament::New
        }
    }

    /// Name of the file holding this book inside a corpus directory.
    pub fn file_name(self) -> String {
        format!("{}.{}", self.name(), crate::config::BOOK_FILE_EXTENSION)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for BookId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

fn squash(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
