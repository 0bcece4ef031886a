use crate::corpus::BookId;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A single located verse, as returned by search and random sampling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRef {
    pub book: BookId,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl VerseRef {
    /// `Book C:V`, the reference form shown by the viewer.
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.reference(), self.text)
    }
}

/// Matches of one keyword search plus the statistics derived from them.
///
/// All collections are keyed by `BookId`, so iteration is canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Trimmed, lowercased keyword that was searched for.
    pub keyword: String,
    pub matches: Vec<VerseRef>,
    pub books_with_matches: BTreeSet<BookId>,
    pub chapters_with_matches: BTreeSet<(BookId, u32)>,
    pub match_count_per_book: BTreeMap<BookId, usize>,
    /// Books with the most matches, highest first, ties in canonical order.
    pub top_books: Vec<(BookId, usize)>,
}

impl SearchResult {
    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Ranking of the `n` books with the most matches.
    ///
    /// `match_count_per_book` already iterates in canonical order, and the
    /// sort is stable, so equal counts keep canonical order.
    pub fn top(&self, n: usize) -> Vec<(BookId, usize)> {
        let mut ranked: Vec<(BookId, usize)> = self
            .match_count_per_book
            .iter()
            .map(|(book, count)| (*book, *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// A word and how often it occurs in the analysed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
}

impl WordWeight {
    /// Weight scaled against the most frequent word, in `0.0..=1.0`.
    pub fn relative(&self, max_count: usize) -> f64 {
        if max_count == 0 {
            return 0.0;
        }
        (self.count as f64 / max_count as f64).min(1.0)
    }
}

impl From<(&str, usize)> for WordWeight {
    fn from((word, count): (&str, usize)) -> Self {
        Self {
            word: word.to_string(),
            count,
        }
    }
}

/// Which text a word cloud is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudScope {
    EntireCorpus,
    Book(BookId),
}

impl CloudScope {
    pub fn label(&self) -> &'static str {
        match self {
            CloudScope::EntireCorpus => "Entire Bible",
            CloudScope::Book(book) => book.name(),
        }
    }
}
