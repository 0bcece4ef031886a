use super::types::CloudScope;
use crate::corpus::{Book, Corpus};
use crate::error::QueryError;

/// Every verse of `book` joined by single spaces, in file order.
pub fn book_text(book: &Book) -> String {
    join(book.verses().map(|(_, v)| v.text.as_str()))
}

/// Every verse of the corpus joined by single spaces, in canonical order.
pub fn corpus_text(corpus: &Corpus) -> String {
    join(
        corpus
            .books()
            .flat_map(|(_, book)| book.verses().map(|(_, v)| v.text.as_str())),
    )
}

/// Text for a word cloud scope. A canonical book that was not loaded is an
/// error rather than an empty cloud.
pub fn scope_text(corpus: &Corpus, scope: CloudScope) -> Result<String, QueryError> {
    match scope {
        CloudScope::EntireCorpus => Ok(corpus_text(corpus)),
        CloudScope::Book(id) => corpus
            .get(id)
            .filter(|book| !book.chapters.is_empty())
            .map(book_text)
            .ok_or_else(|| QueryError::BookUnavailable(id.name().to_string())),
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}
