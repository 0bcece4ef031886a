use super::types::{SearchResult, VerseRef};
use crate::config::TOP_BOOKS;
use crate::corpus::Corpus;
use crate::error::QueryError;
use regex::RegexBuilder;
use std::ops::Range;

/// Case-insensitive substring search over every verse of the corpus.
///
/// The keyword is trimmed and lowercased and compared against the lowercased
/// verse text, so "cat" also matches inside "catastrophe". Matches come back
/// in canonical book order, then file chapter and verse order.
pub fn search(corpus: &Corpus, keyword: &str) -> Result<SearchResult, QueryError> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Err(QueryError::invalid("search keyword is empty"));
    }

    let mut result = SearchResult {
        keyword,
        ..SearchResult::default()
    };

    for (book_id, book) in corpus.books() {
        for (chapter, verse) in book.verses() {
            if !verse.text.to_lowercase().contains(&result.keyword) {
                continue;
            }

            result.matches.push(VerseRef {
                book: book_id,
                chapter: chapter.number,
                verse: verse.number,
                text: verse.text.clone(),
            });
            result.books_with_matches.insert(book_id);
            result.chapters_with_matches.insert((book_id, chapter.number));
            *result.match_count_per_book.entry(book_id).or_insert(0) += 1;
        }
    }

    result.top_books = result.top(TOP_BOOKS);

    tracing::debug!(
        "Search '{}': {} matches in {} books",
        result.keyword,
        result.total_matches(),
        result.books_with_matches.len()
    );

    Ok(result)
}

/// Byte ranges of every non-overlapping, case-insensitive occurrence of
/// `keyword` in `text`. A blank keyword has no occurrences.
pub fn match_spans(text: &str, keyword: &str) -> Vec<Range<usize>> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Vec::new();
    }

    let pattern = regex::escape(keyword);
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.find_iter(text).map(|m| m.range()).collect(),
        Err(err) => {
            tracing::warn!("Cannot highlight '{}': {}", keyword, err);
            Vec::new()
        }
    }
}
