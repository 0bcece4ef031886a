use super::types::WordWeight;
use crate::error::QueryError;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    // Letters, with an apostrophe allowed between letters ("lord's").
    WORD.get_or_init(|| {
        Regex::new(r"\p{Alphabetic}+(?:['’]\p{Alphabetic}+)*").expect("word pattern is valid")
    })
}

/// Lowercased words of `text` in order of appearance. Digits and punctuation
/// separate words and are dropped.
pub fn tokenize_words(text: &str) -> Vec<String> {
    word_regex()
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The `max_words` most frequent words of `text`.
///
/// Counts are case-insensitive. Higher counts come first; equal counts keep
/// the order in which the words first appear in `text`.
pub fn word_frequencies(text: &str, max_words: usize) -> Result<Vec<WordWeight>, QueryError> {
    if max_words == 0 {
        return Err(QueryError::invalid("max_words must be at least 1"));
    }

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counted: Vec<WordWeight> = Vec::new();

    for word in tokenize_words(text) {
        match positions.get(&word) {
            Some(&i) => counted[i].count += 1,
            None => {
                positions.insert(word.clone(), counted.len());
                counted.push(WordWeight { word, count: 1 });
            }
        }
    }

    // Stable: ties stay in first-occurrence order.
    counted.sort_by(|a, b| b.count.cmp(&a.count));
    counted.truncate(max_words);

    tracing::debug!(
        "Word frequencies: {} distinct words, returning {}",
        positions.len(),
        counted.len()
    );

    Ok(counted)
}
