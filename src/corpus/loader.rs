use super::canon::BookId;
use super::types::{Book, Corpus};
use crate::error::LoadError;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

impl Corpus {
    /// Loads every canonical book found in `dir`.
    ///
    /// Books are looked up as `<Name>.json` in canonical order. A missing file
    /// is skipped; a file that cannot be read, parsed or validated fails the
    /// whole load and nothing loaded so far is returned.
    pub fn load(dir: impl AsRef<Path>) -> Result<Corpus, LoadError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            tracing::warn!("Corpus directory {} does not exist", dir.display());
        }

        let mut books = BTreeMap::new();
        for id in BookId::all() {
            let path = dir.join(id.file_name());
            if let Some(book) = load_book(&path)? {
                tracing::debug!(
                    "Loaded {} ({} chapters, {} verses)",
                    id,
                    book.chapters.len(),
                    book.verse_count()
                );
                books.insert(id, book);
            } else {
                tracing::debug!("No file for {}, skipping", id);
            }
        }

        let corpus = Corpus::from_books(books);
        tracing::info!(
            "Corpus loaded from {}: {} books, {} chapters, {} verses",
            dir.display(),
            corpus.len(),
            corpus.chapter_count(),
            corpus.verse_count()
        );

        Ok(corpus)
    }
}

/// Reads one book file. `Ok(None)` means the file does not exist.
pub fn load_book(path: &Path) -> Result<Option<Book>, LoadError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(LoadError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    parse_book(&raw, path).map(Some)
}

/// Parses and validates book JSON. `path` is only used for error reporting.
pub fn parse_book(raw: &str, path: &Path) -> Result<Book, LoadError> {
    let book: Book = serde_json::from_str(raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_book(&book).map_err(|reason| LoadError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;

    Ok(book)
}

fn validate_book(book: &Book) -> Result<(), String> {
    let mut seen = HashSet::new();

    for (position, chapter) in book.chapters.iter().enumerate() {
        if chapter.number == 0 {
            return Err(format!("chapter at position {} has number 0", position + 1));
        }
        if !seen.insert(chapter.number) {
            return Err(format!("chapter {} appears more than once", chapter.number));
        }
        if let Some(verse) = chapter.verses.iter().find(|v| v.number == 0) {
            return Err(format!(
                "chapter {} has a verse numbered {}",
                chapter.number, verse.number
            ));
        }
    }

    Ok(())
}
