use super::types::VerseRef;
use crate::corpus::{Book, BookId, Chapter, Corpus};
use crate::error::QueryError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks a verse with three independent uniform draws: a book, then one of
/// its chapters, then one of that chapter's verses.
///
/// This is not a flat draw over all verses. Short books and chapters are
/// over-represented per verse, which is the sampling the viewer has always
/// used. Books and chapters with no verses are not drawn.
pub fn random_verse<R>(corpus: &Corpus, rng: &mut R) -> Result<VerseRef, QueryError>
where
    R: Rng + ?Sized,
{
    let books: Vec<(BookId, &Book)> = corpus
        .books()
        .filter(|(_, book)| book.verse_count() > 0)
        .collect();

    let (book_id, book) = books.choose(rng).ok_or(QueryError::EmptyCorpus)?;

    let chapters: Vec<&Chapter> = book
        .chapters
        .iter()
        .filter(|c| !c.verses.is_empty())
        .collect();
    let chapter = chapters.choose(rng).ok_or(QueryError::EmptyCorpus)?;
    let verse = chapter.verses.choose(rng).ok_or(QueryError::EmptyCorpus)?;

    tracing::debug!("Random verse {} {}:{}", book_id, chapter.number, verse.number);

    Ok(VerseRef {
        book: *book_id,
        chapter: chapter.number,
        verse: verse.number,
        text: verse.text.clone(),
    })
}
