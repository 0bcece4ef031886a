use crate::corpus::{Book, BookId, Chapter, Corpus};

/// Reading position: the selected book and a chapter *position* within it.
///
/// The position indexes `Book::chapters`; it is not a chapter number. State
/// only changes through the transition methods below, and none of them touch
/// the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    book: BookId,
    chapter_index: usize,
}

impl Navigator {
    pub fn new(book: BookId) -> Self {
        Self {
            book,
            chapter_index: 0,
        }
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn chapter_index(&self) -> usize {
        self.chapter_index
    }

    /// Switches to `book` and goes back to its first chapter.
    pub fn select_book(&mut self, book: BookId) {
        self.book = book;
        self.chapter_index = 0;
    }

    /// Moves to the next chapter. Returns `false` at the last chapter, or when
    /// the book is not loaded.
    pub fn next_chapter(&mut self, corpus: &Corpus) -> bool {
        let len = self.chapter_count(corpus);
        if self.chapter_index + 1 < len {
            self.chapter_index += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous chapter. Returns `false` at the first chapter.
    pub fn previous_chapter(&mut self) -> bool {
        if self.chapter_index > 0 {
            self.chapter_index -= 1;
            true
        } else {
            false
        }
    }

    /// Moves to the chapter carrying `number`, wherever it sits in the book.
    pub fn go_to_chapter_number(&mut self, corpus: &Corpus, number: u32) -> bool {
        match self.current_book(corpus).and_then(|b| b.chapter_index(number)) {
            Some(index) => {
                self.chapter_index = index;
                true
            }
            None => false,
        }
    }

    pub fn current_book<'a>(&self, corpus: &'a Corpus) -> Option<&'a Book> {
        corpus.get(self.book)
    }

    pub fn current_chapter<'a>(&self, corpus: &'a Corpus) -> Option<&'a Chapter> {
        self.current_book(corpus)
            .and_then(|b| b.chapter(self.chapter_index))
    }

    pub fn chapter_count(&self, corpus: &Corpus) -> usize {
        self.current_book(corpus).map_or(0, |b| b.chapters.len())
    }
}

impl Default for Navigator {
    /// Opens at the first canonical book.
    fn default() -> Self {
        Self::new(BookId::first())
    }
}
