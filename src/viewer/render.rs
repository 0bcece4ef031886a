use super::navigation::Navigator;
use crate::corpus::{Chapter, Corpus, Testament};
use crate::query::{match_spans, CloudScope, SearchResult, VerseRef, WordWeight};
use std::fmt::Write;

/// Width of the longest bar in a rendered word cloud.
const CLOUD_BAR_WIDTH: usize = 40;

/// How emphasis and keyword highlights are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// No escape codes. Highlights are bracketed so they survive piping.
    Plain,
    /// ANSI bold for emphasis, black on yellow for search highlights.
    Ansi,
}

impl Markup {
    pub fn strong(self, text: &str) -> String {
        match self {
            Markup::Plain => text.to_string(),
            Markup::Ansi => format!("\x1b[1m{}\x1b[0m", text),
        }
    }

    pub fn highlight(self, text: &str) -> String {
        match self {
            Markup::Plain => format!("[{}]", text),
            Markup::Ansi => format!("\x1b[30;43m{}\x1b[0m", text),
        }
    }
}

pub fn render_about() -> String {
    format!(
        "About Bible Viewer\n\nBible Viewer {}\n\nBrowse, search and analyse the Bible from the terminal.\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Both testaments with their books; books missing from the corpus are marked.
pub fn render_contents(corpus: &Corpus) -> String {
    let mut out = String::new();

    for testament in [Testament::Old, Testament::New] {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", testament.title());
        for book in testament.books() {
            if corpus.contains(book) {
                let _ = writeln!(out, "  {}", book);
            } else {
                let _ = writeln!(out, "  {} (not loaded)", book);
            }
        }
    }

    out
}

/// One chapter: a header, then each verse as number, emphasised first word
/// and the rest of the text.
pub fn render_chapter(chapter: &Chapter, markup: Markup) -> String {
    let mut out = format!("{}\n\n", markup.strong(&format!("Chapter {}", chapter.number)));

    for verse in &chapter.verses {
        let text = verse.text.trim_start();
        let (first_word, rest) = match text.split_once(' ') {
            Some((first, rest)) => (first, Some(rest)),
            None => (text, None),
        };

        let _ = write!(
            out,
            "{} {}",
            markup.strong(&verse.number.to_string()),
            markup.strong(first_word)
        );
        if let Some(rest) = rest {
            let _ = write!(out, " {}", rest);
        }
        out.push('\n');
    }

    out
}

/// The reading page for the navigator's current position.
pub fn render_page(corpus: &Corpus, nav: &Navigator, markup: Markup) -> String {
    let book = nav.book();
    match nav.current_chapter(corpus) {
        Some(chapter) => format!(
            "{} ({} of {})\n\n{}",
            book,
            nav.chapter_index() + 1,
            nav.chapter_count(corpus),
            render_chapter(chapter, markup)
        ),
        None => format!("{}\n\nThis book has no chapters.\n", book),
    }
}

pub fn render_random_verse(verse: &VerseRef) -> String {
    format!("{}\n\n{}\n", verse.reference(), verse.text)
}

/// Search statistics followed by every match with the keyword highlighted.
pub fn render_search_report(result: &SearchResult, markup: Markup) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Search Term: '{}'", result.keyword);
    let _ = writeln!(out, "Total Matches: {}", result.total_matches());
    let _ = writeln!(out, "Books with Matches: {}", result.books_with_matches.len());
    let _ = writeln!(
        out,
        "Chapters with Matches: {}",
        result.chapters_with_matches.len()
    );
    let _ = writeln!(out, "Top Books with Matches:");
    for (book, count) in &result.top_books {
        let _ = writeln!(out, "  {}: {} matches", book, count);
    }
    out.push('\n');

    if result.is_empty() {
        out.push_str("No matches found.\n");
        return out;
    }

    for verse in &result.matches {
        let _ = writeln!(
            out,
            "{} - {}\n",
            verse.reference(),
            highlight_keyword(&verse.text, &result.keyword, markup)
        );
    }

    out
}

/// Wraps every occurrence of `keyword` in `text` with the highlight markup.
pub fn highlight_keyword(text: &str, keyword: &str, markup: Markup) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for span in match_spans(text, keyword) {
        out.push_str(&text[last..span.start]);
        out.push_str(&markup.highlight(&text[span.clone()]));
        last = span.end;
    }
    out.push_str(&text[last..]);

    out
}

/// A textual word cloud: one line per word with a bar proportional to its
/// weight against the most frequent word.
pub fn render_word_cloud(words: &[WordWeight], scope: CloudScope, max_words: usize) -> String {
    let mut out = format!("Word Cloud (Top {} Words) - {}\n\n", max_words, scope.label());

    let max_count = words.first().map_or(0, |w| w.count);
    let width = words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);

    for w in words {
        let bar = ((w.relative(max_count) * CLOUD_BAR_WIDTH as f64).ceil() as usize).max(1);
        let _ = writeln!(
            out,
            "{:<width$}  {} {}",
            w.word,
            "#".repeat(bar),
            w.count,
            width = width
        );
    }

    if words.is_empty() {
        out.push_str("No words to show.\n");
    }

    out
}
