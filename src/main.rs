use anyhow::{bail, Context};
use bible_viewer::config::{self, ViewerConfig};
use bible_viewer::corpus::{BookId, Corpus};
use bible_viewer::error::QueryError;
use bible_viewer::query::{self, CloudScope};
use bible_viewer::viewer::{self, Markup, Navigator};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bible-viewer", version, about = "Browse, search and analyse the Bible")]
struct Cli {
    /// Directory holding one <Book>.json file per book.
    #[arg(long, global = true, env = config::CORPUS_DIR_ENV)]
    corpus: Option<PathBuf>,

    /// Log at DEBUG instead of INFO.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Never emit ANSI escape codes.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Table of contents, by testament.
    Contents,
    /// Read a book chapter by chapter.
    Read {
        /// Book to open. Defaults to Genesis.
        book: Option<String>,
        /// Chapter number to open at.
        #[arg(long)]
        chapter: Option<u32>,
        /// Print the page and exit instead of prompting.
        #[arg(long)]
        once: bool,
    },
    /// Show a random verse.
    Random {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Search every verse for a keyword or phrase.
    Search { keyword: String },
    /// Most frequent words of one book or the whole Bible.
    Cloud {
        #[arg(long)]
        book: Option<String>,
        #[arg(long, default_value_t = config::DEFAULT_MAX_WORDS)]
        max_words: usize,
    },
    /// About this application.
    About,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let seed = match &cli.command {
        Command::Random { seed } => *seed,
        _ => None,
    };
    let config = ViewerConfig::new(cli.corpus.clone(), cli.verbose, seed);

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(io::stderr)
        .init();

    let markup = if cli.plain || !io::stdout().is_terminal() {
        Markup::Plain
    } else {
        Markup::Ansi
    };

    if let Command::About = cli.command {
        print!("{}", viewer::render_about());
        return Ok(());
    }

    tracing::debug!("Using corpus directory {}", config.corpus_dir.display());
    let corpus = Corpus::load(&config.corpus_dir)
        .with_context(|| format!("loading corpus from {}", config.corpus_dir.display()))?;

    match cli.command {
        Command::Contents => print!("{}", viewer::render_contents(&corpus)),
        Command::Read {
            book,
            chapter,
            once,
        } => read(&corpus, book.as_deref(), chapter, once, markup)?,
        Command::Random { .. } => random(&corpus, &config)?,
        Command::Search { keyword } => match query::search(&corpus, &keyword) {
            Ok(result) => print!("{}", viewer::render_search_report(&result, markup)),
            Err(QueryError::InvalidQuery { .. }) => {
                bail!("Please enter a keyword or phrase to search.")
            }
            Err(err) => return Err(err.into()),
        },
        Command::Cloud { book, max_words } => cloud(&corpus, book.as_deref(), max_words)?,
        Command::About => {}
    }

    Ok(())
}

fn parse_book(name: &str) -> anyhow::Result<BookId> {
    BookId::from_name(name).with_context(|| format!("'{}' is not a book of the Bible", name))
}

fn random(corpus: &Corpus, config: &ViewerConfig) -> anyhow::Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match query::random_verse(corpus, &mut rng) {
        Ok(verse) => print!("{}", viewer::render_random_verse(&verse)),
        Err(QueryError::EmptyCorpus) => {
            bail!("Nothing loaded: no verses found in {}", config.corpus_dir.display())
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn cloud(corpus: &Corpus, book: Option<&str>, max_words: usize) -> anyhow::Result<()> {
    let max_words = config::validate_max_words(max_words)?;
    let scope = match book {
        Some(name) => CloudScope::Book(parse_book(name)?),
        None => CloudScope::EntireCorpus,
    };

    let text = query::scope_text(corpus, scope)?;
    let words = query::word_frequencies(&text, max_words)?;
    print!("{}", viewer::render_word_cloud(&words, scope, max_words));
    Ok(())
}

fn read(
    corpus: &Corpus,
    book: Option<&str>,
    chapter: Option<u32>,
    once: bool,
    markup: Markup,
) -> anyhow::Result<()> {
    let mut nav = match book {
        Some(name) => Navigator::new(parse_book(name)?),
        None => Navigator::default(),
    };
    if let Some(number) = chapter {
        if !nav.go_to_chapter_number(corpus, number) {
            bail!("{} has no chapter {}", nav.book(), number);
        }
    }

    print!("{}", viewer::render_page(corpus, &nav, markup));
    if once {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "\n[n]ext, [p]revious, [b]ook <name>, [q]uit > ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (cmd, arg) = line.split_once(' ').unwrap_or((line, ""));
        let moved = match cmd {
            "n" | "next" => nav.next_chapter(corpus),
            "p" | "prev" | "previous" => nav.previous_chapter(),
            "b" | "book" => match BookId::from_name(arg.trim()) {
                Some(id) => {
                    nav.select_book(id);
                    true
                }
                None => {
                    println!("Unknown book '{}'", arg.trim());
                    continue;
                }
            },
            "q" | "quit" => break,
            "" => continue,
            other => {
                println!("Unknown command '{}'", other);
                continue;
            }
        };

        if moved {
            print!("\n{}", viewer::render_page(corpus, &nav, markup));
        } else {
            println!("No more chapters in that direction.");
        }
    }

    Ok(())
}
