//! Corpus Module Tests
//!
//! Validates the canonical book list, the record model and directory loading.
//!
//! ## Test Scopes
//! - **Canon**: Order, testament split and name resolution.
//! - **Loader**: Subset loading, order preservation, failure atomicity, validation.
//! - **Model**: Chapter lookup by position versus number.

#[cfg(test)]
mod tests {
    use crate::corpus::canon::{BOOK_COUNT, NEW_TESTAMENT, OLD_TESTAMENT};
    use crate::corpus::loader::parse_book;
    use crate::corpus::{BookId, Corpus, Testament};
    use crate::error::LoadError;
    use crate::fixtures::{book, corpus, id, write_book, write_raw};
    use std::path::Path;
    use tempfile::tempdir;

    // ============================================================
    // CANON TESTS
    // ============================================================

    #[test]
    fn test_canon_has_66_books() {
        assert_eq!(OLD_TESTAMENT.len(), 39);
        assert_eq!(NEW_TESTAMENT.len(), 27);
        assert_eq!(BOOK_COUNT, 66);
        assert_eq!(BookId::all().count(), 66);
    }

    #[test]
    fn test_canon_order_and_testaments() {
        let first = BookId::all().next().unwrap();
        let last = BookId::all().last().unwrap();

        assert_eq!(first.name(), "Genesis");
        assert_eq!(last.name(), "Revelation");
        assert_eq!(id("Malachi").testament(), Testament::Old);
        assert_eq!(id("Matthew").testament(), Testament::New);
        assert!(id("Malachi") < id("Matthew"));
        assert_eq!(Testament::New.books().next(), Some(id("Matthew")));
        assert_eq!(Testament::Old.books().count(), 39);
    }

    #[test]
    fn test_from_name_exact_and_relaxed() {
        assert_eq!(BookId::from_name("SongofSolomon"), Some(id("SongofSolomon")));
        assert_eq!(BookId::from_name("song of solomon"), Some(id("SongofSolomon")));
        assert_eq!(BookId::from_name("1 john"), Some(id("1John")));
        assert_eq!(BookId::from_name("GENESIS"), Some(id("Genesis")));
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(BookId::from_name("Enoch"), None);
        assert_eq!(BookId::from_name(""), None);
        assert_eq!(BookId::from_name("   "), None);
    }

    #[test]
    fn test_book_id_file_name() {
        assert_eq!(id("1Kings").file_name(), "1Kings.json");
        assert_eq!(BookId::from_index(65).map(|b| b.name()), Some("Revelation"));
        assert_eq!(BookId::from_index(66), None);
    }

    // ============================================================
    // LOADER TESTS
    // ============================================================

    #[test]
    fn test_load_subset_of_books() {
        let dir = tempdir().unwrap();
        let genesis = book(&[(1, &[(1, "In the beginning God created the heaven and the earth.")])]);
        let john = book(&[(1, &[(1, "In the beginning was the Word.")])]);
        write_book(dir.path(), "Genesis", &genesis);
        write_book(dir.path(), "John", &john);

        let loaded = Corpus::load(dir.path()).unwrap();

        let keys: Vec<&str> = loaded.book_ids().map(|b| b.name()).collect();
        assert_eq!(keys, vec!["Genesis", "John"]);
        assert_eq!(loaded.get(id("Genesis")), Some(&genesis));
        assert_eq!(loaded.get(id("John")), Some(&john));
        assert!(!loaded.contains(id("Exodus")));
    }

    #[test]
    fn test_load_preserves_file_order() {
        let dir = tempdir().unwrap();
        // Chapters deliberately out of numeric order.
        let psalms = book(&[
            (3, &[(2, "second"), (1, "first")]),
            (1, &[(1, "one")]),
            (2, &[(1, "two")]),
        ]);
        write_book(dir.path(), "Psalms", &psalms);

        let loaded = Corpus::load(dir.path()).unwrap();
        let got = loaded.get(id("Psalms")).unwrap();

        let numbers: Vec<u32> = got.chapters.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![3, 1, 2]);
        let verses: Vec<u32> = got.chapters[0].verses.iter().map(|v| v.number).collect();
        assert_eq!(verses, vec![2, 1]);
    }

    #[test]
    fn test_load_ignores_non_canonical_files() {
        let dir = tempdir().unwrap();
        write_book(dir.path(), "Enoch", &book(&[(1, &[(1, "apocrypha")])]));
        write_book(dir.path(), "Ruth", &book(&[(1, &[(1, "whither thou goest")])]));

        let loaded = Corpus::load(dir.path()).unwrap();

        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains(id("Ruth")));
    }

    #[test]
    fn test_load_empty_directory() {
        let dir = tempdir().unwrap();
        let loaded = Corpus::load(dir.path()).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(loaded.verse_count(), 0);
    }

    #[test]
    fn test_load_missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let loaded = Corpus::load(&missing).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_malformed_file_fails_whole_load() {
        let dir = tempdir().unwrap();
        write_book(dir.path(), "Genesis", &book(&[(1, &[(1, "valid")])]));
        write_raw(dir.path(), "Exodus", "{ \"chapters\": [ { \"chapter\": 1 ");

        let err = Corpus::load(dir.path()).unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.path().ends_with("Exodus.json"));
    }

    #[test]
    fn test_load_wrong_shape_fails() {
        let dir = tempdir().unwrap();
        write_raw(dir.path(), "Jude", r#"{"book": "Jude"}"#);

        let err = Corpus::load(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_load_accepts_string_numbers() {
        let dir = tempdir().unwrap();
        write_raw(
            dir.path(),
            "Jude",
            r#"{"book": "Jude", "chapters": [{"chapter": "1", "verses": [{"verse": "1", "text": "Jude, the servant of Jesus Christ"}]}]}"#,
        );

        let loaded = Corpus::load(dir.path()).unwrap();
        let jude = loaded.get(id("Jude")).unwrap();
        assert_eq!(jude.chapters[0].number, 1);
        assert_eq!(jude.chapters[0].verses[0].number, 1);
    }

    #[test]
    fn test_negative_verse_number_is_parse_error() {
        let raw = r#"{"chapters": [{"chapter": 1, "verses": [{"verse": -1, "text": "x"}]}]}"#;
        let err = parse_book(raw, Path::new("Ruth.json")).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_zero_chapter_is_invalid() {
        let raw = r#"{"chapters": [{"chapter": 0, "verses": []}]}"#;
        let err = parse_book(raw, Path::new("Ruth.json")).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { .. }));
    }

    #[test]
    fn test_zero_verse_is_invalid() {
        let raw = r#"{"chapters": [{"chapter": 1, "verses": [{"verse": 0, "text": "x"}]}]}"#;
        let err = parse_book(raw, Path::new("Ruth.json")).unwrap_err();
        assert!(matches!(err, LoadError::Invalid { .. }));
    }

    #[test]
    fn test_duplicate_chapter_is_invalid() {
        let raw = r#"{"chapters": [
            {"chapter": 1, "verses": [{"verse": 1, "text": "a"}]},
            {"chapter": 1, "verses": [{"verse": 1, "text": "b"}]}
        ]}"#;
        let err = parse_book(raw, Path::new("Ruth.json")).unwrap_err();
        match err {
            LoadError::Invalid { reason, .. } => assert!(reason.contains("more than once")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_entry_is_read_error() {
        let dir = tempdir().unwrap();
        // A directory where a file is expected cannot be read as text.
        std::fs::create_dir(dir.path().join("Mark.json")).unwrap();

        let err = Corpus::load(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    // ============================================================
    // MODEL TESTS
    // ============================================================

    #[test]
    fn test_chapter_position_differs_from_number() {
        let b = book(&[(5, &[(1, "five")]), (2, &[(1, "two")])]);

        assert_eq!(b.chapter(0).map(|c| c.number), Some(5));
        assert_eq!(b.chapter_by_number(2).map(|c| c.verses[0].text.as_str()), Some("two"));
        assert_eq!(b.chapter_index(2), Some(1));
        assert_eq!(b.chapter_by_number(1), None);
    }

    #[test]
    fn test_corpus_iterates_in_canonical_order() {
        // Inserted in reverse canonical order.
        let c = corpus(vec![
            ("Revelation", book(&[(1, &[(1, "r")])])),
            ("Genesis", book(&[(1, &[(1, "g"), (2, "g2")])])),
        ]);

        let names: Vec<&str> = c.books().map(|(b, _)| b.name()).collect();
        assert_eq!(names, vec!["Genesis", "Revelation"]);
        assert_eq!(c.verse_count(), 3);
        assert_eq!(c.chapter_count(), 2);
        assert!(c.get_by_name("revelation").is_some());
    }
}
