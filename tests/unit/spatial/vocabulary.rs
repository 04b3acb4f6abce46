//! Tests for word list parsing and word lookups

#[cfg(test)]
mod tests {
    use crossfill::spatial::Vocabulary;

    // Tests parsing trims, upper-cases, skips blanks and removes duplicates
    // Verified by skipping the upper-case conversion
    #[test]
    fn test_parse_normalizes_words() {
        let vocabulary = Vocabulary::parse("  cat \n\nCat\ndog\n\n");

        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), vec!["CAT", "DOG"]);
    }

    // Tests identities follow sorted order and round-trip through id_of
    // Verified by keeping insertion order instead of sorting
    #[test]
    fn test_ids_are_sorted() {
        let vocabulary = Vocabulary::new(["pear", "apple", "fig"]);

        assert_eq!(vocabulary.word(0), Some("apple"));
        assert_eq!(vocabulary.word(2), Some("pear"));
        assert_eq!(vocabulary.id_of("fig"), Some(1));
        assert_eq!(vocabulary.id_of("kiwi"), None);
        assert_eq!(vocabulary.word(3), None);
    }

    // Tests lengths and letters are counted in characters, not bytes
    // Verified by using byte length in word_len
    #[test]
    fn test_letters_are_characters() {
        let vocabulary = Vocabulary::new(["ÉTÉ"]);

        assert_eq!(vocabulary.word_len(0), Some(3));
        assert_eq!(vocabulary.letter(0, 0), Some('É'));
        assert_eq!(vocabulary.letter(0, 1), Some('T'));
        assert_eq!(vocabulary.letter(0, 3), None);
    }

    // Tests the empty vocabulary
    // Verified by reporting a default length of one
    #[test]
    fn test_empty_vocabulary() {
        let vocabulary = Vocabulary::parse("\n \n");

        assert!(vocabulary.is_empty());
        assert_eq!(vocabulary.letter(0, 0), None);
    }
}
