//! Immutable candidate word table shared by every slot

use std::collections::BTreeSet;

/// Dense word identity, an index into the sorted vocabulary
pub type WordId = usize;

/// Sorted, de-duplicated set of candidate words
///
/// Lengths and letter positions are measured in `char`s so that multi-byte
/// letters occupy a single cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    letters: Vec<Vec<char>>,
}

impl Vocabulary {
    /// Build a vocabulary from arbitrary words, keeping them exactly as given
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        let words: Vec<String> = unique.into_iter().collect();
        let letters = words.iter().map(|word| word.chars().collect()).collect();
        Self { words, letters }
    }

    /// Parse a word list: one word per line, trimmed, upper-cased, blanks skipped
    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_uppercase),
        )
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Text of a word
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Length of a word in characters
    pub fn word_len(&self, id: WordId) -> Option<usize> {
        self.letters.get(id).map(Vec::len)
    }

    /// Character at `index` within a word
    pub fn letter(&self, id: WordId, index: usize) -> Option<char> {
        self.letters.get(id).and_then(|letters| letters.get(index)).copied()
    }

    /// Identity of a word, if present
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .ok()
    }

    /// All words in identity order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
