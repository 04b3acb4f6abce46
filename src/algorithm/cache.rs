use crate::algorithm::bitset::WordBitset;
use crate::spatial::vocabulary::Vocabulary;
use std::collections::HashMap;

/// Key for caching letter-position lookups
///
/// Identifies every word carrying `letter` at character `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LetterKey {
    index: usize,
    letter: char,
}

impl LetterKey {
    /// Create a key for a character position and letter
    pub const fn new(index: usize, letter: char) -> Self {
        Self { index, letter }
    }
}

/// Memoization cache mapping a letter position to the words that match it
///
/// Arc revision asks "which words have letter `c` at index `i`" for the same few
/// keys over and over; each answer is a bitset over the vocabulary that is
/// computed on first use and reused for the rest of the session.
#[derive(Default)]
pub struct LetterIndexCache {
    /// Letter position to matching words mapping
    letter_cache: HashMap<LetterKey, WordBitset>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl LetterIndexCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Words of `vocabulary` whose character at `key.index` is `key.letter`
    pub fn words_with_letter(&mut self, vocabulary: &Vocabulary, key: LetterKey) -> &WordBitset {
        self.get_or_compute(key, || {
            let mut matching = WordBitset::new(vocabulary.len());
            for word in 0..vocabulary.len() {
                if vocabulary.letter(word, key.index) == Some(key.letter) {
                    matching.insert(word);
                }
            }
            matching
        })
    }

    /// Retrieve cached result or compute and store new one
    pub fn get_or_compute<F>(&mut self, key: LetterKey, compute_fn: F) -> &WordBitset
    where
        F: FnOnce() -> WordBitset,
    {
        use std::collections::hash_map::Entry;

        match self.letter_cache.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(compute_fn())
            }
        }
    }

    /// Number of distinct keys stored
    pub fn len(&self) -> usize {
        self.letter_cache.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.letter_cache.is_empty()
    }
}
