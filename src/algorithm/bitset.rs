use crate::spatial::vocabulary::WordId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over vocabulary word identities
///
/// One bit per vocabulary word. Provides O(1) membership testing and
/// word-parallel set operations for domain pruning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBitset {
    bits: BitVec,
}

impl WordBitset {
    /// Create a bitset with no words present
    pub fn new(word_count: usize) -> Self {
        Self {
            bits: bitvec![0; word_count],
        }
    }

    /// Create a bitset containing every word
    pub fn all(word_count: usize) -> Self {
        Self {
            bits: bitvec![1; word_count],
        }
    }

    /// Create a bitset holding only `word`
    pub fn singleton(word_count: usize, word: WordId) -> Self {
        let mut bitset = Self::new(word_count);
        bitset.insert(word);
        bitset
    }

    /// Insert a word; identities beyond the capacity are ignored
    pub fn insert(&mut self, word: WordId) {
        if word < self.bits.len() {
            self.bits.set(word, true);
        }
    }

    /// Remove a word
    pub fn remove(&mut self, word: WordId) {
        if word < self.bits.len() {
            self.bits.set(word, false);
        }
    }

    /// Test word membership
    pub fn contains(&self, word: WordId) -> bool {
        self.bits.get(word).as_deref() == Some(&true)
    }

    /// Intersect this bitset with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Add every word of another bitset in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Create a new bitset containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Whether every word here is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.intersection(other).count() == self.count()
    }

    /// Test if no words are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count words in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of words the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Iterate word identities in ascending order
    pub fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all word identities as a vector
    pub fn to_vec(&self) -> Vec<WordId> {
        self.iter().collect()
    }
}

impl fmt::Display for WordBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordBitset({} words: {:?})", self.count(), self.to_vec())
    }
}
