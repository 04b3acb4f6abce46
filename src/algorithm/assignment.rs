use crate::spatial::{Puzzle, SlotId, Vocabulary, WordId};

/// Mapping from slot to its chosen word
///
/// Partial while the search runs; complete once every slot is bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
}

impl Assignment {
    /// Create an assignment with every slot unbound
    pub fn empty(slot_count: usize) -> Self {
        Self {
            words: vec![None; slot_count],
        }
    }

    /// Bind a slot to a word; slots outside the assignment are ignored
    pub fn bind(&mut self, slot: SlotId, word: WordId) {
        if let Some(entry) = self.words.get_mut(slot) {
            *entry = Some(word);
        }
    }

    /// Unbind a slot
    pub fn unbind(&mut self, slot: SlotId) {
        if let Some(entry) = self.words.get_mut(slot) {
            *entry = None;
        }
    }

    /// Word bound to a slot
    pub fn get(&self, slot: SlotId) -> Option<WordId> {
        self.words.get(slot).copied().flatten()
    }

    /// Whether a slot is bound
    pub fn is_assigned(&self, slot: SlotId) -> bool {
        self.get(slot).is_some()
    }

    /// Number of bound slots
    pub fn len(&self) -> usize {
        self.words.iter().flatten().count()
    }

    /// Whether no slot is bound
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every slot is bound
    pub fn is_complete(&self) -> bool {
        self.words.iter().all(Option::is_some)
    }

    /// Whether some slot other than `slot` is bound to `word`
    pub fn uses_word_elsewhere(&self, slot: SlotId, word: WordId) -> bool {
        self.iter()
            .any(|(other, bound)| other != slot && bound == word)
    }

    /// Bound `(slot, word)` pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, WordId)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(slot, word)| word.map(|word| (slot, word)))
    }

    /// Text of the word bound to a slot
    pub fn word<'v>(&self, slot: SlotId, vocabulary: &'v Vocabulary) -> Option<&'v str> {
        self.get(slot).and_then(|word| vocabulary.word(word))
    }

    /// Bound words as `(slot, text)` pairs, resolved against the puzzle vocabulary
    pub fn words<'p>(&self, puzzle: &'p Puzzle) -> Vec<(SlotId, &'p str)> {
        self.iter()
            .filter_map(|(slot, word)| puzzle.vocabulary().word(word).map(|text| (slot, text)))
            .collect()
    }
}
