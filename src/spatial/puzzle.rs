//! Complete immutable problem description handed to the solver

use crate::io::error::Result;
use crate::spatial::grid::{LetterGrid, Structure};
use crate::spatial::overlaps::OverlapMap;
use crate::spatial::slots::{Slot, SlotId, extract_slots};
use crate::spatial::vocabulary::{Vocabulary, WordId};

/// Grid geometry, slot overlaps and vocabulary
///
/// Built once and shared by reference with every solving session.
#[derive(Debug, Clone)]
pub struct Puzzle {
    structure: Structure,
    slots: Vec<Slot>,
    overlaps: OverlapMap,
    vocabulary: Vocabulary,
}

impl Puzzle {
    /// Derive slots and overlaps from a structure
    pub fn new(structure: Structure, vocabulary: Vocabulary) -> Self {
        let slots = extract_slots(&structure);
        let overlaps = OverlapMap::from_slots(&slots);
        Self {
            structure,
            slots,
            overlaps,
            vocabulary,
        }
    }

    /// Parse a structure description and a word list
    ///
    /// # Errors
    ///
    /// Returns an error if the structure description is invalid
    pub fn parse(structure: &str, words: &str) -> Result<Self> {
        Ok(Self::new(Structure::parse(structure)?, Vocabulary::parse(words)))
    }

    /// Grid layout
    pub const fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Slots in identity order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot with the given identity
    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id)
    }

    /// Number of slots
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Overlap relation between slots
    pub const fn overlaps(&self) -> &OverlapMap {
        &self.overlaps
    }

    /// Candidate words
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Lay the given slot words onto a letter grid
    ///
    /// Unknown slots or word identities are skipped.
    pub fn letter_grid<I>(&self, placements: I) -> LetterGrid
    where
        I: IntoIterator<Item = (SlotId, WordId)>,
    {
        let mut grid = LetterGrid::new(self.structure.height(), self.structure.width());
        for (slot_id, word_id) in placements {
            let Some(slot) = self.slot(slot_id) else {
                continue;
            };
            for (index, (row, col)) in slot.cells().enumerate() {
                if let Some(letter) = self.vocabulary.letter(word_id, index) {
                    grid.place(row, col, letter);
                }
            }
        }
        grid
    }
}
