//! Per-slot candidate sets and the unary length filter
//!
//! Domains only ever shrink during a solving session. Backtracking undoes a
//! failed propagation attempt by restoring a [`DomainSnapshot`] taken before it.

use crate::algorithm::bitset::WordBitset;
use crate::spatial::{Puzzle, SlotId, WordId};
use log::info;

/// Mutable domain of every slot, one bitset per slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<WordBitset>,
}

/// Frozen copy of all domains used to undo a failed branch
#[derive(Clone, Debug)]
pub struct DomainSnapshot {
    domains: Vec<WordBitset>,
}

impl DomainStore {
    /// Seed every slot with the whole vocabulary
    pub fn new(puzzle: &Puzzle) -> Self {
        let word_count = puzzle.vocabulary().len();
        Self {
            domains: vec![WordBitset::all(word_count); puzzle.slot_count()],
        }
    }

    /// Build a store from explicit domains, indexed by slot
    pub const fn from_domains(domains: Vec<WordBitset>) -> Self {
        Self { domains }
    }

    /// Current domain of a slot
    pub fn domain(&self, slot: SlotId) -> Option<&WordBitset> {
        self.domains.get(slot)
    }

    /// Mutable domain of a slot
    pub fn domain_mut(&mut self, slot: SlotId) -> Option<&mut WordBitset> {
        self.domains.get_mut(slot)
    }

    /// Remaining candidate count of a slot (zero for unknown slots)
    pub fn size(&self, slot: SlotId) -> usize {
        self.domain(slot).map_or(0, WordBitset::count)
    }

    /// Whether a slot has run out of candidates
    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.size(slot) == 0
    }

    /// Number of slots tracked
    pub fn slot_count(&self) -> usize {
        self.domains.len()
    }

    /// Collapse a slot's domain to a single word
    pub fn restrict_to(&mut self, slot: SlotId, word: WordId) {
        if let Some(domain) = self.domains.get_mut(slot) {
            let capacity = domain.capacity();
            *domain = WordBitset::singleton(capacity, word);
        }
    }

    /// Sum of all domain sizes
    pub fn total_candidates(&self) -> usize {
        self.domains.iter().map(WordBitset::count).sum()
    }

    /// Whether every domain here is contained in the matching domain of `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.domains.len() == other.domains.len()
            && self
                .domains
                .iter()
                .zip(&other.domains)
                .all(|(mine, theirs)| mine.is_subset(theirs))
    }

    /// Capture all domains
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    /// Return every domain to a captured state
    pub fn restore(&mut self, snapshot: DomainSnapshot) {
        self.domains = snapshot.domains;
    }

    /// Remove every word whose length differs from its slot's length
    ///
    /// Idempotent. An empty domain is a valid outcome and is not reported here.
    pub fn enforce_node_consistency(&mut self, puzzle: &Puzzle) {
        let vocabulary = puzzle.vocabulary();
        let mut fitting_by_length: Vec<Option<WordBitset>> = Vec::new();

        for slot in puzzle.slots() {
            let Some(domain) = self.domains.get_mut(slot.id) else {
                continue;
            };

            if fitting_by_length.len() <= slot.length {
                fitting_by_length.resize(slot.length + 1, None);
            }
            let Some(entry) = fitting_by_length.get_mut(slot.length) else {
                continue;
            };
            let fitting = entry.get_or_insert_with(|| {
                let mut fitting = WordBitset::new(vocabulary.len());
                for word in 0..vocabulary.len() {
                    if vocabulary.word_len(word) == Some(slot.length) {
                        fitting.insert(word);
                    }
                }
                fitting
            });

            domain.intersect_with(fitting);
        }

        info!(
            "node consistency left {} candidates across {} slots",
            self.total_candidates(),
            self.domains.len()
        );
    }
}
