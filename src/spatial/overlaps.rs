//! Symmetric overlap relation between crossing slots
//!
//! The map is computed once and never mutated. For every ordered pair of
//! crossing slots `(a, b)` it stores the character index within `a`'s word and
//! within `b`'s word that must agree; `(b, a)` stores the same pair swapped.

use crate::spatial::slots::{Slot, SlotId};
use std::collections::HashMap;

/// Index pair locating the shared cell of two crossing slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap {
    /// Character index within the first slot's word
    pub first: usize,
    /// Character index within the second slot's word
    pub second: usize,
}

impl Overlap {
    /// Create an overlap from the two character indices
    pub const fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// The same shared cell seen from the other slot
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

/// Directed pair of crossing slots revised by arc consistency
pub type Arc = (SlotId, SlotId);

/// Overlap lookup plus neighbour lists for each slot
#[derive(Debug, Clone, Default)]
pub struct OverlapMap {
    overlaps: HashMap<Arc, Overlap>,
    neighbors: Vec<Vec<SlotId>>,
}

impl OverlapMap {
    /// Compute overlaps from the cells each slot covers
    pub fn from_slots(slots: &[Slot]) -> Self {
        let mut cell_owners: HashMap<(usize, usize), Vec<(SlotId, usize)>> = HashMap::new();
        for slot in slots {
            for (index, cell) in slot.cells().enumerate() {
                cell_owners.entry(cell).or_default().push((slot.id, index));
            }
        }

        let mut pairs = Vec::new();
        for owners in cell_owners.values() {
            for (position, &(a, index_a)) in owners.iter().enumerate() {
                for &(b, index_b) in owners.iter().skip(position + 1) {
                    pairs.push((a, b, Overlap::new(index_a, index_b)));
                }
            }
        }

        Self::from_pairs(slots.len(), pairs)
    }

    /// Build the map from explicit overlaps, one entry per unordered pair
    ///
    /// Each `(a, b, overlap)` also records `(b, a, overlap.swapped())`.
    /// Self-pairs and slots outside `0..slot_count` are ignored.
    pub fn from_pairs(
        slot_count: usize,
        pairs: impl IntoIterator<Item = (SlotId, SlotId, Overlap)>,
    ) -> Self {
        let mut overlaps = HashMap::new();
        let mut neighbors = vec![Vec::new(); slot_count];

        for (a, b, overlap) in pairs {
            if a == b || a >= slot_count || b >= slot_count {
                continue;
            }
            if overlaps.insert((a, b), overlap).is_none() {
                if let Some(list) = neighbors.get_mut(a) {
                    list.push(b);
                }
            }
            if overlaps.insert((b, a), overlap.swapped()).is_none() {
                if let Some(list) = neighbors.get_mut(b) {
                    list.push(a);
                }
            }
        }

        for list in &mut neighbors {
            list.sort_unstable();
        }

        Self {
            overlaps,
            neighbors,
        }
    }

    /// Shared-cell indices for `(a, b)`, or `None` if the slots do not cross
    pub fn get(&self, a: SlotId, b: SlotId) -> Option<Overlap> {
        self.overlaps.get(&(a, b)).copied()
    }

    /// Slots crossing `slot`, in identity order
    pub fn neighbors(&self, slot: SlotId) -> &[SlotId] {
        self.neighbors.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Number of slots crossing `slot`
    pub fn degree(&self, slot: SlotId) -> usize {
        self.neighbors(slot).len()
    }

    /// Every directed arc between crossing slots, ordered by source then target
    pub fn arcs(&self) -> Vec<Arc> {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(x, list)| list.iter().map(move |&y| (x, y)))
            .collect()
    }

    /// Number of slots the map was built for
    pub fn slot_count(&self) -> usize {
        self.neighbors.len()
    }
}
