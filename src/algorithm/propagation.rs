use crate::{
    algorithm::bitset::WordBitset,
    algorithm::cache::{LetterIndexCache, LetterKey},
    algorithm::domain::DomainStore,
    spatial::overlaps::Arc,
    spatial::{Puzzle, SlotId},
};
use log::debug;
use std::collections::{BTreeSet, HashSet, VecDeque};

/// FIFO queue of directed arcs awaiting revision
///
/// An arc already waiting is not enqueued a second time, so the queue never
/// holds more than one copy of each arc.
#[derive(Debug, Default)]
pub struct ArcQueue {
    order: VecDeque<Arc>,
    pending: HashSet<Arc>,
}

impl ArcQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue holding the given arcs in order
    pub fn from_arcs(arcs: impl IntoIterator<Item = Arc>) -> Self {
        let mut queue = Self::new();
        for arc in arcs {
            queue.push(arc);
        }
        queue
    }

    /// Enqueue an arc unless it is already waiting
    pub fn push(&mut self, arc: Arc) {
        if self.pending.insert(arc) {
            self.order.push_back(arc);
        }
    }

    /// Take the oldest waiting arc
    pub fn pop(&mut self) -> Option<Arc> {
        let arc = self.order.pop_front()?;
        self.pending.remove(&arc);
        Some(arc)
    }

    /// Number of waiting arcs
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no arcs are waiting
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Result of running arc consistency to a fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Every domain is non-empty and arc consistent
    Consistent {
        /// Number of revisions that removed at least one word
        revisions: usize,
    },
    /// A domain ran out of candidates; the current state has no solution
    Wipeout {
        /// Slot whose domain became empty
        slot: SlotId,
        /// Number of revisions that removed at least one word
        revisions: usize,
    },
}

impl Propagation {
    /// Whether propagation finished with all domains non-empty
    pub const fn is_consistent(self) -> bool {
        matches!(self, Self::Consistent { .. })
    }

    /// Number of domain-changing revisions performed
    pub const fn revisions(self) -> usize {
        match self {
            Self::Consistent { revisions } | Self::Wipeout { revisions, .. } => revisions,
        }
    }
}

/// Make `x` arc consistent with `y`
///
/// Removes from `x`'s domain every word whose letter at the shared cell is not
/// matched by any word remaining in `y`'s domain. Returns whether `x`'s domain
/// changed. Slots that do not cross are left untouched.
pub fn revise(
    puzzle: &Puzzle,
    domains: &mut DomainStore,
    cache: &mut LetterIndexCache,
    x: SlotId,
    y: SlotId,
) -> bool {
    let Some(overlap) = puzzle.overlaps().get(x, y) else {
        return false;
    };
    let vocabulary = puzzle.vocabulary();

    // Letters y can still place on the shared cell
    let letters: BTreeSet<char> = match domains.domain(y) {
        Some(domain) => domain
            .iter()
            .filter_map(|word| vocabulary.letter(word, overlap.second))
            .collect(),
        None => return false,
    };

    let mut supported = WordBitset::new(vocabulary.len());
    for letter in letters {
        supported.union_with(
            cache.words_with_letter(vocabulary, LetterKey::new(overlap.first, letter)),
        );
    }

    let Some(domain) = domains.domain_mut(x) else {
        return false;
    };
    let before = domain.count();
    domain.intersect_with(&supported);
    domain.count() != before
}

/// Run AC-3 until no arc can prune further or a domain empties
///
/// With `arcs == None` the queue is seeded with every directed arc between
/// crossing slots. Whenever revising `(x, y)` shrinks `x`, each arc `(z, x)` for
/// the other neighbours `z` of `x` is re-examined.
pub fn arc_consistency(
    puzzle: &Puzzle,
    domains: &mut DomainStore,
    cache: &mut LetterIndexCache,
    arcs: Option<Vec<Arc>>,
) -> Propagation {
    let mut queue = ArcQueue::from_arcs(arcs.unwrap_or_else(|| puzzle.overlaps().arcs()));
    let mut revisions = 0;

    while let Some((x, y)) = queue.pop() {
        if !revise(puzzle, domains, cache, x, y) {
            continue;
        }
        revisions += 1;

        if domains.is_empty(x) {
            debug!("arc ({x}, {y}) emptied the domain of slot {x}");
            return Propagation::Wipeout { slot: x, revisions };
        }

        for &z in puzzle.overlaps().neighbors(x) {
            if z != y {
                queue.push((z, x));
            }
        }
    }

    // Slots without neighbours can still be empty after node consistency
    match (0..domains.slot_count()).find(|&slot| domains.is_empty(slot)) {
        Some(slot) => Propagation::Wipeout { slot, revisions },
        None => Propagation::Consistent { revisions },
    }
}
