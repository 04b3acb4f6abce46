use crate::{
    algorithm::assignment::Assignment,
    algorithm::domain::DomainStore,
    spatial::{Puzzle, SlotId, WordId},
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::HashMap;

/// Source of decisions between equally ranked candidates
///
/// Which solution is found may depend on the tie-breaker; whether one is found
/// never does.
pub trait TieBreaker {
    /// Pick one of `count` tied candidates, returning an index below `count`
    fn choose(&mut self, count: usize) -> usize;

    /// Reorder a run of equally ranked words in place
    fn shuffle(&mut self, run: &mut [WordId]);
}

/// Deterministic tie-breaker: always the first candidate, order untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCandidate;

impl TieBreaker for FirstCandidate {
    fn choose(&mut self, _count: usize) -> usize {
        0
    }

    fn shuffle(&mut self, _run: &mut [WordId]) {}
}

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl TieBreaker for RandomSelector {
    fn choose(&mut self, count: usize) -> usize {
        if count <= 1 {
            return 0;
        }
        self.rng.random_range(0..count)
    }

    fn shuffle(&mut self, run: &mut [WordId]) {
        run.shuffle(&mut self.rng);
    }
}

/// Choose the next slot to assign
///
/// Minimum remaining values first; among those, the slot crossing the most
/// other slots. Remaining ties go to the tie-breaker, offered in slot order.
/// Returns `None` once every slot is assigned.
pub fn select_unassigned_slot(
    puzzle: &Puzzle,
    domains: &DomainStore,
    assignment: &Assignment,
    tie_breaker: &mut dyn TieBreaker,
) -> Option<SlotId> {
    let overlaps = puzzle.overlaps();
    let rank = |slot: SlotId| (domains.size(slot), std::cmp::Reverse(overlaps.degree(slot)));

    let best = (0..puzzle.slot_count())
        .filter(|&slot| !assignment.is_assigned(slot))
        .map(rank)
        .min()?;

    let tied: Vec<SlotId> = (0..puzzle.slot_count())
        .filter(|&slot| !assignment.is_assigned(slot) && rank(slot) == best)
        .collect();

    let index = tie_breaker.choose(tied.len());
    tied.get(index).or_else(|| tied.first()).copied()
}

/// Number of words each candidate of `slot` would rule out for unassigned neighbours
///
/// Returned in ascending word order, paired with the candidate.
pub fn count_eliminations(
    puzzle: &Puzzle,
    domains: &DomainStore,
    slot: SlotId,
    assignment: &Assignment,
) -> Vec<(WordId, usize)> {
    let vocabulary = puzzle.vocabulary();
    let Some(domain) = domains.domain(slot) else {
        return Vec::new();
    };
    let mut eliminated: Vec<(WordId, usize)> = domain.iter().map(|word| (word, 0)).collect();

    for &neighbor in puzzle.overlaps().neighbors(slot) {
        if assignment.is_assigned(neighbor) {
            continue;
        }
        let (Some(overlap), Some(neighbor_domain)) =
            (puzzle.overlaps().get(slot, neighbor), domains.domain(neighbor))
        else {
            continue;
        };

        // How many neighbour candidates place each letter on the shared cell
        let mut letter_counts: HashMap<char, usize> = HashMap::new();
        for word in neighbor_domain.iter() {
            if let Some(letter) = vocabulary.letter(word, overlap.second) {
                *letter_counts.entry(letter).or_default() += 1;
            }
        }
        let total = neighbor_domain.count();

        for (word, count) in &mut eliminated {
            let compatible = vocabulary
                .letter(*word, overlap.first)
                .and_then(|letter| letter_counts.get(&letter))
                .copied()
                .unwrap_or(0);
            *count += total - compatible;
        }
    }

    eliminated
}

/// Order the candidates of `slot` by least-constraining value
///
/// Candidates ruling out the fewest neighbour words come first. Candidates with
/// equal counts stay in word order unless the tie-breaker reorders them.
pub fn order_domain_values(
    puzzle: &Puzzle,
    domains: &DomainStore,
    slot: SlotId,
    assignment: &Assignment,
    tie_breaker: &mut dyn TieBreaker,
) -> Vec<WordId> {
    let mut ranked = count_eliminations(puzzle, domains, slot, assignment);
    ranked.sort_by_key(|&(_, count)| count);

    let mut ordered: Vec<WordId> = ranked.iter().map(|&(word, _)| word).collect();

    let mut start = 0;
    while start < ranked.len() {
        let count = ranked.get(start).map_or(0, |&(_, count)| count);
        let end = ranked
            .iter()
            .skip(start)
            .position(|&(_, other)| other != count)
            .map_or(ranked.len(), |offset| start + offset);
        if let Some(run) = ordered.get_mut(start..end) {
            tie_breaker.shuffle(run);
        }
        start = end;
    }

    ordered
}
