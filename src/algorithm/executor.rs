use crate::{
    algorithm::assignment::Assignment,
    algorithm::cache::LetterIndexCache,
    algorithm::domain::DomainStore,
    algorithm::propagation::{Propagation, arc_consistency, revise},
    algorithm::selection::{
        FirstCandidate, TieBreaker, order_domain_values, select_unassigned_slot,
    },
    io::progress::SearchProgress,
    spatial::overlaps::Arc,
    spatial::{Puzzle, SlotId, WordId},
};
use log::{debug, info};

/// Which arcs are re-examined after each tentative binding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PropagationMode {
    /// Only arcs pointing at the newly bound slot, cascading from there
    #[default]
    Incremental,
    /// Every arc of the puzzle
    Full,
}

/// Solver parameters controlling propagation and search limits
#[derive(Clone, Copy, Debug, Default)]
pub struct SolverConfig {
    /// Propagation performed after each binding
    pub propagation: PropagationMode,
    /// Maximum number of tentative bindings before giving up
    pub max_steps: Option<usize>,
    /// Whether a word may fill at most one slot
    pub distinct_words: bool,
}

/// Counters describing the work done by a search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tentative bindings tried
    pub steps: usize,
    /// Bindings undone after their subtree failed
    pub backtracks: usize,
    /// Domain-changing arc revisions
    pub revisions: usize,
    /// Deepest number of simultaneously bound slots
    pub max_depth: usize,
}

/// Terminal result of a solving session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A complete, consistent assignment
    Solved(Assignment),
    /// No assignment satisfies every constraint
    Unsatisfiable,
    /// The step budget ran out before the search finished
    BudgetExhausted,
}

impl SearchOutcome {
    /// The solution, if one was found
    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            Self::Solved(assignment) => Some(assignment),
            Self::Unsatisfiable | Self::BudgetExhausted => None,
        }
    }
}

/// Internal result of exploring one subtree
enum Branch {
    Found,
    Failed,
    Halted,
}

/// Crossword constraint solver owning one session's domains
///
/// Runs node consistency, arc consistency and heuristic backtracking over a
/// shared, immutable [`Puzzle`].
pub struct Solver<'p> {
    puzzle: &'p Puzzle,
    domains: DomainStore,
    cache: LetterIndexCache,
    tie_breaker: Box<dyn TieBreaker>,
    config: SolverConfig,
    stats: SearchStats,
    progress: Option<SearchProgress>,
}

impl<'p> Solver<'p> {
    /// Create a deterministic solver with default settings
    pub fn new(puzzle: &'p Puzzle) -> Self {
        Self::with_tie_breaker(puzzle, Box::new(FirstCandidate))
    }

    /// Create a solver resolving ties with the given source
    pub fn with_tie_breaker(puzzle: &'p Puzzle, tie_breaker: Box<dyn TieBreaker>) -> Self {
        Self {
            puzzle,
            domains: DomainStore::new(puzzle),
            cache: LetterIndexCache::new(),
            tie_breaker,
            config: SolverConfig::default(),
            stats: SearchStats::default(),
            progress: None,
        }
    }

    /// Replace the solver parameters
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Report search progress to a spinner
    #[must_use]
    pub fn with_progress(mut self, progress: SearchProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Current domains
    pub const fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// Counters accumulated so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Puzzle being solved
    pub const fn puzzle(&self) -> &'p Puzzle {
        self.puzzle
    }

    /// Solve the puzzle, returning a complete consistent assignment if one exists
    pub fn solve(&mut self) -> Option<Assignment> {
        self.run().into_assignment()
    }

    /// Solve the puzzle, distinguishing exhaustion from an exhausted step budget
    pub fn run(&mut self) -> SearchOutcome {
        self.enforce_node_consistency();

        let outcome = if self.arc_consistency(None) {
            let mut assignment = Assignment::empty(self.puzzle.slot_count());
            match self.backtrack(&mut assignment) {
                Branch::Found => SearchOutcome::Solved(assignment),
                Branch::Failed => SearchOutcome::Unsatisfiable,
                Branch::Halted => SearchOutcome::BudgetExhausted,
            }
        } else {
            info!("initial arc consistency left a slot without candidates");
            SearchOutcome::Unsatisfiable
        };

        info!(
            "search finished after {} steps, {} backtracks, {} revisions",
            self.stats.steps, self.stats.backtracks, self.stats.revisions
        );
        if let Some(progress) = &self.progress {
            progress.finish(&outcome, &self.stats);
        }
        outcome
    }

    /// Remove length-incompatible words from every domain
    pub fn enforce_node_consistency(&mut self) {
        self.domains.enforce_node_consistency(self.puzzle);
    }

    /// Make `x` arc consistent with `y`, returning whether `x`'s domain changed
    pub fn revise(&mut self, x: SlotId, y: SlotId) -> bool {
        revise(self.puzzle, &mut self.domains, &mut self.cache, x, y)
    }

    /// Enforce arc consistency starting from `arcs`, or from every arc when `None`
    ///
    /// Returns `false` when some domain ends up empty.
    pub fn arc_consistency(&mut self, arcs: Option<Vec<Arc>>) -> bool {
        self.propagate(arcs).is_consistent()
    }

    /// Whether every slot is bound
    pub fn is_complete(&self, assignment: &Assignment) -> bool {
        (0..self.puzzle.slot_count()).all(|slot| assignment.is_assigned(slot))
    }

    /// Whether bound words fit their slots and agree on every shared cell
    ///
    /// With distinct words enabled, a word bound to two slots is also inconsistent.
    pub fn is_consistent(&self, assignment: &Assignment) -> bool {
        let vocabulary = self.puzzle.vocabulary();
        let overlaps = self.puzzle.overlaps();

        assignment.iter().all(|(slot, word)| {
            let fits = self
                .puzzle
                .slot(slot)
                .is_some_and(|s| vocabulary.word_len(word) == Some(s.length));

            let agrees = overlaps.neighbors(slot).iter().all(|&neighbor| {
                let (Some(other), Some(overlap)) =
                    (assignment.get(neighbor), overlaps.get(slot, neighbor))
                else {
                    return true;
                };
                let letter = vocabulary.letter(word, overlap.first);
                letter.is_some() && letter == vocabulary.letter(other, overlap.second)
            });

            let unique =
                !self.config.distinct_words || !assignment.uses_word_elsewhere(slot, word);

            fits && agrees && unique
        })
    }

    /// Next slot to bind by minimum remaining values, then degree
    pub fn select_unassigned_slot(&mut self, assignment: &Assignment) -> Option<SlotId> {
        select_unassigned_slot(
            self.puzzle,
            &self.domains,
            assignment,
            self.tie_breaker.as_mut(),
        )
    }

    /// Candidates of `slot` ordered by least-constraining value
    pub fn order_domain_values(&mut self, slot: SlotId, assignment: &Assignment) -> Vec<WordId> {
        order_domain_values(
            self.puzzle,
            &self.domains,
            slot,
            assignment,
            self.tie_breaker.as_mut(),
        )
    }

    fn propagate(&mut self, arcs: Option<Vec<Arc>>) -> Propagation {
        let result = arc_consistency(self.puzzle, &mut self.domains, &mut self.cache, arcs);
        self.stats.revisions += result.revisions();
        result
    }

    /// Arcs to re-examine after binding `slot`
    fn arcs_after_binding(&self, slot: SlotId) -> Option<Vec<Arc>> {
        match self.config.propagation {
            PropagationMode::Incremental => Some(
                self.puzzle
                    .overlaps()
                    .neighbors(slot)
                    .iter()
                    .map(|&neighbor| (neighbor, slot))
                    .collect(),
            ),
            PropagationMode::Full => None,
        }
    }

    fn budget_spent(&self) -> bool {
        self.config
            .max_steps
            .is_some_and(|max_steps| self.stats.steps >= max_steps)
    }

    fn backtrack(&mut self, assignment: &mut Assignment) -> Branch {
        if self.is_complete(assignment) {
            // Propagation should make this hold; it is still checked before returning
            return if self.is_consistent(assignment) {
                Branch::Found
            } else {
                Branch::Failed
            };
        }

        let Some(slot) = self.select_unassigned_slot(assignment) else {
            return Branch::Failed;
        };

        for word in self.order_domain_values(slot, assignment) {
            if self.config.distinct_words && assignment.uses_word_elsewhere(slot, word) {
                continue;
            }
            if self.budget_spent() {
                debug!("step budget of {} exhausted", self.stats.steps);
                return Branch::Halted;
            }
            self.stats.steps += 1;

            let snapshot = self.domains.snapshot();
            assignment.bind(slot, word);
            self.domains.restrict_to(slot, word);
            self.stats.max_depth = self.stats.max_depth.max(assignment.len());
            if let Some(progress) = &self.progress {
                progress.record(&self.stats, assignment.len());
            }

            let arcs = self.arcs_after_binding(slot);
            if self.propagate(arcs).is_consistent() {
                match self.backtrack(assignment) {
                    Branch::Found => return Branch::Found,
                    Branch::Halted => return Branch::Halted,
                    Branch::Failed => {}
                }
            }

            self.domains.restore(snapshot);
            assignment.unbind(slot);
            self.stats.backtracks += 1;
            debug!("backtracking out of slot {slot}");
        }

        Branch::Failed
    }
}
