/// Slot to word mapping built during search
pub mod assignment;
/// Bitset over vocabulary words used for domains
pub mod bitset;
/// Memoized letter-position lookups for arc revision
pub mod cache;
/// Per-slot domains and node consistency
pub mod domain;
/// Backtracking search controller
pub mod executor;
/// AC-3 arc consistency
pub mod propagation;
/// Variable and value ordering heuristics with pluggable tie-breaking
pub mod selection;
