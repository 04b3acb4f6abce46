//! Crossword filling as a constraint satisfaction problem
//!
//! Every slot of a grid is a variable whose domain is the word list. Domains are
//! pruned by slot length (node consistency) and by letter agreement between
//! crossing slots (AC-3), then a backtracking search with minimum-remaining-values
//! slot ordering and least-constraining-value word ordering completes the fill.

#![forbid(unsafe_code)]

/// Domains, propagation and backtracking search
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid geometry, slots, overlaps and vocabulary
pub mod spatial;

pub use algorithm::assignment::Assignment;
pub use algorithm::executor::{SearchOutcome, Solver, SolverConfig};
pub use io::error::{PuzzleError, Result};
pub use spatial::Puzzle;
