//! Puzzle geometry and vocabulary
//!
//! This module contains the immutable problem description:
//! - Grid structure and letter grids
//! - Slot extraction and the overlap relation
//! - The candidate word table

/// Open/blocked grid layout and placed letters
pub mod grid;
/// Symmetric overlap relation between crossing slots
pub mod overlaps;
/// Geometry and vocabulary bundled for the solver
pub mod puzzle;
/// Slot definitions and extraction
pub mod slots;
/// Candidate word table
pub mod vocabulary;

pub use puzzle::Puzzle;
pub use slots::{Orientation, Slot, SlotId};
pub use vocabulary::{Vocabulary, WordId};
