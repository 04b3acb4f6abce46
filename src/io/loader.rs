//! Reading structure and word list files into a puzzle

use crate::io::error::{Result, WithPath};
use crate::spatial::grid::Structure;
use crate::spatial::{Puzzle, Vocabulary};
use log::info;
use std::path::Path;

/// Load a structure file and a word list file
///
/// # Errors
///
/// Returns an error if either file cannot be read or the structure is invalid
pub fn load_puzzle(structure_path: &Path, words_path: &Path) -> Result<Puzzle> {
    let structure = load_structure(structure_path)?;
    let vocabulary = load_vocabulary(words_path)?;
    let puzzle = Puzzle::new(structure, vocabulary);

    info!(
        "loaded {}x{} grid with {} slots and {} words",
        puzzle.structure().height(),
        puzzle.structure().width(),
        puzzle.slot_count(),
        puzzle.vocabulary().len()
    );
    Ok(puzzle)
}

/// Load a structure file
///
/// # Errors
///
/// Returns an error if the file cannot be read or describes no open cells
pub fn load_structure(path: &Path) -> Result<Structure> {
    let contents = std::fs::read_to_string(path).with_path(path, "read structure")?;
    Structure::parse(&contents)
}

/// Load a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let contents = std::fs::read_to_string(path).with_path(path, "read word list")?;
    Ok(Vocabulary::parse(&contents))
}
