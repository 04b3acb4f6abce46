//! Cell-level grid structures: the open/blocked layout and the letters placed on it
//!
//! Both grids are dense `ndarray` matrices indexed by `[row, col]`. Cells outside
//! the matrix are treated as blocked so that slot scanning never needs bounds checks.

use crate::io::configuration::OPEN_CELL;
use crate::io::error::{Result, invalid_structure};
use ndarray::Array2;

/// Open/blocked layout of a crossword grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    open: Array2<bool>,
}

impl Structure {
    /// Parse a structure description
    ///
    /// One row per line. [`OPEN_CELL`] marks a fillable cell, any other character
    /// blocks it. Short lines are padded with blocked cells up to the longest line.
    ///
    /// # Errors
    ///
    /// Returns an error if the description has no rows or no open cells
    pub fn parse(contents: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = contents
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(invalid_structure(&"structure description is empty"));
        }

        let open = Array2::from_shape_fn((height, width), |(row, col)| {
            rows.get(row).and_then(|line| line.get(col)) == Some(&OPEN_CELL)
        });

        let structure = Self { open };
        if structure.open_cell_count() == 0 {
            return Err(invalid_structure(&"structure has no open cells"));
        }
        Ok(structure)
    }

    /// Build a structure from an explicit open-cell matrix
    pub const fn from_array(open: Array2<bool>) -> Self {
        Self { open }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.open.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.open.ncols()
    }

    /// Whether the cell can hold a letter; out-of-range cells are blocked
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open.get([row, col]).copied().unwrap_or(false)
    }

    /// Count of fillable cells
    pub fn open_cell_count(&self) -> usize {
        self.open.iter().filter(|&&open| open).count()
    }
}

/// Letters placed on the grid by an assignment
///
/// `None` marks a cell no assigned word covers (blocked cells are always `None`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    letters: Array2<Option<char>>,
}

impl LetterGrid {
    /// Create an empty letter grid with the given dimensions
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            letters: Array2::from_elem((height, width), None),
        }
    }

    /// Write a letter, ignoring positions outside the grid
    pub fn place(&mut self, row: usize, col: usize, letter: char) {
        if let Some(cell) = self.letters.get_mut([row, col]) {
            *cell = Some(letter);
        }
    }

    /// Letter at a position, if one has been placed
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.letters.get([row, col]).copied().flatten()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.letters.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.letters.ncols()
    }
}
