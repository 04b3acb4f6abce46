//! Slot definitions and extraction of slots from a grid structure

use crate::spatial::grid::Structure;
use std::fmt;

/// Dense slot identity, equal to the slot's position in the puzzle's slot list
pub type SlotId = usize;

/// Direction a word runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Left to right
    Across,
    /// Top to bottom
    Down,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A maximal run of open cells that holds one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Identity within the puzzle
    pub id: SlotId,
    /// Row of the first cell
    pub row: usize,
    /// Column of the first cell
    pub col: usize,
    /// Direction of the run
    pub orientation: Orientation,
    /// Number of cells
    pub length: usize,
}

impl Slot {
    /// Grid position of the `index`-th cell of this slot
    pub const fn cell(&self, index: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Across => (self.row, self.col + index),
            Orientation::Down => (self.row + index, self.col),
        }
    }

    /// All cells covered by this slot, in word order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(|index| self.cell(index))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.col, self.orientation, self.length
        )
    }
}

/// Find every across and down slot of length two or more
///
/// Cells are scanned row-major; for a cell that starts both an across and a
/// down run, the across slot receives the lower identity.
pub fn extract_slots(structure: &Structure) -> Vec<Slot> {
    let mut slots = Vec::new();

    for row in 0..structure.height() {
        for col in 0..structure.width() {
            if !structure.is_open(row, col) {
                continue;
            }

            let starts_across = col == 0 || !structure.is_open(row, col - 1);
            if starts_across {
                let length = run_length(structure, row, col, Orientation::Across);
                push_slot(&mut slots, row, col, Orientation::Across, length);
            }

            let starts_down = row == 0 || !structure.is_open(row - 1, col);
            if starts_down {
                let length = run_length(structure, row, col, Orientation::Down);
                push_slot(&mut slots, row, col, Orientation::Down, length);
            }
        }
    }

    slots
}

fn run_length(structure: &Structure, row: usize, col: usize, orientation: Orientation) -> usize {
    let probe = Slot {
        id: 0,
        row,
        col,
        orientation,
        length: 0,
    };
    (0..)
        .map(|index| probe.cell(index))
        .take_while(|&(r, c)| structure.is_open(r, c))
        .count()
}

fn push_slot(
    slots: &mut Vec<Slot>,
    row: usize,
    col: usize,
    orientation: Orientation,
    length: usize,
) {
    // Single cells are covered by the crossing word
    if length > 1 {
        slots.push(Slot {
            id: slots.len(),
            row,
            col,
            orientation,
            length,
        });
    }
}
