//! Plain-text rendering of a filled grid

use crate::algorithm::assignment::Assignment;
use crate::io::configuration::{BLOCK_GLYPH, EMPTY_GLYPH};
use crate::spatial::Puzzle;

/// Render the grid one line per row
///
/// Open cells show their letter (or a space when no bound word covers them);
/// blocked cells show a solid block.
pub fn render_text(puzzle: &Puzzle, assignment: &Assignment) -> String {
    let structure = puzzle.structure();
    let letters = puzzle.letter_grid(assignment.iter());

    let mut output = String::with_capacity(structure.height() * (structure.width() + 1) * 3);
    for row in 0..structure.height() {
        for col in 0..structure.width() {
            let glyph = if structure.is_open(row, col) {
                letters.letter(row, col).unwrap_or(EMPTY_GLYPH)
            } else {
                BLOCK_GLYPH
            };
            output.push(glyph);
        }
        output.push('\n');
    }
    output
}
