//! PNG export of a filled grid with letters drawn from the built-in font

use crate::algorithm::assignment::Assignment;
use crate::io::configuration::{CELL_BORDER, GLYPH_HEIGHT_PERCENT, INK_COLOR, PAPER_COLOR};
use crate::io::error::{PuzzleError, Result, WithPath, invalid_parameter};
use crate::io::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph, is_set};
use crate::spatial::Puzzle;
use image::{Rgba, RgbaImage};
use log::warn;
use std::path::Path;

/// Font pixel size that fits a letter into a cell of `cell_size` pixels
///
/// # Errors
///
/// Returns an error if the cell is too small to hold a glyph
pub fn glyph_scale(cell_size: u32) -> Result<u32> {
    let interior = cell_size.saturating_sub(2 * CELL_BORDER);
    let scale = interior * GLYPH_HEIGHT_PERCENT / 100 / GLYPH_HEIGHT;
    if scale == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!(
                "cells must be at least {} pixels to fit a letter",
                2 * CELL_BORDER + GLYPH_HEIGHT * 100 / GLYPH_HEIGHT_PERCENT + 1
            ),
        ));
    }
    Ok(scale)
}

/// Draw the grid: black background, white open cells, black letters
///
/// # Errors
///
/// Returns an error if the cell size cannot fit a glyph or the image
/// dimensions overflow
pub fn render_solution_image(
    puzzle: &Puzzle,
    assignment: &Assignment,
    cell_size: u32,
) -> Result<RgbaImage> {
    let scale = glyph_scale(cell_size)?;
    let structure = puzzle.structure();

    let width = dimension(structure.width(), cell_size)?;
    let height = dimension(structure.height(), cell_size)?;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(INK_COLOR));

    let letters = puzzle.letter_grid(assignment.iter());
    let interior = cell_size - 2 * CELL_BORDER;

    for row in 0..structure.height() {
        for col in 0..structure.width() {
            if !structure.is_open(row, col) {
                continue;
            }
            let left = col as u32 * cell_size + CELL_BORDER;
            let top = row as u32 * cell_size + CELL_BORDER;

            for y in top..top + interior {
                for x in left..left + interior {
                    img.put_pixel(x, y, Rgba(PAPER_COLOR));
                }
            }

            let Some(letter) = letters.letter(row, col) else {
                continue;
            };
            let Some(rows) = glyph(letter) else {
                warn!("no glyph for '{letter}' at ({row}, {col}); cell left blank");
                continue;
            };
            let glyph_left = left + (interior - GLYPH_WIDTH * scale) / 2;
            let glyph_top = top + (interior - GLYPH_HEIGHT * scale) / 2;
            for y in 0..GLYPH_HEIGHT * scale {
                for x in 0..GLYPH_WIDTH * scale {
                    if is_set(rows, x / scale, y / scale) {
                        img.put_pixel(glyph_left + x, glyph_top + y, Rgba(INK_COLOR));
                    }
                }
            }
        }
    }

    Ok(img)
}

/// Export a filled grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The cell size cannot fit a glyph
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_as_png(
    puzzle: &Puzzle,
    assignment: &Assignment,
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_solution_image(puzzle, assignment, cell_size)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
    }

    img.save(output_path)
        .map_err(|source| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

fn dimension(cells: usize, cell_size: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(cell_size))
        .ok_or_else(|| invalid_parameter("cell_size", &cell_size, &"image dimensions overflow"))
}
