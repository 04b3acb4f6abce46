//! Tests for PNG rendering of filled grids

#[cfg(test)]
mod tests {
    use crossfill::io::configuration::{CELL_BORDER, INK_COLOR, PAPER_COLOR};
    use crossfill::io::image::{export_solution_as_png, glyph_scale, render_solution_image};
    use crossfill::spatial::Vocabulary;
    use crossfill::spatial::grid::Structure;
    use crossfill::{Assignment, Puzzle, PuzzleError};
    use ::image::Rgba;
    use tempfile::TempDir;

    fn solved_crossing() -> (Puzzle, Assignment) {
        let puzzle = Puzzle::parse("___\n#_#\n#_#", "hat\nace").expect("valid puzzle");
        let mut assignment = Assignment::empty(puzzle.slot_count());
        assignment.bind(0, 1);
        assignment.bind(1, 0);
        (puzzle, assignment)
    }

    // Tests the letter scale grows with the cell and rejects tiny cells
    // Verified by rounding the scale up instead of down
    #[test]
    fn test_glyph_scale() {
        assert_eq!(glyph_scale(100).expect("fits"), 8);
        assert_eq!(glyph_scale(16).expect("fits"), 1);
        assert!(matches!(
            glyph_scale(15),
            Err(PuzzleError::InvalidParameter {
                parameter: "cell_size",
                ..
            })
        ));
        assert!(glyph_scale(0).is_err());
    }

    // Tests borders, open cells, blocked cells and letter ink
    // Verified by painting blocked cells white
    #[test]
    fn test_render_solution_image() {
        let (puzzle, assignment) = solved_crossing();
        let img = render_solution_image(&puzzle, &assignment, 40).expect("renders");

        assert_eq!(img.dimensions(), (120, 120));
        assert_eq!(*img.get_pixel(0, 0), Rgba(INK_COLOR));
        assert_eq!(*img.get_pixel(CELL_BORDER, CELL_BORDER), Rgba(PAPER_COLOR));
        // Blocked cell at row 1, col 0
        assert_eq!(*img.get_pixel(20, 60), Rgba(INK_COLOR));

        // The letter in the top-left cell puts ink inside the interior
        let inked = (CELL_BORDER..40 - CELL_BORDER)
            .flat_map(|y| (CELL_BORDER..40 - CELL_BORDER).map(move |x| (x, y)))
            .any(|(x, y)| *img.get_pixel(x, y) == Rgba(INK_COLOR));
        assert!(inked);
    }

    // Tests open cells with no word stay blank
    // Verified by drawing a glyph for every open cell
    #[test]
    fn test_render_empty_assignment() {
        let (puzzle, _) = solved_crossing();
        let img = render_solution_image(&puzzle, &Assignment::empty(2), 40).expect("renders");

        let blank = (CELL_BORDER..40 - CELL_BORDER)
            .flat_map(|y| (CELL_BORDER..40 - CELL_BORDER).map(move |x| (x, y)))
            .all(|(x, y)| *img.get_pixel(x, y) == Rgba(PAPER_COLOR));
        assert!(blank);
    }

    // Tests export creates missing directories and writes a readable PNG
    // Verified by skipping directory creation
    #[test]
    fn test_export_solution_as_png() {
        let (puzzle, assignment) = solved_crossing();
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("crossing.png");

        export_solution_as_png(&puzzle, &assignment, 30, &path).expect("export succeeds");

        let img = ::image::open(&path).expect("readable png");
        assert_eq!((img.width(), img.height()), (90, 90));
    }

    // Tests a letter outside the built-in font leaves its cell blank
    // Verified by failing the render when a glyph is missing
    #[test]
    fn test_letter_without_glyph_is_blank() {
        let structure = Structure::parse("___").expect("valid structure");
        let puzzle = Puzzle::new(structure, Vocabulary::new(["ÄBC"]));
        let mut assignment = Assignment::empty(puzzle.slot_count());
        assignment.bind(0, 0);

        let img = render_solution_image(&puzzle, &assignment, 40).expect("renders");

        let inked_in = |col: u32| {
            (CELL_BORDER..40 - CELL_BORDER)
                .flat_map(|y| (CELL_BORDER..40 - CELL_BORDER).map(move |x| (x, y)))
                .any(|(x, y)| *img.get_pixel(col * 40 + x, y) == Rgba(INK_COLOR))
        };
        assert!(!inked_in(0));
        assert!(inked_in(1));
        assert!(inked_in(2));
    }
}
