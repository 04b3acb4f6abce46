//! Tests for puzzle assembly and letter grid projection

#[cfg(test)]
mod tests {
    use crossfill::Puzzle;
    use crossfill::spatial::Orientation;

    // Tests parsing derives slots, overlaps and vocabulary together
    // Verified by building the overlap map from an empty slot list
    #[test]
    fn test_parse_builds_geometry() {
        let puzzle = Puzzle::parse("___\n#_#\n#_#", "cat\nace").expect("valid puzzle");

        assert_eq!(puzzle.slot_count(), 2);
        assert_eq!(
            puzzle.slot(0).map(|slot| slot.orientation),
            Some(Orientation::Across)
        );
        assert_eq!(
            puzzle.slot(1).map(|slot| slot.orientation),
            Some(Orientation::Down)
        );
        assert_eq!(puzzle.overlaps().get(0, 1).map(|o| (o.first, o.second)), Some((1, 0)));
        assert_eq!(puzzle.vocabulary().len(), 2);
        assert!(puzzle.slot(2).is_none());
    }

    // Tests placements are written along each slot and unknown entries skipped
    // Verified by writing every word across regardless of orientation
    #[test]
    fn test_letter_grid_projection() {
        let puzzle = Puzzle::parse("___\n#_#\n#_#", "HAT\nACE").expect("valid puzzle");
        let hat = puzzle.vocabulary().id_of("HAT").expect("word present");
        let ace = puzzle.vocabulary().id_of("ACE").expect("word present");

        let grid = puzzle.letter_grid([(0, hat), (1, ace), (9, hat)]);

        assert_eq!(grid.letter(0, 0), Some('H'));
        assert_eq!(grid.letter(0, 1), Some('A'));
        assert_eq!(grid.letter(0, 2), Some('T'));
        assert_eq!(grid.letter(1, 1), Some('C'));
        assert_eq!(grid.letter(2, 1), Some('E'));
        assert_eq!(grid.letter(1, 0), None);
    }

    // Tests a bad structure surfaces as an error
    // Verified by defaulting to an empty structure on parse failure
    #[test]
    fn test_parse_propagates_structure_errors() {
        assert!(Puzzle::parse("", "WORD").is_err());
    }
}
