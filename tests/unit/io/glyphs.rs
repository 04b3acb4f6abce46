//! Tests for the built-in bitmap font

#[cfg(test)]
mod tests {
    use crossfill::io::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph, is_set};

    // Tests letters resolve regardless of case and other characters do not
    // Verified by indexing the table with the raw character code
    #[test]
    fn test_glyph_lookup() {
        assert_eq!(glyph('a'), glyph('A'));
        assert!(glyph('Z').is_some());
        assert!(glyph('1').is_none());
        assert!(glyph('é').is_none());
        assert_ne!(glyph('O'), glyph('Q'));
    }

    // Tests pixel lookup reads columns left to right and stays in bounds
    // Verified by reading bit 0 as the leftmost column
    #[test]
    fn test_is_set() {
        let t = glyph('T').expect("T has a glyph");

        // Top bar spans the full width, the stem is the middle column
        assert!((0..GLYPH_WIDTH).all(|x| is_set(t, x, 0)));
        assert!(is_set(t, 2, GLYPH_HEIGHT - 1));
        assert!(!is_set(t, 0, GLYPH_HEIGHT - 1));
        assert!(!is_set(t, GLYPH_WIDTH, 0));
        assert!(!is_set(t, 0, GLYPH_HEIGHT));
    }
}
