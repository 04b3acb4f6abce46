//! Tests for the symmetric overlap relation between slots

#[cfg(test)]
mod tests {
    use crossfill::spatial::grid::Structure;
    use crossfill::spatial::overlaps::{Overlap, OverlapMap};
    use crossfill::spatial::slots::extract_slots;

    fn sample_map() -> OverlapMap {
        let structure = Structure::parse("____#\n_##_#\n_____\n###_#").expect("valid structure");
        OverlapMap::from_slots(&extract_slots(&structure))
    }

    // Tests shared cells produce the character index within each slot
    // Verified by storing the grid coordinates instead of word indices
    #[test]
    fn test_from_slots_indices() {
        let map = sample_map();

        assert_eq!(map.get(0, 1), Some(Overlap::new(0, 0)));
        assert_eq!(map.get(0, 2), Some(Overlap::new(3, 0)));
        assert_eq!(map.get(1, 3), Some(Overlap::new(2, 0)));
        assert_eq!(map.get(2, 3), Some(Overlap::new(2, 3)));
        assert_eq!(map.get(0, 3), None);
        assert_eq!(map.get(1, 2), None);
    }

    // Tests every overlap is mirrored with swapped indices
    // Verified by recording only one direction per pair
    #[test]
    fn test_overlaps_are_symmetric() {
        let map = sample_map();

        for (a, b) in map.arcs() {
            let forward = map.get(a, b).expect("arc has overlap");
            let backward = map.get(b, a).expect("reverse arc has overlap");
            assert_eq!(forward.swapped(), backward);
        }
    }

    // Tests neighbour lists, degrees and arcs
    // Verified by leaving neighbour lists unsorted
    #[test]
    fn test_neighbors_and_arcs() {
        let map = sample_map();

        assert_eq!(map.neighbors(0), &[1, 2]);
        assert_eq!(map.neighbors(3), &[1, 2]);
        assert_eq!(map.degree(2), 2);
        assert_eq!(map.slot_count(), 4);
        assert_eq!(map.arcs().len(), 8);
        assert!(map.neighbors(42).is_empty());
    }

    // Tests explicit pairs skip self-overlaps and unknown slots
    // Verified by removing the range check in from_pairs
    #[test]
    fn test_from_pairs_filters_invalid_entries() {
        let map = OverlapMap::from_pairs(
            2,
            [
                (0, 1, Overlap::new(1, 0)),
                (1, 1, Overlap::new(0, 0)),
                (0, 5, Overlap::new(0, 0)),
            ],
        );

        assert_eq!(map.get(0, 1), Some(Overlap::new(1, 0)));
        assert_eq!(map.get(1, 0), Some(Overlap::new(0, 1)));
        assert_eq!(map.get(1, 1), None);
        assert_eq!(map.arcs(), vec![(0, 1), (1, 0)]);
    }
}
