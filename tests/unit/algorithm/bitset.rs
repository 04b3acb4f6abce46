//! Tests for `WordBitset` membership and set operations

#[cfg(test)]
mod tests {
    use crossfill::algorithm::bitset::WordBitset;

    // Verifies a new WordBitset is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_bitset() {
        let bitset = WordBitset::new(10);
        assert_eq!(bitset.count(), 0);
        assert!(bitset.is_empty());
        assert_eq!(bitset.capacity(), 10);
    }

    // Tests insertion, removal and out-of-range identities
    // Verified by removing the capacity check in insert
    #[test]
    fn test_insert_remove_contains() {
        let mut bitset = WordBitset::new(10);
        bitset.insert(0);
        bitset.insert(5);
        bitset.insert(99);
        assert!(bitset.contains(0));
        assert!(bitset.contains(5));
        assert!(!bitset.contains(99));
        assert_eq!(bitset.count(), 2);

        bitset.remove(5);
        assert!(!bitset.contains(5));
        assert_eq!(bitset.to_vec(), vec![0]);
    }

    // Tests intersection and union keep the right members
    // Verified by swapping the intersection and union operators
    #[test]
    fn test_intersection_and_union() {
        let mut set1 = WordBitset::new(10);
        set1.insert(1);
        set1.insert(3);
        set1.insert(5);

        let mut set2 = WordBitset::new(10);
        set2.insert(3);
        set2.insert(5);
        set2.insert(7);

        assert_eq!(set1.intersection(&set2).to_vec(), vec![3, 5]);

        let mut union = set1.clone();
        union.union_with(&set2);
        assert_eq!(union.to_vec(), vec![1, 3, 5, 7]);
    }

    // Tests subset detection
    // Verified by comparing counts only
    #[test]
    fn test_is_subset() {
        let all = WordBitset::all(4);
        let single = WordBitset::singleton(4, 2);
        let mut other = WordBitset::new(4);
        other.insert(1);

        assert!(single.is_subset(&all));
        assert!(!all.is_subset(&single));
        assert!(!other.is_subset(&single));
        assert!(WordBitset::new(4).is_subset(&single));
    }

    // Tests creation of bitset with all bits set and the singleton constructor
    // Verified by initializing all bits to 0 instead of 1
    #[test]
    fn test_all_and_singleton() {
        let bitset = WordBitset::all(5);
        assert_eq!(bitset.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);

        let single = WordBitset::singleton(5, 3);
        assert_eq!(single.to_vec(), vec![3]);
        assert_eq!(single.to_string(), "WordBitset(1 words: [3])");
    }
}
