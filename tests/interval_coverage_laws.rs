//! Property-based tests for IntervalBst's interval bookkeeping.
//!
//! The tree's defining invariant: at every observation point the leaf
//! intervals, read in order, tile the whole integer domain — unbounded at
//! both ends, adjacent everywhere else, with every boundary equal to a
//! stored key.

use benchable_sets::IntervalBst;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Asserts that the tree's leaves tile the domain around its sorted keys:
/// `(-∞, k₁), (k₁, k₂), …, (kₙ, +∞)`.
fn assert_tiles_domain(tree: &IntervalBst) -> Result<(), TestCaseError> {
    let keys = tree.keys();
    let intervals = tree.leaf_intervals();

    prop_assert_eq!(intervals.len(), keys.len() + 1, "one leaf per gap");

    let mut expected_boundary = None;
    for (index, &(lower, upper)) in intervals.iter().enumerate() {
        prop_assert_eq!(lower, expected_boundary, "gap or overlap at leaf {}", index);
        expected_boundary = upper;

        // every finite boundary is the neighboring stored key
        if index < keys.len() {
            prop_assert_eq!(upper, Some(keys[index]));
        } else {
            prop_assert_eq!(upper, None, "last leaf must be unbounded above");
        }
    }

    Ok(())
}

proptest! {
    /// Law: coverage holds after every single insert.
    #[test]
    fn prop_coverage_holds_under_inserts(
        values in prop::collection::vec(-48i64..48, 0..48),
    ) {
        let mut tree = IntervalBst::new();
        for value in values {
            tree.insert(value);
            assert_tiles_domain(&tree)?;
        }
    }

    /// Law: coverage holds after every single operation of a mixed
    /// insert/delete sequence.
    #[test]
    fn prop_coverage_holds_under_mixed_operations(
        operations in prop::collection::vec((any::<bool>(), -48i64..48), 0..64),
    ) {
        let mut tree = IntervalBst::new();
        for (is_insert, value) in operations {
            if is_insert {
                tree.insert(value);
            } else {
                tree.delete(value);
            }
            assert_tiles_domain(&tree)?;
        }
    }

    /// Law: a found value's node reports that value as its key.
    #[test]
    fn prop_find_returns_a_handle_to_the_queried_key(
        values in prop::collection::vec(-48i64..48, 1..48),
    ) {
        let tree: IntervalBst = values.iter().copied().collect();
        for value in values {
            let id = tree.find(value);
            prop_assert!(id.is_some());
            prop_assert_eq!(tree.key(id.unwrap()), Some(value));
        }
    }

    /// Law: deleting everything returns the tree to its starting state.
    #[test]
    fn prop_deleting_everything_restores_the_unbounded_leaf(
        values in prop::collection::vec(-48i64..48, 0..48),
    ) {
        let mut tree: IntervalBst = values.iter().copied().collect();
        for value in tree.keys() {
            prop_assert!(tree.delete(value));
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.leaf_intervals(), vec![(None, None)]);
    }
}
