//! Property-based tests for the in-memory containers

use chartdata_core::{ArrayTable, DefaultKeyedValues, KeyedValues, SortOrder, Values2D};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    // Property: keys stay unique and first-insertion order is kept
    #[test]
    fn prop_keys_unique_in_first_insertion_order(
        entries in prop::collection::vec((0u8..20, prop::option::of(-1e6f64..1e6)), 0..60)
    ) {
        let values: DefaultKeyedValues<u8> = entries.iter().copied().collect();

        let mut seen = HashSet::new();
        let expected_order: Vec<u8> = entries
            .iter()
            .filter(|(k, _)| seen.insert(*k))
            .map(|(k, _)| *k)
            .collect();

        let order: Vec<u8> = (0..values.item_count()).map(|i| values.key(i)).collect();
        prop_assert_eq!(order, expected_order);

        // Last write wins
        for key in seen {
            let last = entries.iter().rev().find(|(k, _)| *k == key).map(|(_, v)| *v).flatten();
            prop_assert_eq!(values.value_for_key(&key), last);
        }
    }

    // Property: sorting keeps every key reachable through its index
    #[test]
    fn prop_sort_keeps_index_consistent(
        entries in prop::collection::vec((0u16..500, prop::option::of(-1e3f64..1e3)), 0..60),
        descending in any::<bool>()
    ) {
        let mut values: DefaultKeyedValues<u16> = entries.into_iter().collect();
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        values.sort_by_values(order);

        for i in 0..values.item_count() {
            let key = values.key(i);
            prop_assert_eq!(values.index_of(&key), Some(i));
        }

        let present: Vec<f64> = (0..values.item_count()).filter_map(|i| values.value(i)).collect();
        for pair in present.windows(2) {
            match order {
                SortOrder::Ascending => prop_assert!(pair[0] <= pair[1]),
                SortOrder::Descending => prop_assert!(pair[0] >= pair[1]),
            }
        }
    }

    // Property: an ArrayTable answers every in-range cell with what it stores
    #[test]
    fn prop_array_table_lookup(
        rows in 0usize..6,
        cols in 0usize..6,
        seed in -1e3f64..1e3
    ) {
        let data: Vec<Vec<f64>> = (0..rows)
            .map(|r| (0..cols).map(|c| seed + (r * cols + c) as f64).collect())
            .collect();
        let table = ArrayTable::from_values(&data).unwrap();

        prop_assert_eq!(table.row_count(), rows as isize);
        for r in 0..rows {
            for c in 0..cols {
                prop_assert_eq!(table.value(r as isize, c as isize), Some(data[r][c]));
            }
        }
        prop_assert_eq!(table.value(rows as isize, 0), None);
    }
}
