//! Property-based tests for row selectors using proptest.

use proptest::prelude::*;
use rowsel::{evaluate, every_n_row_with_offset, first_n_row, last_n_row, EveryNthRow};

// Valid (n, offset, row_count) with n < row_count.
fn every_nth_strategy() -> impl Strategy<Value = (EveryNthRow, usize)> {
    (1i64..50)
        .prop_flat_map(|n| (Just(n), 0..n, (n as usize + 1)..200))
        .prop_map(|(n, offset, rows)| (every_n_row_with_offset(n, offset).unwrap(), rows))
}

proptest! {
    /// The mask always has one entry per row.
    #[test]
    fn mask_len_equals_row_count((sel, rows) in every_nth_strategy()) {
        prop_assert_eq!(evaluate(sel, rows).unwrap().len(), rows);
    }

    /// Selected rows are exactly those whose index hits the offset.
    #[test]
    fn every_nth_matches_modulus((sel, rows) in every_nth_strategy()) {
        let mask = evaluate(sel, rows).unwrap();
        for (i, keep) in mask.iter().enumerate() {
            prop_assert_eq!(*keep, i % sel.n() == sel.offset());
        }
    }

    /// Inverting flips every row, and inverting twice restores the mask.
    #[test]
    fn inversion_law((sel, rows) in every_nth_strategy()) {
        let mask = evaluate(sel, rows).unwrap();
        let inverted = evaluate(!sel, rows).unwrap();
        for (a, b) in mask.iter().zip(inverted.iter()) {
            prop_assert_eq!(*a, !*b);
        }
        prop_assert_eq!(evaluate(!!sel, rows).unwrap(), mask);
    }

    /// first/last select contiguous ranges at either end.
    #[test]
    fn first_and_last_ranges(rows in 1usize..200, pick in 1usize..200) {
        let n = pick.min(rows);
        let first = evaluate(first_n_row(n as i64).unwrap(), rows).unwrap();
        let last = evaluate(last_n_row(n as i64).unwrap(), rows).unwrap();
        prop_assert_eq!(first.selected_indices(), (0..n).collect::<Vec<_>>());
        prop_assert_eq!(last.selected_indices(), (rows - n..rows).collect::<Vec<_>>());
    }

    /// Asking for more rows than exist always fails.
    #[test]
    fn first_and_last_reject_oversized(rows in 0usize..100, extra in 1usize..10) {
        let n = (rows + extra) as i64;
        prop_assert!(evaluate(first_n_row(n).unwrap(), rows).is_err());
        prop_assert!(evaluate(last_n_row(n).unwrap(), rows).is_err());
    }
}
