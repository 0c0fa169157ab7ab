// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests over generated and arbitrary triangles.

mod common;

use common::{all_kinds, build, symmetric_kinds, MAX_SAFE_ROWS};
use proptest::prelude::*;
use triforce::sequences::{binomial, catalan};
use triforce::{Direction, Entry, FormatOptions, Triangle, TriangleKind};

fn ragged_rows() -> impl Strategy<Value = Vec<Vec<Entry>>> {
    prop::collection::vec(prop::collection::vec(-1000i128..1000, 0..6), 0..8)
}

proptest! {
    #[test]
    fn prop_every_kind_is_triangular(kind in prop::sample::select(all_kinds()), n in 0..=MAX_SAFE_ROWS) {
        let triangle = build(kind, n);
        prop_assert_eq!(triangle.len(), n);
        for (i, row) in triangle.iter().enumerate() {
            prop_assert_eq!(row.len(), i + 1);
        }
        prop_assert_eq!(triangle.flatten().len(), n * (n + 1) / 2);
    }

    #[test]
    fn prop_pascal_row_sums_are_powers_of_two(n in 1usize..100) {
        let sums = build(TriangleKind::Pascal, n).row_sums().unwrap();
        for (i, sum) in sums.into_iter().enumerate() {
            prop_assert_eq!(sum, 1i128 << i);
        }
    }

    #[test]
    fn prop_pascal_diagonal_sums_follow_hockey_stick(n in 1usize..60) {
        let sums = build(TriangleKind::Pascal, n).diagonal_sums(Direction::Right).unwrap();
        for (d, sum) in sums.into_iter().enumerate() {
            prop_assert_eq!(Some(sum), binomial(n, d + 1));
        }
    }

    #[test]
    fn prop_catalan_right_edge(n in 1usize..40) {
        let triangle = build(TriangleKind::Catalan, n);
        let last = n - 1;
        prop_assert_eq!(Some(triangle[last][last]), catalan(last));
    }

    #[test]
    fn prop_symmetric_kinds_match_both_diagonals(
        kind in prop::sample::select(symmetric_kinds()),
        n in 0usize..30,
        d in 0usize..30,
    ) {
        let triangle = build(kind, n);
        prop_assert_eq!(triangle.diagonal(d, Direction::Left), triangle.diagonal(d, Direction::Right));
    }

    #[test]
    fn prop_mod_triangle_is_in_range(
        kind in prop::sample::select(all_kinds()),
        n in 0usize..25,
        k in -50i128..50,
    ) {
        prop_assume!(k != 0);
        let reduced = build(kind, n).mod_triangle(k).unwrap();
        prop_assert_eq!(reduced.len(), n);
        prop_assert!(reduced.flatten().iter().all(|&v| (0..k.abs()).contains(&v)));
    }

    #[test]
    fn prop_cumulative_total_matches_flatten(rows in ragged_rows()) {
        let triangle = Triangle::from_rows(rows);
        let total: Entry = triangle.flatten().iter().sum();
        let cumulative = triangle.cumulative_row_sums().unwrap();
        prop_assert_eq!(cumulative.last().copied().unwrap_or(0), total);
    }

    #[test]
    fn prop_parity_pattern_keeps_shape(rows in ragged_rows()) {
        let triangle = Triangle::from_rows(rows);
        let parity = triangle.parity_pattern();
        prop_assert_eq!(parity.len(), triangle.len());
        for (row, bits) in triangle.iter().zip(parity.iter()) {
            prop_assert_eq!(row.len(), bits.len());
            for (&value, &bit) in row.iter().zip(bits) {
                prop_assert_eq!(bit, Entry::from(value % 2 != 0));
            }
        }
    }

    #[test]
    fn prop_negative_get_counts_from_end(rows in ragged_rows(), back in 1usize..10) {
        let triangle = Triangle::from_rows(rows);
        let len = triangle.len();
        let from_end = triangle.get(-(back as isize));
        if back <= len {
            prop_assert_eq!(from_end.unwrap(), triangle.get((len - back) as isize).unwrap());
        } else {
            prop_assert!(from_end.is_err());
        }
    }

    #[test]
    fn prop_format_has_one_line_per_row(kind in prop::sample::select(all_kinds()), n in 0usize..20, spacing in 1usize..5) {
        let text = build(kind, n).format(&FormatOptions::new().with_spacing(spacing));
        prop_assert_eq!(text.lines().count(), n);
        prop_assert_eq!(text.lines().last().map(str::len), text.lines().map(str::len).max());
    }
}
