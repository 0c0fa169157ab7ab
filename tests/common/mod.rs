// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use strum::IntoEnumIterator;
use triforce::{Entry, Triangle, TriangleKind};

/// Build a triangle that is known to fit in native integers.
pub fn build(kind: TriangleKind, n: usize) -> Triangle {
    Triangle::new(kind, n).unwrap_or_else(|err| panic!("{kind} with {n} rows: {err}"))
}

/// Convert a literal table into owned rows.
pub fn rows(table: &[&[Entry]]) -> Vec<Vec<Entry>> {
    table.iter().map(|row| row.to_vec()).collect()
}

pub fn all_kinds() -> Vec<TriangleKind> {
    TriangleKind::iter().collect()
}

/// Kinds whose rows are palindromes.
pub fn symmetric_kinds() -> Vec<TriangleKind> {
    vec![
        TriangleKind::Pascal,
        TriangleKind::Hosoya,
        TriangleKind::FibonacciPascal,
        TriangleKind::LucasPascal,
    ]
}

/// Row count used where every kind must fit in an `Entry`.
///
/// Bell grows fastest: 40 rows end with the Bell number B(40), and B(43)
/// is the first Bell number past the `i128` range.
pub const MAX_SAFE_ROWS: usize = 40;
