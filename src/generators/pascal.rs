// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pascal's rule, with constant, Fibonacci or Lucas edges.
//!
//! Row `i` is `[e(i)] + [prev[k] + prev[k+1] ...] + [e(i)]`, where `e` is the
//! edge sequence. Plain Pascal uses `e(i) = 1`; the weighted variants use
//! `F(i+1)` and `L(i+1)`.

use super::{fits, fold_rows, Rows};
use crate::error::Result;
use crate::sequences::{fibonacci, lucas};
use crate::Entry;

pub fn pascal(n: usize) -> Result<Rows> {
    with_edges(n, |_| Some(1))
}

pub fn fibonacci_pascal(n: usize) -> Result<Rows> {
    with_edges(n, |i| fibonacci(i + 1))
}

pub fn lucas_pascal(n: usize) -> Result<Rows> {
    with_edges(n, |i| lucas(i + 1))
}

fn with_edges<E>(n: usize, edge: E) -> Result<Rows>
where
    E: Fn(usize) -> Option<Entry>,
{
    fold_rows(n, vec![1], |i, previous| {
        let end = fits(edge(i), i, 0)?;
        let mut row = Vec::with_capacity(i + 1);
        row.push(end);
        for (k, pair) in previous.windows(2).enumerate() {
            row.push(fits(pair[0].checked_add(pair[1]), i, k + 1)?);
        }
        row.push(end);
        Ok(row)
    })
}
