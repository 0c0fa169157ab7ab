// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalan's triangle.
//!
//! Entry `(i, j)` equals `(i-j+1)/(i+1) * C(i+j, j)`; see
//! [`catalan_triangle_entry`](crate::sequences::catalan_triangle_entry).
//! Generation uses the additive recurrence instead, which needs no division.

use super::{fits, fold_rows, Rows};
use crate::error::Result;
use crate::Entry;

/// Row `i` opens with 1; entry `j` adds the entry above (0 past the end of
/// the previous row) to its left neighbour.
pub fn catalan(n: usize) -> Result<Rows> {
    fold_rows(n, vec![1], |i, previous| {
        let mut current: Entry = 1;
        let mut row = Vec::with_capacity(i + 1);
        row.push(current);
        for j in 1..=i {
            let above = previous.get(j).copied().unwrap_or(0);
            current = fits(current.checked_add(above), i, j)?;
            row.push(current);
        }
        Ok(row)
    })
}
