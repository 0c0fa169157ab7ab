// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wythoff triangle: the Wythoff array read along its anti-diagonals.

use super::{fits, Rows};
use crate::error::Result;
use crate::sequences::wythoff_term;

/// Row `i` collects `w(j, i-j+2)` for `j` in `1..=i+1`, then reverses it so
/// the term from the first array row comes last.
pub fn wythoff(n: usize) -> Result<Rows> {
    (0..n)
        .map(|i| {
            let width = i + 1;
            let mut row = (1..=width)
                .map(|j| fits(wythoff_term(j, width - j + 1), i, width - j))
                .collect::<Result<Vec<_>>>()?;
            row.reverse();
            Ok(row)
        })
        .collect()
}
