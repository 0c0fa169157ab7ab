// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hosoya's triangle: <https://en.wikipedia.org/wiki/Hosoya%27s_triangle>

use super::{fits, tabulate, Rows};
use crate::error::Result;
use crate::sequences::fibonacci;

/// Entry `(i, j)` is `F(j+1) * F(i-j+1)`.
pub fn hosoya(n: usize) -> Result<Rows> {
    tabulate(n, |i, j| {
        let product = fibonacci(j + 1)
            .zip(fibonacci(i - j + 1))
            .and_then(|(left, right)| left.checked_mul(right));
        fits(product, i, j)
    })
}
