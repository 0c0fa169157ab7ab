// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Catalan numbers.

use super::numeric::{binomial, gcd};
use crate::Entry;

/// `value * numerator / denominator` when the quotient is known to be an
/// integer. The denominator is cancelled first, so this only fails when the
/// result itself is out of range.
fn scale_exact(value: Entry, numerator: Entry, denominator: Entry) -> Option<Entry> {
    let common = gcd(value, denominator);
    (value / common).checked_mul(numerator / (denominator / common))
}

/// OEIS A000108: n-th Catalan number.
///
/// Iterates `C(k+1) = C(k) * 2(2k+1) / (k+2)`; each step is exact.
pub fn catalan(n: usize) -> Option<Entry> {
    (0..n).try_fold(1 as Entry, |c, k| {
        scale_exact(c, 2 * (2 * k as Entry + 1), k as Entry + 2)
    })
}

/// Closed form of the Catalan triangle: `(n-k+1) / (n+1) * C(n+k, k)`.
///
/// Zero outside the triangle (`k > n`).
pub fn catalan_triangle_entry(n: usize, k: usize) -> Option<Entry> {
    if k > n {
        return Some(0);
    }
    scale_exact(binomial(n + k, k)?, (n - k + 1) as Entry, n as Entry + 1)
}
