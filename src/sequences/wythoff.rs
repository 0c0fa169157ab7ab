// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wythoff sequences and the Wythoff array.
//!
//! `floor(n * phi)` is computed exactly in integers. Since
//! `n * phi = (n + sqrt(5 n^2)) / 2` and `sqrt(5 n^2)` is irrational for
//! `n > 0`, the floor equals `(n + isqrt(5 n^2)) / 2` with integer division.

use super::fibonacci::fibonacci;
use super::numeric::isqrt;
use crate::Entry;

/// OEIS A000201: `floor(n * phi)`.
pub fn lower_wythoff(n: usize) -> Option<Entry> {
    let n = n as u128;
    let root = isqrt(n.checked_mul(n)?.checked_mul(5)?);
    Entry::try_from((n + root) / 2).ok()
}

/// OEIS A001950: `floor(n * phi^2)`, which is `floor(n * phi) + n`.
pub fn upper_wythoff(n: usize) -> Option<Entry> {
    lower_wythoff(n)?.checked_add(n as Entry)
}

/// OEIS A003622: `floor(n * phi^2) - 1`.
pub fn compound_wythoff(n: usize) -> Option<Entry> {
    Some(upper_wythoff(n)? - 1)
}

/// Term of the Wythoff array at 1-based row `n`, column `k`:
/// `(n-1) F(k) + F(k+1) floor(n phi)`.
pub fn wythoff_term(n: usize, k: usize) -> Option<Entry> {
    let left = (n as Entry - 1).checked_mul(fibonacci(k)?)?;
    let right = fibonacci(k + 1)?.checked_mul(lower_wythoff(n)?)?;
    left.checked_add(right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(f: fn(usize) -> Option<Entry>) -> Vec<Entry> {
        (1..=10).map(|n| f(n).unwrap()).collect()
    }

    #[test]
    fn test_lower_wythoff() {
        assert_eq!(terms(lower_wythoff), vec![1, 3, 4, 6, 8, 9, 11, 12, 14, 16]);
        assert_eq!(lower_wythoff(0), Some(0));
    }

    #[test]
    fn test_upper_wythoff() {
        assert_eq!(terms(upper_wythoff), vec![2, 5, 7, 10, 13, 15, 18, 20, 23, 26]);
    }

    #[test]
    fn test_compound_wythoff() {
        assert_eq!(terms(compound_wythoff), vec![1, 4, 6, 9, 12, 14, 17, 19, 22, 25]);
    }

    #[test]
    fn test_lower_wythoff_large() {
        // floor(10^6 * phi) = 1618033
        assert_eq!(lower_wythoff(1_000_000), Some(1_618_033));
    }

    #[test]
    fn test_wythoff_array_first_row() {
        // First row of the Wythoff array is the Fibonacci numbers from 1, 2.
        let row: Vec<Entry> = (1..=6).map(|k| wythoff_term(1, k).unwrap()).collect();
        assert_eq!(row, vec![1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_wythoff_array_first_column() {
        // First column is floor(floor(n phi) phi): 1, 4, 6, 9, 12.
        let column: Vec<Entry> = (1..=5).map(|n| wythoff_term(n, 1).unwrap()).collect();
        assert_eq!(column, vec![1, 4, 6, 9, 12]);
    }
}
