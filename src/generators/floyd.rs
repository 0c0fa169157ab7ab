// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Floyd's triangle: <https://en.wikipedia.org/wiki/Floyd%27s_triangle>

use super::{fits, fold_rows, Rows};
use crate::error::Result;
use crate::Entry;

/// Row `i` holds the next `i + 1` positive integers, counting from 1.
pub fn floyd(n: usize) -> Result<Rows> {
    fold_rows(n, vec![1], |i, previous| {
        let start = previous[i - 1];
        (1..=i + 1)
            .map(|offset| fits(start.checked_add(offset as Entry), i, offset - 1))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd() {
        assert_eq!(
            floyd(4).unwrap(),
            vec![vec![1], vec![2, 3], vec![4, 5, 6], vec![7, 8, 9, 10]]
        );
    }

    #[test]
    fn test_floyd_is_consecutive() {
        let values: Vec<Entry> = floyd(30).unwrap().into_iter().flatten().collect();
        let expected: Vec<Entry> = (1..=465).collect();
        assert_eq!(values, expected);
    }
}
