// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bell triangle: <https://en.wikipedia.org/wiki/Bell_triangle>

use super::{fits, fold_rows, Rows};
use crate::error::Result;

/// Each row opens with the last entry of the previous row; every following
/// entry adds the entry above-left to its left neighbour.
pub fn bell(n: usize) -> Result<Rows> {
    fold_rows(n, vec![1], |i, previous| {
        let mut current = previous[i - 1];
        let mut row = Vec::with_capacity(i + 1);
        row.push(current);
        for (j, &above_left) in previous.iter().enumerate() {
            current = fits(current.checked_add(above_left), i, j + 1)?;
            row.push(current);
        }
        Ok(row)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell() {
        assert_eq!(
            bell(5).unwrap(),
            vec![
                vec![1],
                vec![1, 2],
                vec![2, 3, 5],
                vec![5, 7, 10, 15],
                vec![15, 20, 27, 37, 52],
            ]
        );
    }

    #[test]
    fn test_bell_edges_are_bell_numbers() {
        let rows = bell(10).unwrap();
        let left: Vec<_> = rows.iter().map(|row| row[0]).collect();
        assert_eq!(left, vec![1, 1, 2, 5, 15, 52, 203, 877, 4140, 21147]);
    }

    #[test]
    fn test_bell_overflow_is_reported() {
        assert!(matches!(
            bell(60),
            Err(crate::TriangleError::Overflow { .. })
        ));
    }
}
