// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Derived, read-only views over a materialized triangle.
//!
//! Every query here reads only `rows`, so it applies to every kind and to
//! triangles wrapped with [`Triangle::from_rows`]. Sums and differences use
//! checked arithmetic and fail with [`TriangleError::SumOverflow`].

use super::{Direction, Triangle};
use crate::error::{Result, TriangleError};
use crate::Entry;

/// Sum `values`, reporting overflow against `query` at `index`.
fn checked_sum<'a, I>(values: I, query: &'static str, index: usize) -> Result<Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    values
        .into_iter()
        .try_fold(0 as Entry, |acc, &value| acc.checked_add(value))
        .ok_or(TriangleError::SumOverflow { query, index })
}

impl Triangle {
    /// All entries, row-major.
    pub fn flatten(&self) -> Vec<Entry> {
        self.rows.iter().flatten().copied().collect()
    }

    /// Sum of each row, in row order.
    pub fn row_sums(&self) -> Result<Vec<Entry>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| checked_sum(row, "row_sums", i))
            .collect()
    }

    /// Column-wise sums over the width of the last row.
    ///
    /// Shorter rows only contribute to the columns they have; entries past
    /// the width of the last row are ignored.
    pub fn column_sums(&self) -> Result<Vec<Entry>> {
        let Some(last) = self.rows.last() else {
            return Ok(Vec::new());
        };
        let mut sums = vec![0 as Entry; last.len()];
        for row in &self.rows {
            for (col, (sum, &value)) in sums.iter_mut().zip(row).enumerate() {
                *sum = sum
                    .checked_add(value)
                    .ok_or(TriangleError::SumOverflow {
                        query: "column_sums",
                        index: col,
                    })?;
            }
        }
        Ok(sums)
    }

    /// `row[i][col] - row[i-1][col]` for each adjacent pair of rows, over the
    /// columns of the earlier row. One fewer row than the triangle.
    pub fn row_differences(&self) -> Result<Vec<Vec<Entry>>> {
        self.rows
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                pair[0]
                    .iter()
                    .zip(&pair[1])
                    .map(|(&above, &below)| {
                        below.checked_sub(above).ok_or(TriangleError::SumOverflow {
                            query: "row_differences",
                            index: i + 1,
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect()
    }

    /// Running total of [`row_sums`](Self::row_sums).
    pub fn cumulative_row_sums(&self) -> Result<Vec<Entry>> {
        let mut total: Entry = 0;
        self.row_sums()?
            .into_iter()
            .enumerate()
            .map(|(i, sum)| {
                total = total.checked_add(sum).ok_or(TriangleError::SumOverflow {
                    query: "cumulative_row_sums",
                    index: i,
                })?;
                Ok(total)
            })
            .collect()
    }

    /// Entries along one diagonal.
    ///
    /// `Right` collects `rows[i][index]` for `i` in `index..len`; `Left`
    /// collects `rows[i + index][i]` while `i + index < len`. An index past
    /// the last row gives an empty diagonal.
    pub fn diagonal(&self, index: usize, direction: Direction) -> Vec<Entry> {
        let below = self.rows.iter().skip(index);
        match direction {
            Direction::Right => below.filter_map(|row| row.get(index).copied()).collect(),
            Direction::Left => below
                .enumerate()
                .filter_map(|(i, row)| row.get(i).copied())
                .collect(),
        }
    }

    /// Sum of every diagonal `0..len` in `direction`.
    pub fn diagonal_sums(&self, direction: Direction) -> Result<Vec<Entry>> {
        (0..self.rows.len())
            .map(|d| checked_sum(&self.diagonal(d, direction), "diagonal_sums", d))
            .collect()
    }

    /// Entries met walking up-right from the start of row `start`.
    ///
    /// The walk stops when it runs off the top of the triangle or past the
    /// end of a row.
    pub fn rising_diagonal(&self, start: usize) -> Result<Vec<Entry>> {
        if start >= self.rows.len() {
            return Err(TriangleError::RowOutOfRange {
                index: start as isize,
                len: self.rows.len(),
            });
        }
        Ok((0..=start)
            .map_while(|step| self.rows[start - step].get(step).copied())
            .collect())
    }

    /// Sum of the rising diagonal from every row.
    pub fn rising_diagonal_sums(&self) -> Result<Vec<Entry>> {
        (0..self.rows.len())
            .map(|r| checked_sum(&self.rising_diagonal(r)?, "rising_diagonal_sums", r))
            .collect()
    }

    /// Same shape; 1 for odd entries and 0 for even ones.
    pub fn parity_pattern(&self) -> Triangle {
        self.map_entries(|value| value.rem_euclid(2))
    }

    /// Same shape, every entry reduced modulo `k`.
    ///
    /// Uses the Euclidean remainder, so results lie in `0..|k|` even for
    /// negative entries or a negative `k`. Fails for `k == 0`.
    pub fn mod_triangle(&self, k: Entry) -> Result<Triangle> {
        if k == 0 {
            return Err(TriangleError::ZeroModulus);
        }
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, value)| {
                        // Only MIN % -1 can fail once k != 0.
                        value
                            .checked_rem_euclid(k)
                            .ok_or(TriangleError::Overflow { row, col })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<_>>()?;
        Ok(Triangle { n: self.n, rows })
    }

    /// Middle entry of every row with an odd number of entries.
    pub fn center(&self) -> Vec<Entry> {
        self.rows
            .iter()
            .filter(|row| row.len() % 2 == 1)
            .map(|row| row[row.len() / 2])
            .collect()
    }

    /// True if every row reads the same in both directions.
    pub fn is_symmetric(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.iter().eq(row.iter().rev()))
    }

    fn map_entries<F>(&self, f: F) -> Triangle
    where
        F: Fn(Entry) -> Entry,
    {
        Triangle {
            n: self.n,
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|&value| f(value)).collect())
                .collect(),
        }
    }
}
