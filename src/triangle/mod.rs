// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The triangular array value.
//!
//! A [`Triangle`] is built eagerly and completely by its constructor and is
//! never mutated afterwards. Derived queries live in `queries`.

pub mod direction;
mod queries;

pub use direction::Direction;

use crate::error::{Result, TriangleError};
use crate::format::{format_triangle, FormatOptions};
use crate::generators::{Rows, TriangleKind};
use crate::Entry;
use log::{debug, warn};
use std::fmt;
use std::ops::Index;

/// An immutable triangular array of integers.
///
/// Row `i` of every built-in kind has `i + 1` entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// Requested number of rows.
    n: usize,
    /// The materialized array, row 0 first.
    rows: Rows,
}

impl Triangle {
    /// Build the first `n` rows of `kind`.
    ///
    /// Fails if any entry overflows; no partially built triangle survives.
    pub fn new(kind: TriangleKind, n: usize) -> Result<Self> {
        debug!("Generating {} triangle with {} rows", kind, n);
        Self::with_generator(n, |n| kind.generate(n)).map_err(|err| {
            warn!("Could not generate {} triangle with {} rows: {}", kind, n, err);
            err
        })
    }

    /// Build a triangle from an arbitrary generation rule.
    ///
    /// The rule is called exactly once with `n` and must return `n` rows;
    /// any other count fails with [`TriangleError::RowCount`].
    ///
    /// ```
    /// use triforce::{Entry, Triangle};
    ///
    /// let squares = Triangle::with_generator(3, |n| {
    ///     Ok((0..n)
    ///         .map(|i| (0..=i).map(|j| (i * j) as Entry).collect())
    ///         .collect())
    /// })
    /// .unwrap();
    /// assert_eq!(&squares[2], &[0, 2, 4]);
    /// ```
    pub fn with_generator<F>(n: usize, generate: F) -> Result<Self>
    where
        F: FnOnce(usize) -> Result<Rows>,
    {
        let rows = generate(n)?;
        if rows.len() != n {
            return Err(TriangleError::RowCount {
                expected: n,
                actual: rows.len(),
            });
        }
        Ok(Self { n, rows })
    }

    /// Wrap rows that are already materialized. Any shape is accepted.
    pub fn from_rows(rows: Rows) -> Self {
        Self {
            n: rows.len(),
            rows,
        }
    }

    /// The requested row count.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of materialized rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Entry>] {
        &self.rows
    }

    pub fn into_rows(self) -> Rows {
        self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Entry]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Row at `index`; negative indices count from the end (`-1` is the last row).
    pub fn get(&self, index: isize) -> Result<&[Entry]> {
        let len = self.rows.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        resolved
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
            .ok_or(TriangleError::RowOutOfRange { index, len })
    }

    /// Entry at `(row, col)`, if that position exists.
    pub fn entry(&self, row: usize, col: usize) -> Option<Entry> {
        self.rows.get(row)?.get(col).copied()
    }

    /// Render with explicit options; `Display` uses the defaults.
    pub fn format(&self, options: &FormatOptions) -> String {
        format_triangle(&self.rows, options)
    }
}

impl Index<usize> for Triangle {
    type Output = [Entry];

    fn index(&self, row: usize) -> &[Entry] {
        &self.rows[row]
    }
}

impl<'a> IntoIterator for &'a Triangle {
    type Item = &'a Vec<Entry>;
    type IntoIter = std::slice::Iter<'a, Vec<Entry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatOptions::default()))
    }
}
