// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Row-generation rules for every built-in triangle kind.
//!
//! Each kind contributes one function `fn(n) -> Result<Rows>`. Recurrence-based
//! kinds are expressed with [`fold_rows`]: the step reads the immutable,
//! already-completed previous row and returns a brand-new row. Closed-form
//! kinds use [`tabulate`].
//!
//! All generators agree on the boundary: `n == 0` gives no rows.

pub mod bell;
pub mod catalan;
pub mod floyd;
pub mod hosoya;
pub mod pascal;
pub mod wythoff;

use crate::error::{Result, TriangleError};
use crate::Entry;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString, IntoStaticStr};

/// The materialized rows of a triangular array.
pub type Rows = Vec<Vec<Entry>>;

/// The built-in triangular arrays.
///
/// Names are kebab-case (`pascal`, `fibonacci-pascal`, ...) for display and
/// parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumCountMacro,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum TriangleKind {
    /// Binomial coefficients.
    Pascal,
    /// Bell (Aitken's) triangle; the edges are the Bell numbers.
    Bell,
    /// Catalan's triangle; the right edge holds the Catalan numbers.
    Catalan,
    /// Consecutive positive integers.
    Floyd,
    /// Products of Fibonacci numbers.
    Hosoya,
    /// Pascal's rule with Fibonacci numbers on the edges.
    FibonacciPascal,
    /// Pascal's rule with Lucas numbers on the edges.
    LucasPascal,
    /// Anti-diagonals of the Wythoff array.
    Wythoff,
}

impl TriangleKind {
    /// Generate the first `n` rows of this kind.
    pub fn generate(self, n: usize) -> Result<Rows> {
        match self {
            TriangleKind::Pascal => pascal::pascal(n),
            TriangleKind::Bell => bell::bell(n),
            TriangleKind::Catalan => catalan::catalan(n),
            TriangleKind::Floyd => floyd::floyd(n),
            TriangleKind::Hosoya => hosoya::hosoya(n),
            TriangleKind::FibonacciPascal => pascal::fibonacci_pascal(n),
            TriangleKind::LucasPascal => pascal::lucas_pascal(n),
            TriangleKind::Wythoff => wythoff::wythoff(n),
        }
    }

    /// Parse a kind from its kebab-case name.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| TriangleError::UnknownKind(name.to_string()))
    }
}

/// Build `n` rows starting from `first`, deriving each later row from the
/// previous one with `step(row_index, previous_row)`.
pub fn fold_rows<F>(n: usize, first: Vec<Entry>, mut step: F) -> Result<Rows>
where
    F: FnMut(usize, &[Entry]) -> Result<Vec<Entry>>,
{
    let mut rows = Vec::with_capacity(n);
    if n == 0 {
        return Ok(rows);
    }
    let mut previous = first;
    for i in 1..n {
        let next = step(i, &previous)?;
        rows.push(std::mem::replace(&mut previous, next));
    }
    rows.push(previous);
    Ok(rows)
}

/// Build `n` full rows (row `i` has `i + 1` entries) from a closed form.
pub fn tabulate<F>(n: usize, mut entry: F) -> Result<Rows>
where
    F: FnMut(usize, usize) -> Result<Entry>,
{
    (0..n)
        .map(|i| (0..=i).map(|j| entry(i, j)).collect::<Result<Vec<_>>>())
        .collect()
}

/// Turn a checked computation for cell `(row, col)` into an entry.
pub(crate) fn fits(value: Option<Entry>, row: usize, col: usize) -> Result<Entry> {
    value.ok_or(TriangleError::Overflow { row, col })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_kind_names() {
        assert_eq!(TriangleKind::Pascal.to_string(), "pascal");
        assert_eq!(TriangleKind::FibonacciPascal.to_string(), "fibonacci-pascal");
        let name: &'static str = TriangleKind::LucasPascal.into();
        assert_eq!(name, "lucas-pascal");
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(TriangleKind::from_name("bell"), Ok(TriangleKind::Bell));
        assert_eq!(
            TriangleKind::from_name("Fibonacci-Pascal"),
            Ok(TriangleKind::FibonacciPascal)
        );
        assert_eq!(
            TriangleKind::from_name("sierpinski"),
            Err(TriangleError::UnknownKind(String::from("sierpinski")))
        );
    }

    #[test]
    fn test_every_kind_round_trips_its_name() {
        assert_eq!(TriangleKind::iter().count(), TriangleKind::COUNT);
        for kind in TriangleKind::iter() {
            assert_eq!(TriangleKind::from_name(&kind.to_string()), Ok(kind));
        }
    }

    #[test]
    fn test_every_kind_is_empty_at_zero() {
        for kind in TriangleKind::iter() {
            assert_eq!(kind.generate(0), Ok(Vec::new()), "{kind}");
        }
    }

    #[test]
    fn test_every_kind_starts_with_one() {
        for kind in TriangleKind::iter() {
            assert_eq!(kind.generate(1), Ok(vec![vec![1]]), "{kind}");
        }
    }

    #[test]
    fn test_fold_rows_passes_previous_row() {
        let rows = fold_rows(4, vec![0], |i, previous| {
            let mut row = previous.to_vec();
            row.push(i as Entry);
            Ok(row)
        })
        .unwrap();
        assert_eq!(rows, vec![vec![0], vec![0, 1], vec![0, 1, 2], vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_fold_rows_stops_at_first_error() {
        let mut calls = 0;
        let result = fold_rows(10, vec![1], |i, _| {
            calls += 1;
            if i == 3 {
                Err(TriangleError::Overflow { row: i, col: 0 })
            } else {
                Ok(vec![1; i + 1])
            }
        });
        assert_eq!(result, Err(TriangleError::Overflow { row: 3, col: 0 }));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_tabulate_shape() {
        let rows = tabulate(3, |i, j| Ok((10 * i + j) as Entry)).unwrap();
        assert_eq!(rows, vec![vec![0], vec![10, 11], vec![20, 21, 22]]);
    }
}
