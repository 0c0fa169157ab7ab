// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for triangle construction and queries.

use thiserror::Error;

/// Errors raised while building or querying a triangular array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangleError {
    /// Diagonal direction other than `left` or `right`.
    #[error("Direction must be either 'left' or 'right', got '{0}'")]
    InvalidDirection(String),

    /// Row index outside `-len..len`.
    #[error("Row index {index} out of range for triangle with {len} rows")]
    RowOutOfRange { index: isize, len: usize },

    /// A generation rule returned a different number of rows than requested.
    #[error("Generator returned {actual} rows, expected {expected}")]
    RowCount { expected: usize, actual: usize },

    /// `mod_triangle(0)`.
    #[error("Modulus must be non-zero")]
    ZeroModulus,

    /// A generated entry does not fit in an `Entry`.
    #[error("Entry at row {row}, column {col} overflows the native integer range")]
    Overflow { row: usize, col: usize },

    /// An aggregating query (sum or difference) left the native integer range.
    #[error("{query} overflowed at index {index}")]
    SumOverflow { query: &'static str, index: usize },

    /// Name that matches no triangle kind.
    #[error("Unknown triangle kind '{0}'")]
    UnknownKind(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TriangleError>;
