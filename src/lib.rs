// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangular arrays of integers built from classic combinatorial recurrences.
//!
//! A [`Triangle`] is materialized row by row from one of the recurrences in
//! [`TriangleKind`] (Pascal, Bell, Catalan, Floyd, Hosoya, Fibonacci-Pascal,
//! Lucas-Pascal, Wythoff), then answers structural queries about itself:
//! row, column and diagonal sums, row differences, parity patterns, symmetry,
//! and formatted display.
//!
//! # Architecture
//!
//! ## Sequences
//!
//! Pure integer-sequence functions ([`sequences`]) that the generators call
//! for their edge terms and closed forms. They use checked arithmetic and
//! return `None` rather than wrapping when a value leaves the [`Entry`] range.
//!
//! ## Generators
//!
//! [`TriangleKind`] is a closed enum; each variant supplies only its row rule
//! ([`generators`]). Recurrences are a fold: each step reads the completed
//! previous row and yields a fresh one.
//!
//! ## Triangle
//!
//! The immutable array value ([`triangle`]). Every derived query is written
//! once against the materialized rows, independent of how they were built.
//!
//! ## Presentation
//!
//! Text rendering with an optional highlighted diagonal, and the 0/1
//! highlight grid consumed by external plotting tools ([`format`]).
//!
//! # Example
//!
//! ```
//! use triforce::{Direction, Triangle, TriangleKind};
//!
//! let pascal = Triangle::new(TriangleKind::Pascal, 5).unwrap();
//! assert_eq!(&pascal[4], &[1, 4, 6, 4, 1]);
//! assert_eq!(pascal.row_sums().unwrap(), vec![1, 2, 4, 8, 16]);
//! assert_eq!(pascal.diagonal(0, Direction::Right), vec![1; 5]);
//! assert!(pascal.is_symmetric());
//! ```

pub mod error;
pub mod format;
pub mod generators;
pub mod sequences;
pub mod triangle;

/// A single value stored in a triangular array.
///
/// Native 128-bit arithmetic. Generators report overflow as
/// [`TriangleError::Overflow`] and aggregating queries as
/// [`TriangleError::SumOverflow`], instead of wrapping.
pub type Entry = i128;

// Re-export commonly used types
pub use error::{Result, TriangleError};
pub use format::{format_triangle, Emphasis, FormatOptions};
pub use generators::{Rows, TriangleKind};
pub use triangle::{Direction, Triangle};
