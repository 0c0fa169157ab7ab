// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Diagonal directions.

use crate::error::TriangleError;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Which family of diagonals to walk.
///
/// - `Right`: constant column, walking down from `(index, index)`.
/// - `Left`: constant `row - col` offset, walking down from `(index, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl FromStr for Direction {
    type Err = TriangleError;

    /// Parse `right` or `left` (any case). Anything else is rejected, never
    /// defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("right") {
            Ok(Direction::Right)
        } else if s.eq_ignore_ascii_case("left") {
            Ok(Direction::Left)
        } else {
            Err(TriangleError::InvalidDirection(s.to_string()))
        }
    }
}
