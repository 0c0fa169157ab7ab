// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Highlight grids for external plotting.
//!
//! A plotting consumer needs only the row count and positional lookup. It
//! marks every entry satisfying a predicate, e.g. the even entries of a
//! Lucas-Pascal triangle, and renders the grid as a binary image.

use crate::triangle::Triangle;
use crate::Entry;

/// `len x len` grid: cell `(i, j)` is 1 if `(i, j)` exists in `triangle`
/// and its entry satisfies `predicate`, 0 otherwise.
pub fn highlight_grid<P>(triangle: &Triangle, predicate: P) -> Vec<Vec<u8>>
where
    P: Fn(Entry) -> bool,
{
    let size = triangle.len();
    (0..size)
        .map(|i| {
            (0..size)
                .map(|j| u8::from(triangle.entry(i, j).is_some_and(&predicate)))
                .collect()
        })
        .collect()
}

/// Plain PBM (`P1`) image of a 0/1 grid; 1 is a black pixel.
///
/// Short rows are padded with 0 to the width of the widest row.
pub fn to_pbm(grid: &[Vec<u8>]) -> String {
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let mut out = format!("P1\n{} {}\n", width, grid.len());
    for row in grid {
        let pixels: Vec<String> = (0..width)
            .map(|j| row.get(j).map_or(0, |&bit| u8::from(bit != 0)).to_string())
            .collect();
        out.push_str(&pixels.join(" "));
        out.push('\n');
    }
    out
}
