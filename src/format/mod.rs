// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering of triangular arrays.
//!
//! [`format_triangle`] centres every row under the last one, pads each cell
//! to the widest entry, and can emphasize one diagonal. Emphasis is an
//! abstract [`Emphasis`] style, resolved to terminal attributes here.
//!
//! The `grid` submodule produces the 0/1 highlight grid consumed by external
//! plotting tools.

pub mod grid;

pub use grid::{highlight_grid, to_pbm};

use crate::Entry;
use crossterm::style::{style, Attribute, Stylize};
use strum_macros::{Display, EnumIter, EnumString};

/// Blanks between adjacent cells.
pub const DEFAULT_SPACING: usize = 3;

/// How a highlighted entry is set apart from the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Emphasis {
    #[default]
    Bold,
    Underline,
    Inverse,
}

impl Emphasis {
    fn attribute(self) -> Attribute {
        match self {
            Emphasis::Bold => Attribute::Bold,
            Emphasis::Underline => Attribute::Underlined,
            Emphasis::Inverse => Attribute::Reverse,
        }
    }

    /// Wrap already-padded text in this style.
    pub fn apply(self, text: &str) -> String {
        style(text).attribute(self.attribute()).to_string()
    }
}

/// Rendering options for [`format_triangle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Blanks between adjacent cells.
    pub spacing: usize,
    /// Emphasize entries where `|row - col| == d`.
    pub highlight: Option<usize>,
    pub emphasis: Emphasis,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            highlight: None,
            emphasis: Emphasis::default(),
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_highlight(mut self, diagonal: usize) -> Self {
        self.highlight = Some(diagonal);
        self
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }
}

/// Render `rows` as a centred triangle, one line per row.
///
/// Cells are centred in the width of the widest entry. Row `i` is indented
/// by `(last_width - len_i * (width + spacing) + spacing) / 2` blanks, where
/// `last_width` is the rendered width of the last row. Highlighted cells are
/// padded before they are styled, so they keep their alignment.
///
/// ```
/// use triforce::{format_triangle, FormatOptions};
///
/// let rows = vec![vec![1], vec![1, 1], vec![1, 2, 1]];
/// assert_eq!(
///     format_triangle(&rows, &FormatOptions::default()),
///     "    1\n  1   1\n1   2   1\n"
/// );
/// ```
pub fn format_triangle(rows: &[Vec<Entry>], options: &FormatOptions) -> String {
    let Some(last) = rows.last() else {
        return String::new();
    };
    let width = rows
        .iter()
        .flatten()
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(0);
    let pitch = width + options.spacing;
    let last_width = (last.len() * pitch).saturating_sub(options.spacing);
    let separator = " ".repeat(options.spacing);

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(j, value)| {
                let cell = format!("{value:^width$}");
                match options.highlight {
                    Some(diagonal) if i.abs_diff(j) == diagonal => options.emphasis.apply(&cell),
                    _ => cell,
                }
            })
            .collect();
        let indent = (last_width + options.spacing).saturating_sub(row.len() * pitch) / 2;
        out.push_str(&" ".repeat(indent));
        out.push_str(&cells.join(&separator));
        out.push('\n');
    }
    out
}
