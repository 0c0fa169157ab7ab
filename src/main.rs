// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: build one triangle, print it and selected queries.
//!
//! ```bash
//! triforce pascal -n 10 --highlight 1 --show row-sums --show center
//! triforce lucas-pascal -n 64 --plot even > lucas_even.pbm
//! RUST_LOG=debug triforce bell -n 8
//! ```

use clap::{Parser, ValueEnum};
use log::info;
use std::fmt::Debug;
use std::process::ExitCode;
use triforce::format::{highlight_grid, to_pbm, DEFAULT_SPACING};
use triforce::sequences::{is_even, is_odd, is_prime};
use triforce::{Direction, Emphasis, Entry, FormatOptions, Triangle, TriangleKind};

#[derive(Parser, Debug)]
#[command(name = "triforce")]
#[command(about = "Generate and analyze triangular arrays of integers")]
#[command(version)]
struct Cli {
    /// Triangle to build: pascal, bell, catalan, floyd, hosoya,
    /// fibonacci-pascal, lucas-pascal or wythoff
    #[arg(value_parser = TriangleKind::from_name)]
    kind: TriangleKind,

    /// Number of rows
    #[arg(short = 'n', long, default_value_t = 10)]
    rows: usize,

    /// Emphasize the diagonal at this offset from the main diagonal
    #[arg(long)]
    highlight: Option<usize>,

    /// Style used for highlighted entries (bold, underline, inverse)
    #[arg(long, default_value_t = Emphasis::Bold)]
    emphasis: Emphasis,

    /// Blanks between adjacent entries
    #[arg(long, default_value_t = DEFAULT_SPACING)]
    spacing: usize,

    /// Query to print after the triangle (repeatable)
    #[arg(long, value_enum)]
    show: Vec<Query>,

    /// Print the diagonal with this index
    #[arg(long)]
    diagonal: Option<usize>,

    /// Direction for --diagonal and diagonal-sums (right or left)
    #[arg(long, default_value_t = Direction::Right)]
    direction: Direction,

    /// Print the triangle reduced modulo this value
    #[arg(long)]
    modulus: Option<Entry>,

    /// Print only a PBM image marking the entries that satisfy a predicate
    #[arg(long, value_enum)]
    plot: Option<Plot>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Query {
    Flatten,
    RowSums,
    ColumnSums,
    RowDifferences,
    CumulativeRowSums,
    DiagonalSums,
    RisingDiagonalSums,
    Parity,
    Center,
    Symmetric,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Plot {
    Even,
    Odd,
    Prime,
}

impl Plot {
    fn predicate(self) -> fn(Entry) -> bool {
        match self {
            Plot::Even => is_even,
            Plot::Odd => is_odd,
            Plot::Prime => is_prime,
        }
    }
}

fn labelled<T: Debug>(label: &str, value: T) -> String {
    format!("{label}: {value:?}\n")
}

fn run_query(triangle: &Triangle, query: Query, direction: Direction) -> triforce::Result<String> {
    Ok(match query {
        Query::Flatten => labelled("flatten", triangle.flatten()),
        Query::RowSums => labelled("row sums", triangle.row_sums()?),
        Query::ColumnSums => labelled("column sums", triangle.column_sums()?),
        Query::RowDifferences => labelled("row differences", triangle.row_differences()?),
        Query::CumulativeRowSums => {
            labelled("cumulative row sums", triangle.cumulative_row_sums()?)
        }
        Query::DiagonalSums => labelled(
            &format!("{direction} diagonal sums"),
            triangle.diagonal_sums(direction)?,
        ),
        Query::RisingDiagonalSums => {
            labelled("rising diagonal sums", triangle.rising_diagonal_sums()?)
        }
        Query::Parity => format!("parity:\n{}", triangle.parity_pattern()),
        Query::Center => labelled("center", triangle.center()),
        Query::Symmetric => labelled("symmetric", triangle.is_symmetric()),
    })
}

fn run(cli: &Cli) -> triforce::Result<String> {
    let triangle = Triangle::new(cli.kind, cli.rows)?;
    info!("Built {} triangle with {} rows", cli.kind, triangle.len());

    if let Some(plot) = cli.plot {
        return Ok(to_pbm(&highlight_grid(&triangle, plot.predicate())));
    }

    let mut options = FormatOptions::new()
        .with_spacing(cli.spacing)
        .with_emphasis(cli.emphasis);
    if let Some(diagonal) = cli.highlight {
        options = options.with_highlight(diagonal);
    }

    let mut out = triangle.format(&options);
    for &query in &cli.show {
        out.push_str(&run_query(&triangle, query, cli.direction)?);
    }
    if let Some(index) = cli.diagonal {
        out.push_str(&labelled(
            &format!("{} diagonal {}", cli.direction, index),
            triangle.diagonal(index, cli.direction),
        ));
    }
    if let Some(k) = cli.modulus {
        out.push_str(&format!("mod {k}:\n{}", triangle.mod_triangle(k)?));
    }
    Ok(out)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
