// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer sequences used to generate triangular arrays.
//!
//! Every function here is pure and total for its input domain. Values that
//! do not fit in an [`Entry`](crate::Entry) come back as `None`.
//!
//! - `fibonacci`: Fibonacci, Lucas, Pell, Pell-Lucas and Tribonacci numbers
//! - `catalan`: Catalan numbers and Catalan triangle entries
//! - `wythoff`: lower, upper and compound Wythoff sequences, Wythoff array terms
//! - `numeric`: primality, parity, gcd, factorials, binomial and trinomial coefficients

pub mod catalan;
pub mod fibonacci;
pub mod numeric;
pub mod wythoff;

// Re-export for convenience
pub use catalan::{catalan, catalan_triangle_entry};
pub use fibonacci::{fibonacci, lucas, pell, pell_lucas, tribonacci};
pub use numeric::{binomial, factorial, gcd, is_even, is_odd, is_prime, isqrt, trinomial};
pub use wythoff::{compound_wythoff, lower_wythoff, upper_wythoff, wythoff_term};
