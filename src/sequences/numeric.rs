// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numeric properties and coefficients.

use crate::Entry;

/// Trial-division primality test. Values below 2 are not prime.
pub fn is_prime(num: Entry) -> bool {
    if num < 2 {
        return false;
    }
    let mut divisor: Entry = 2;
    while divisor.checked_mul(divisor).is_some_and(|square| square <= num) {
        if num % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

pub fn is_even(num: Entry) -> bool {
    num.rem_euclid(2) == 0
}

pub fn is_odd(num: Entry) -> bool {
    num.rem_euclid(2) == 1
}

/// `num!`, or `None` past 33!.
pub fn factorial(num: usize) -> Option<Entry> {
    (2..=num).try_fold(1 as Entry, |acc, k| acc.checked_mul(k as Entry))
}

/// Binomial coefficient `C(n, k)`; zero when `k > n`.
///
/// Uses the multiplicative formula, so intermediate values stay close to
/// the result and `C(n, k)` is available well beyond `n = 33`.
pub fn binomial(n: usize, k: usize) -> Option<Entry> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: Entry = 1;
    for i in 0..k {
        // C(n, i+1) = C(n, i) * (n-i) / (i+1). Cancel the divisor first so
        // the product never exceeds the next coefficient.
        let divisor = i as Entry + 1;
        let common = gcd(result, divisor);
        let factor = (n - i) as Entry / (divisor / common);
        result = (result / common).checked_mul(factor)?;
    }
    Some(result)
}

/// Greatest common divisor of `|a|` and `|b|`; `gcd(0, 0) == 0`.
pub fn gcd(a: Entry, b: Entry) -> Entry {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // Only gcd(MIN, MIN) or gcd(MIN, 0) reaches 2^127.
    Entry::try_from(a).unwrap_or(Entry::MIN)
}

/// Trinomial coefficient `n! / (i! j! (n-i-j)!)`; zero when `i + j > n`.
pub fn trinomial(n: usize, i: usize, j: usize) -> Option<Entry> {
    if i + j > n {
        return Some(0);
    }
    binomial(n, i)?.checked_mul(binomial(n - i, j)?)
}

/// Integer square root: the largest `r` with `r * r <= value`.
pub fn isqrt(value: u128) -> u128 {
    if value < 2 {
        return value;
    }
    // Newton iteration from an upper bound; decreases monotonically to the floor root.
    let mut x = 1u128 << (128 - value.leading_zeros()).div_ceil(2);
    loop {
        let y = (x + value / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}
