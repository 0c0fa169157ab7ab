// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fibonacci-like linear recurrences.

use crate::Entry;

/// n-th term of `x(k) = weight * x(k-1) + x(k-2)` with the given seeds.
fn second_order(n: usize, first: Entry, second: Entry, weight: Entry) -> Option<Entry> {
    if n == 0 {
        return Some(first);
    }
    let (mut a, mut b) = (first, second);
    for _ in 1..n {
        let next = weight.checked_mul(b)?.checked_add(a)?;
        a = b;
        b = next;
    }
    Some(b)
}

/// OEIS A000045: n-th Fibonacci number, `F(0) = 0`, `F(1) = 1`.
pub fn fibonacci(n: usize) -> Option<Entry> {
    second_order(n, 0, 1, 1)
}

/// OEIS A000032: n-th Lucas number, `L(0) = 2`, `L(1) = 1`.
pub fn lucas(n: usize) -> Option<Entry> {
    second_order(n, 2, 1, 1)
}

/// OEIS A000129: n-th Pell number.
pub fn pell(n: usize) -> Option<Entry> {
    second_order(n, 0, 1, 2)
}

/// OEIS A002203: n-th Pell-Lucas number.
pub fn pell_lucas(n: usize) -> Option<Entry> {
    second_order(n, 2, 2, 2)
}

/// OEIS A000073: n-th Tribonacci number, seeded `0, 0, 1`.
pub fn tribonacci(n: usize) -> Option<Entry> {
    match n {
        0 | 1 => Some(0),
        2 => Some(1),
        _ => {
            let (mut a, mut b, mut c): (Entry, Entry, Entry) = (0, 0, 1);
            for _ in 3..=n {
                let next = a.checked_add(b)?.checked_add(c)?;
                a = b;
                b = c;
                c = next;
            }
            Some(c)
        }
    }
}
