// src/integer_math/two_adic.rs

use num::{BigInt, Integer, Zero};

/// Splits x into (t, s) with x = t * 2^s and t odd.
///
/// The split of 0 is (0, 0); zero is even at every width, so the halving
/// loop has to stop on it explicitly.
pub fn split_pow2(x: &BigInt) -> (BigInt, u32) {
    let mut t = x.clone();
    let mut s = 0u32;

    while !t.is_zero() && t.is_even() {
        t /= 2;
        s += 1;
    }

    (t, s)
}
