// src/recovery/factor_modulus.rs
//
// Miller-Rabin-style factoring reduction.
// See: Handbook of Applied Cryptography, 8.2.2 Security of RSA,
// (i) Relation to factoring (p. 287).
//
// e*d - 1 is a multiple of the group exponent lambda(n), so for a random
// base a the sequence a^t, a^(2t), a^(4t), ... reaches 1. The value just
// before the first 1 is a square root of unity mod n; with probability at
// least 3/4 it is neither 1 nor n-1, and such a non-trivial root cannot
// exist modulo a prime, so gcd(c1 - 1, n) splits the modulus.

use log::debug;
use num::{BigInt, Integer, One};

use crate::core::random::RandomSource;
use crate::error::RecoveryError;
use crate::integer_math::gcd;
use crate::integer_math::two_adic;

/// Searches for a non-trivial square root of unity mod n and extracts a
/// factor from it.
///
/// Each attempt draws a fresh base a in [1, n-1] and walks the s squarings
/// of a^t, where e*d - 1 = t * 2^s with t odd. An attempt that completes
/// the walk without a witness is abandoned; a triple with s = 0 can never
/// produce one and burns through the budget without erroring.
///
/// # Arguments
/// * `n` - The modulus to split (must be > 1)
/// * `e` - The public exponent
/// * `d` - The private exponent matching `e`
/// * `max_attempts` - Number of random bases tried before giving up
/// * `rng` - Source of the random bases
///
/// # Returns
/// Ok((p, q)) with p * q = n and 1 < p <= q < n, or
/// Err(FactorizationFailed) once the budget is exhausted
///
/// # Examples
/// ```
/// use num::BigInt;
/// use rsarec::core::random::RandomSource;
/// use rsarec::recovery::factor_modulus::factor_modulus;
///
/// let mut rng = RandomSource::with_seed(1);
/// let (p, q) = factor_modulus(
///     &BigInt::from(3233),
///     &BigInt::from(17),
///     &BigInt::from(2753),
///     200,
///     &mut rng,
/// )
/// .unwrap();
/// assert_eq!((p, q), (BigInt::from(53), BigInt::from(61)));
/// ```
pub fn factor_modulus(
    n: &BigInt,
    e: &BigInt,
    d: &BigInt,
    max_attempts: usize,
    rng: &mut RandomSource,
) -> Result<(BigInt, BigInt), RecoveryError> {
    let (t, s) = two_adic::split_pow2(&(e * d - BigInt::one()));
    debug!("e*d - 1 = t * 2^s with odd t, s = {}", s);

    let one = BigInt::one();
    let two = BigInt::from(2);
    let n_minus_one = n - &one;

    for attempt in 1..=max_attempts {
        let a = rng.next_in_range(&one, &n_minus_one);

        // c1 runs through a^(t*2^(i-1)) for i = 1..=s by repeated squaring
        let mut c1 = a.modpow(&t, n);

        for _ in 0..s {
            let c2 = c1.modpow(&two, n);

            if c2.is_one() && !c1.is_one() && c1 != n_minus_one {
                debug!("witness found on attempt {} of {}", attempt, max_attempts);
                return split_with_root(n, &c1);
            }

            c1 = c2;
        }

        debug!("attempt {} of {}: no witness for this base", attempt, max_attempts);
    }

    Err(RecoveryError::FactorizationFailed {
        attempts: max_attempts,
    })
}

/// Extracts the factor pair from a non-trivial square root of unity.
fn split_with_root(n: &BigInt, root: &BigInt) -> Result<(BigInt, BigInt), RecoveryError> {
    let p = gcd::gcd_pair(&(root - BigInt::one()), n);

    if p <= BigInt::one() || &p >= n || !n.is_multiple_of(&p) {
        return Err(RecoveryError::InternalInvariantViolation(format!(
            "square root of unity yielded gcd {} which does not split the modulus",
            p
        )));
    }

    let q = n / &p;
    if p <= q {
        Ok((p, q))
    } else {
        Ok((q, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recover(n: u64, e: u64, d: u64) -> Result<(BigInt, BigInt), RecoveryError> {
        let mut rng = RandomSource::with_seed(42);
        factor_modulus(
            &BigInt::from(n),
            &BigInt::from(e),
            &BigInt::from(d),
            200,
            &mut rng,
        )
    }

    #[test]
    fn test_textbook_key() {
        // n = 61 * 53, the classic worked example
        let (p, q) = recover(3233, 17, 2753).unwrap();
        assert_eq!(p, BigInt::from(53));
        assert_eq!(q, BigInt::from(61));
    }

    #[test]
    fn test_factors_come_back_ascending() {
        for seed in 0..5 {
            let mut rng = RandomSource::with_seed(seed);
            let (p, q) = factor_modulus(
                &BigInt::from(3233u32),
                &BigInt::from(17u32),
                &BigInt::from(2753u32),
                200,
                &mut rng,
            )
            .unwrap();
            assert!(p <= q);
            assert_eq!(&p * &q, BigInt::from(3233));
        }
    }

    #[test]
    fn test_reduced_private_exponent_still_works() {
        // 413 = 2753 mod lcm(60, 52); reducing d mod lambda(n) keeps the
        // triple consistent
        let (p, q) = recover(3233, 17, 413).unwrap();
        assert_eq!((p, q), (BigInt::from(53), BigInt::from(61)));
    }

    #[test]
    fn test_odd_exponent_product_fails_within_budget() {
        // 17 * 412 - 1 is odd, so s = 0 and no base can ever witness
        let result = recover(3233, 17, 412);
        assert!(matches!(
            result,
            Err(RecoveryError::FactorizationFailed { attempts: 200 })
        ));
    }

    #[test]
    fn test_degenerate_unit_exponents_fail_within_budget() {
        // e = d = 1 makes e*d - 1 = 0; the split is (0, 0) and every
        // attempt has an empty walk
        let result = recover(3233, 1, 1);
        assert!(matches!(
            result,
            Err(RecoveryError::FactorizationFailed { .. })
        ));
    }

    #[test]
    fn test_prime_modulus_fails_within_budget() {
        // no non-trivial square root of unity exists modulo a prime
        let result = recover(101, 3, 67);
        assert!(matches!(
            result,
            Err(RecoveryError::FactorizationFailed { .. })
        ));
    }
}
