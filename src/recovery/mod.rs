// src/recovery/mod.rs
//
// Recovery of the prime factors of an RSA modulus from a full key triple.
// Knowing (n, e, d) is computationally equivalent to knowing the
// factorization of n; the reduction is the probabilistic witness search in
// `factor_modulus`.

pub mod factor_modulus;

use log::info;
use num::{BigInt, One};

use crate::config::RecoveryConfig;
use crate::core::random::RandomSource;
use crate::error::RecoveryError;

/// Recovers the prime factors of `n` using the default configuration.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use rsarec::recovery::recover_factors;
///
/// let (p, q) = recover_factors(
///     &BigInt::from(3233),
///     &BigInt::from(17),
///     &BigInt::from(2753),
/// )
/// .unwrap();
/// assert_eq!((p, q), (BigInt::from(53), BigInt::from(61)));
/// ```
pub fn recover_factors(
    n: &BigInt,
    e: &BigInt,
    d: &BigInt,
) -> Result<(BigInt, BigInt), RecoveryError> {
    recover_factors_with(n, e, d, &RecoveryConfig::default())
}

/// Recovers the prime factors of `n`, honoring `config` for the attempt
/// budget and RNG seeding.
pub fn recover_factors_with(
    n: &BigInt,
    e: &BigInt,
    d: &BigInt,
    config: &RecoveryConfig,
) -> Result<(BigInt, BigInt), RecoveryError> {
    validate_triple(n, e, d)?;

    info!("recovering factors of a {}-bit modulus", n.bits());

    let mut rng = match config.seed {
        Some(seed) => RandomSource::with_seed(seed),
        None => RandomSource::new(),
    };

    let (p, q) = factor_modulus::factor_modulus(n, e, d, config.max_attempts, &mut rng)?;

    info!("recovered {}-bit and {}-bit factors", p.bits(), q.bits());
    Ok((p, q))
}

fn validate_triple(n: &BigInt, e: &BigInt, d: &BigInt) -> Result<(), RecoveryError> {
    if n <= &BigInt::one() {
        return Err(RecoveryError::InvalidInput(format!(
            "modulus must exceed 1, got {}",
            n
        )));
    }
    if e < &BigInt::one() {
        return Err(RecoveryError::InvalidInput(format!(
            "public exponent must be positive, got {}",
            e
        )));
    }
    if d < &BigInt::one() {
        return Err(RecoveryError::InvalidInput(format!(
            "private exponent must be positive, got {}",
            d
        )));
    }
    Ok(())
}
