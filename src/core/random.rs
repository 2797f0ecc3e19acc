// src/core/random.rs

use num::bigint::Sign;
use num::BigInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform arbitrary-precision integers for witness sampling.
///
/// Recovery is a one-time offline operation, not a secret-generation path,
/// so a seedable PRNG stream is sufficient.
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::thread_rng().fill(&mut seed[..]);
        RandomSource {
            rng: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Deterministic stream for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        RandomSource {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform draw from [lower, upper], both ends inclusive.
    pub fn next_in_range(&mut self, lower: &BigInt, upper: &BigInt) -> BigInt {
        debug_assert!(lower <= upper);

        let span = upper - lower;
        let span_bytes = span.to_bytes_be().1;
        let mut buffer = vec![0u8; span_bytes.len()];

        // Rejection sampling keeps the draw uniform over the span.
        loop {
            self.rng.fill(&mut buffer[..]);
            let candidate = BigInt::from_bytes_be(Sign::Plus, &buffer);

            if candidate <= span {
                return candidate + lower;
            }
        }
    }
}
