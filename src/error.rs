// src/error.rs

use thiserror::Error;

/// Failure modes of the recovery entry points.
#[derive(Debug, Error)]
pub enum RecoveryError {
    /// The supplied values fail basic range or format checks.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The witness search exhausted its attempt budget. Expected when
    /// (n, e, d) is not a consistent RSA key.
    #[error("no factor found after {attempts} attempts; (n, e, d) does not look like a consistent RSA key")]
    FactorizationFailed { attempts: usize },

    /// A value that cannot occur for a genuine key was produced. Indicates
    /// a logic bug rather than bad input.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}
