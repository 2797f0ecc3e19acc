// src/keyfield.rs
//
// Adapters between encoded key material and the integers the recovery core
// consumes. Key fields are base64 blobs carrying a two-byte header followed
// by the big-endian magnitude of the value.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use num::bigint::Sign;
use num::{BigInt, Signed};

use crate::error::RecoveryError;

const FIELD_HEADER_LEN: usize = 2;

/// Decodes a base64 key field into its integer value.
pub fn decode_key_field(encoded: &str) -> Result<BigInt, RecoveryError> {
    let raw = BASE64
        .decode(encoded.trim())
        .map_err(|err| RecoveryError::InvalidInput(format!("bad base64 key field: {}", err)))?;

    if raw.len() <= FIELD_HEADER_LEN {
        return Err(RecoveryError::InvalidInput(format!(
            "key field too short: {} bytes",
            raw.len()
        )));
    }

    Ok(BigInt::from_bytes_be(Sign::Plus, &raw[FIELD_HEADER_LEN..]))
}

/// Parses a non-negative integer given as decimal, 0x-prefixed hex, or a
/// `base64:`-prefixed key field.
pub fn parse_integer(text: &str) -> Result<BigInt, RecoveryError> {
    let text = text.trim();

    if let Some(field) = text.strip_prefix("base64:") {
        return decode_key_field(field);
    }

    let (digits, radix) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex_digits) => (hex_digits, 16),
        None => (text, 10),
    };

    BigInt::parse_bytes(digits.as_bytes(), radix)
        .filter(|value| !value.is_negative())
        .ok_or_else(|| RecoveryError::InvalidInput(format!("not a non-negative integer: {:?}", text)))
}

/// Renders the big-endian magnitude of a value as lowercase hex.
pub fn to_hex(value: &BigInt) -> String {
    hex::encode(value.to_bytes_be().1)
}
