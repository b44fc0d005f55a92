use crate::error::ArithmeticError;

use bigint::{Encoding, U256};
use num_bigint::BigUint;

pub fn u256_to_biguint(number: &U256) -> BigUint {
    BigUint::from_bytes_be(&number.to_be_bytes())
}

/// Returns `None` if the number does not fit into 256 bits.
pub fn biguint_to_u256(number: &BigUint) -> Option<U256> {
    let bytes = number.to_bytes_be();
    if bytes.len() > 32 {
        return None;
    }
    let mut padded = [0u8; 32];
    padded[32 - bytes.len()..].copy_from_slice(&bytes);
    Some(U256::from_be_slice(&padded))
}

/// Parses a big-endian hex string, with or without a `0x` prefix, of at most 64 digits.
pub fn parse_hex_u256(input: &str) -> Result<U256, ArithmeticError> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    // NOTE this check avoids explicit panics by `from_be_slice`
    if stripped.is_empty() || stripped.len() > 64 {
        return Err(ArithmeticError::InvalidHex(input.to_string()));
    }
    let padded = format!("{:0>64}", stripped);
    let bytes = hex::decode(padded).map_err(|e| ArithmeticError::InvalidHex(e.to_string()))?;
    Ok(U256::from_be_slice(&bytes))
}
