//! Base58 and Base58Check encoding
//!
//! The payload is read as a big-endian unsigned integer and repeatedly
//! divided by 58; leading zero bytes are preserved as leading `'1'`
//! characters since the integer conversion alone would drop them.

use crate::error::{EncodeError, Result};
use crate::hash;
use crate::CHECKSUM_LEN;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// The Bitcoin Base58 alphabet: no `0`, `O`, `I` or `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode a byte payload as Base58.
pub fn encode(payload: &[u8]) -> Result<String> {
    if payload.is_empty() {
        return Err(EncodeError::EmptyPayload.into());
    }

    let mut value = BigUint::from_bytes_be(payload);
    let mut digits: Vec<u8> = Vec::new();
    while !value.is_zero() {
        let remainder = (&value % 58u32)
            .to_usize()
            .expect("remainder of division by 58 fits in usize");
        digits.push(ALPHABET[remainder]);
        value /= 58u32;
    }

    // One alphabet zero per leading zero byte of the original payload.
    for &byte in payload {
        if byte != 0 {
            break;
        }
        digits.push(ALPHABET[0]);
    }

    Ok(digits.iter().rev().map(|&b| b as char).collect())
}

/// Decode a Base58 string back into its byte payload.
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    if encoded.is_empty() {
        return Err(EncodeError::EmptyPayload.into());
    }

    let mut value = BigUint::zero();
    for c in encoded.chars() {
        let index = ALPHABET
            .iter()
            .position(|&a| a as char == c)
            .ok_or(EncodeError::InvalidCharacter(c))?;
        value = value * 58u32 + index as u32;
    }

    let digits = if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    };

    let leading_zeros = encoded.chars().take_while(|&c| c == '1').count();
    let mut payload = vec![0u8; leading_zeros];
    payload.extend_from_slice(&digits);
    Ok(payload)
}

/// Append a 4-byte double-SHA-256 checksum to the payload, then encode.
pub fn encode_check(payload: &[u8]) -> Result<String> {
    if payload.is_empty() {
        return Err(EncodeError::EmptyPayload.into());
    }
    let mut data = payload.to_vec();
    data.extend_from_slice(&hash::checksum(payload));
    encode(&data)
}

/// Decode a Base58Check string, verify its checksum and strip it.
pub fn decode_check(encoded: &str) -> Result<Vec<u8>> {
    let data = decode(encoded)?;
    if data.len() <= CHECKSUM_LEN {
        return Err(EncodeError::InvalidLength(data.len()).into());
    }

    let (payload, found) = data.split_at(data.len() - CHECKSUM_LEN);
    let expected = hash::checksum(payload);
    if found != expected {
        return Err(EncodeError::ChecksumMismatch {
            expected: hex::encode(expected),
            actual: hex::encode(found),
        }
        .into());
    }
    Ok(payload.to_vec())
}
