//! Private and public key types and SEC 1 point serialization

use crate::curve::{CurvePoint, GROUP_ORDER};
use crate::error::{CurveError, Result};
use crate::{COMPRESSED_PUBLIC_KEY_LEN, UNCOMPRESSED_PUBLIC_KEY_LEN};
use num_bigint::BigUint;
use num_traits::Zero;

/// A private key: a scalar in [1, n-1] where n is the group order.
///
/// The curve engine itself accepts any scalar; the range check lives here,
/// at the boundary where a scalar becomes a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: BigUint,
}

impl PrivateKey {
    pub fn new(scalar: BigUint) -> Result<Self> {
        if scalar.is_zero() || scalar >= *GROUP_ORDER {
            return Err(CurveError::InvalidScalarRange(format!("{:x}", scalar)).into());
        }
        Ok(Self { scalar })
    }

    /// Parse a big-endian hex string into a private key.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Self::new(BigUint::from_bytes_be(&bytes))
    }

    pub fn scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// The scalar as 64 zero-padded hex characters.
    pub fn to_hex(&self) -> String {
        format!("{:064x}", self.scalar)
    }
}

/// A public key: the curve point private_scalar * G.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    point: CurvePoint,
}

impl PublicKey {
    /// Derive the public key for a private key via double-and-add.
    pub fn from_private_key(private_key: &PrivateKey) -> Self {
        Self {
            point: CurvePoint::generator().multiply(private_key.scalar()),
        }
    }

    pub fn from_point(point: CurvePoint) -> Self {
        Self { point }
    }

    pub fn point(&self) -> &CurvePoint {
        &self.point
    }

    /// Compressed SEC 1 form: a parity prefix (0x02 for even y, 0x03 for
    /// odd) followed by the x-coordinate as 32 big-endian bytes, zero
    /// padded on the left.  Infinity has no serialization.
    pub fn serialize_compressed(&self) -> Result<[u8; COMPRESSED_PUBLIC_KEY_LEN]> {
        match &self.point {
            CurvePoint::Infinity => Err(CurveError::SerializeInfinity.into()),
            CurvePoint::Affine { x, y } => {
                let mut out = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
                out[0] = if y.is_even() { 0x02 } else { 0x03 };
                copy_padded(&mut out[1..33], &x.to_bytes_be());
                Ok(out)
            }
        }
    }

    /// Uncompressed SEC 1 form: 0x04 followed by both coordinates.
    pub fn serialize_uncompressed(&self) -> Result<[u8; UNCOMPRESSED_PUBLIC_KEY_LEN]> {
        match &self.point {
            CurvePoint::Infinity => Err(CurveError::SerializeInfinity.into()),
            CurvePoint::Affine { x, y } => {
                let mut out = [0u8; UNCOMPRESSED_PUBLIC_KEY_LEN];
                out[0] = 0x04;
                copy_padded(&mut out[1..33], &x.to_bytes_be());
                copy_padded(&mut out[33..65], &y.to_bytes_be());
                Ok(out)
            }
        }
    }
}

/// Copy `bytes` into `target` right-aligned, leaving leading zeros.
fn copy_padded(target: &mut [u8], bytes: &[u8]) {
    let offset = target.len() - bytes.len();
    target[offset..].copy_from_slice(bytes);
}
