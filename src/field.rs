//! Prime field arithmetic over the secp256k1 base field

use crate::error::{CurveError, Result};
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::{One, Zero};

lazy_static! {
    /// The secp256k1 field characteristic: p = 2^256 - 2^32 - 977.
    ///
    /// See https://en.bitcoin.it/wiki/Secp256k1 and SEC 2, section 2.4.1.
    pub static ref FIELD_PRIME: BigUint =
        (BigUint::one() << 256usize) - (BigUint::one() << 32usize) - BigUint::from(977u32);
}

/// An integer reduced modulo the secp256k1 prime.
///
/// Every operation returns a new value reduced into [0, p); nothing is
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldElement {
    value: BigUint,
}

impl FieldElement {
    /// Create a field element, reducing the value modulo p.
    pub fn new(value: BigUint) -> Self {
        Self {
            value: value % &*FIELD_PRIME,
        }
    }

    /// The additive identity.
    pub fn zero() -> Self {
        Self {
            value: BigUint::zero(),
        }
    }

    pub fn from_u64(value: u64) -> Self {
        Self::new(BigUint::from(value))
    }

    /// Parse a big-endian hex string into a field element.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Ok(Self::new(BigUint::from_bytes_be(&bytes)))
    }

    /// The reduced representative in [0, p).
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Big-endian bytes of the reduced representative, without padding.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.value.to_bytes_be()
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_even(&self) -> bool {
        !self.value.bit(0)
    }

    pub fn add(&self, other: &FieldElement) -> FieldElement {
        Self::new(&self.value + &other.value)
    }

    /// Subtraction wraps through p so the intermediate never goes negative.
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        Self::new(&self.value + &*FIELD_PRIME - &other.value)
    }

    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        Self::new(&self.value * &other.value)
    }

    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Additive inverse: (-a) mod p.
    pub fn negate(&self) -> FieldElement {
        if self.value.is_zero() {
            Self::zero()
        } else {
            Self {
                value: &*FIELD_PRIME - &self.value,
            }
        }
    }

    /// Multiplicative inverse via Fermat's little theorem: a^(p-2) mod p,
    /// computed by binary exponentiation.
    ///
    /// The inverse of zero is undefined and fails fast rather than
    /// returning a silent zero.
    pub fn inverse(&self) -> Result<FieldElement> {
        if self.value.is_zero() {
            return Err(CurveError::UndefinedInverse.into());
        }
        let exponent = &*FIELD_PRIME - BigUint::from(2u32);
        Ok(Self {
            value: self.value.modpow(&exponent, &FIELD_PRIME),
        })
    }

    /// Field division: a * b^(-1) mod p.
    pub fn div(&self, other: &FieldElement) -> Result<FieldElement> {
        Ok(self.mul(&other.inverse()?))
    }
}
