//! Secp256k1 elliptic-curve arithmetic and Bitcoin address derivation
//!
//! A minimal curve engine (field arithmetic, point addition, double-and-add
//! scalar multiplication) plus the pipeline that turns a private scalar into
//! a compressed public key and a Base58Check address.

pub mod address;
pub mod base58;
pub mod config;
pub mod curve;
pub mod error;
pub mod field;
pub mod hash;
pub mod keys;

pub use address::{Address, AddressBatch, AddressGenerator, BatchOutcome, DerivedAddress, Network};
pub use config::BatchConfig;
pub use curve::CurvePoint;
pub use error::*;
pub use field::FieldElement;
pub use keys::{PrivateKey, PublicKey};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::address::{
        Address, AddressBatch, AddressGenerator, BatchOutcome, DerivedAddress, Network,
    };
    pub use crate::config::BatchConfig;
    pub use crate::curve::CurvePoint;
    pub use crate::error::*;
    pub use crate::field::FieldElement;
    pub use crate::keys::{PrivateKey, PublicKey};
}

#[cfg(test)]
mod tests;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compressed SEC 1 public key length: parity prefix + 32-byte x
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

/// Uncompressed SEC 1 public key length: 0x04 prefix + both coordinates
pub const UNCOMPRESSED_PUBLIC_KEY_LEN: usize = 65;

/// HASH160 output length
pub const PUBLIC_KEY_HASH_LEN: usize = 20;

/// Base58Check checksum length
pub const CHECKSUM_LEN: usize = 4;

/// Address payload length: version + hash + checksum
pub const ADDRESS_PAYLOAD_LEN: usize = 1 + PUBLIC_KEY_HASH_LEN + CHECKSUM_LEN;
