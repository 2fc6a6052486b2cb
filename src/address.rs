//! Bitcoin address derivation and validation
//!
//! The pipeline: private scalar -> public point -> compressed serialization
//! -> HASH160 -> version prefix -> checksum -> Base58.

use crate::base58;
use crate::error::{EncodeError, KeyAddrError, Result};
use crate::hash;
use crate::keys::{PrivateKey, PublicKey};
use crate::PUBLIC_KEY_HASH_LEN;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which chain an address belongs to, fixing its version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// The Base58Check version byte for pay-to-pubkey-hash addresses.
    pub fn version_byte(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    pub fn from_version(version: u8) -> Option<Self> {
        match version {
            0x00 => Some(Network::Mainnet),
            0x6f => Some(Network::Testnet),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl FromStr for Network {
    type Err = KeyAddrError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(crate::error::ConfigError::UnknownNetwork(other.to_string()).into()),
        }
    }
}

/// A pay-to-pubkey-hash address: a version byte and a 20-byte HASH160.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    version: u8,
    pubkey_hash: [u8; PUBLIC_KEY_HASH_LEN],
}

impl Address {
    pub fn from_pubkey_hash(network: Network, pubkey_hash: [u8; PUBLIC_KEY_HASH_LEN]) -> Self {
        Self {
            version: network.version_byte(),
            pubkey_hash,
        }
    }

    /// Hash a compressed public key into an address.
    pub fn from_public_key(network: Network, public_key: &PublicKey) -> Result<Self> {
        let serialized = public_key.serialize_compressed()?;
        Ok(Self::from_pubkey_hash(network, hash::hash160(&serialized)))
    }

    /// Parse a Base58Check string, verifying its checksum.
    pub fn from_base58(encoded: &str) -> Result<Self> {
        let payload = base58::decode_check(encoded)?;
        if payload.len() != 1 + PUBLIC_KEY_HASH_LEN {
            return Err(EncodeError::InvalidLength(payload.len()).into());
        }
        let mut pubkey_hash = [0u8; PUBLIC_KEY_HASH_LEN];
        pubkey_hash.copy_from_slice(&payload[1..]);
        Ok(Self {
            version: payload[0],
            pubkey_hash,
        })
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn network(&self) -> Option<Network> {
        Network::from_version(self.version)
    }

    pub fn pubkey_hash(&self) -> &[u8; PUBLIC_KEY_HASH_LEN] {
        &self.pubkey_hash
    }

    /// The versioned payload without its checksum.
    pub fn payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(1 + PUBLIC_KEY_HASH_LEN);
        payload.push(self.version);
        payload.extend_from_slice(&self.pubkey_hash);
        payload
    }

    /// Render as Base58Check.
    pub fn to_base58(&self) -> String {
        base58::encode_check(&self.payload()).expect("address payload is 21 bytes")
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

/// Every intermediate value of one derivation, for inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedAddress {
    /// Private key scalar, 64 hex characters
    pub private_key: String,
    /// Public point x-coordinate, hex
    pub public_key_x: String,
    /// Public point y-coordinate, hex
    pub public_key_y: String,
    /// 33-byte compressed public key, hex
    pub compressed_public_key: String,
    /// HASH160 of the compressed key, hex
    pub public_key_hash: String,
    /// 4-byte Base58Check checksum, hex
    pub checksum: String,
    /// The Base58Check address
    pub address: String,
    /// Network the address belongs to
    pub network: Network,
}

/// Derives addresses for private keys on a fixed network.
#[derive(Debug, Clone, Copy)]
pub struct AddressGenerator {
    network: Network,
}

impl AddressGenerator {
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Run the full derivation pipeline for one private key.
    pub fn derive(&self, private_key: &PrivateKey) -> Result<DerivedAddress> {
        let public_key = PublicKey::from_private_key(private_key);
        let (x, y) = match public_key.point() {
            crate::curve::CurvePoint::Affine { x, y } => (x.clone(), y.clone()),
            // multiply() of an in-range scalar cannot reach infinity, but
            // the error path stays typed rather than unreachable!().
            crate::curve::CurvePoint::Infinity => {
                return Err(crate::error::CurveError::SerializeInfinity.into())
            }
        };
        debug!(x = %format!("{:x}", x.value()), "derived public point");

        let serialized = public_key.serialize_compressed()?;
        let pubkey_hash = hash::hash160(&serialized);
        debug!(hash = %hex::encode(pubkey_hash), "hashed public key");

        let address = Address::from_pubkey_hash(self.network, pubkey_hash);
        let checksum = hash::checksum(&address.payload());

        Ok(DerivedAddress {
            private_key: private_key.to_hex(),
            public_key_x: format!("{:064x}", x.value()),
            public_key_y: format!("{:064x}", y.value()),
            compressed_public_key: hex::encode(serialized),
            public_key_hash: hex::encode(pubkey_hash),
            checksum: hex::encode(checksum),
            address: address.to_base58(),
            network: self.network,
        })
    }

    /// Parse a hex private key and derive its address.
    pub fn derive_from_hex(&self, private_key_hex: &str) -> Result<DerivedAddress> {
        let private_key = PrivateKey::from_hex(private_key_hex)?;
        self.derive(&private_key)
    }

    /// Process a batch of private keys sequentially.
    pub fn process_batch(&self, batch: &AddressBatch) -> BatchOutcome {
        let mut derived = Vec::new();
        let mut errors = Vec::new();

        for (index, key_hex) in batch.private_keys.iter().enumerate() {
            match self.derive_from_hex(key_hex) {
                Ok(result) => derived.push(result),
                Err(e) => errors.push((index, e)),
            }
        }

        BatchOutcome { derived, errors }
    }

    /// Process a batch of private keys in parallel using rayon.
    pub fn process_batch_parallel(&self, batch: &AddressBatch) -> BatchOutcome {
        use rayon::prelude::*;

        let results: Vec<_> = batch
            .private_keys
            .par_iter()
            .enumerate()
            .map(|(index, key_hex)| (index, self.derive_from_hex(key_hex)))
            .collect();

        let mut derived = Vec::new();
        let mut errors = Vec::new();
        for (index, result) in results {
            match result {
                Ok(r) => derived.push(r),
                Err(e) => errors.push((index, e)),
            }
        }

        BatchOutcome { derived, errors }
    }
}

/// A batch of private keys awaiting derivation.
#[derive(Debug, Clone)]
pub struct AddressBatch {
    /// Private keys as hex strings
    pub private_keys: Vec<String>,
}

impl AddressBatch {
    pub fn new(private_keys: Vec<String>) -> Self {
        Self { private_keys }
    }

    pub fn len(&self) -> usize {
        self.private_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.private_keys.is_empty()
    }
}

/// Result of batch processing.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Successful derivations, in input order
    pub derived: Vec<DerivedAddress>,
    /// Errors encountered, indexed by input position
    pub errors: Vec<(usize, KeyAddrError)>,
}

impl BatchOutcome {
    pub fn success_count(&self) -> usize {
        self.derived.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn all_successful(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Verify that the last four bytes of a Base58Check string match the
/// double-SHA-256 of the versioned payload.
pub fn verify_checksum(encoded: &str) -> Result<()> {
    base58::decode_check(encoded).map(|_| ())
}
