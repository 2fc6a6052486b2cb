//! Error types for secp256k1 arithmetic and address encoding

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum KeyAddrError {
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Field and curve arithmetic errors
#[derive(Error, Debug)]
pub enum CurveError {
    #[error("Modular inverse of zero is undefined")]
    UndefinedInverse,

    #[error("The point at infinity has no serialization")]
    SerializeInfinity,

    #[error("Private key scalar out of range [1, n-1]: {0}")]
    InvalidScalarRange(String),
}

/// Base58Check encoding and decoding errors
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Cannot encode an empty payload")]
    EmptyPayload,

    #[error("Character not in the Base58 alphabet: {0:?}")]
    InvalidCharacter(char),

    #[error("Decoded payload too short: {0} bytes")]
    InvalidLength(usize),

    #[error("Checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

/// Batch configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration contains no private keys")]
    EmptyKeyList,

    #[error("Invalid private key in configuration: {0}")]
    InvalidKey(String),

    #[error("Unknown network: {0}. Must be \"mainnet\" or \"testnet\"")]
    UnknownNetwork(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KeyAddrError>;
