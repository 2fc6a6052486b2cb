//! Batch job configuration loaded from JSON

use crate::address::{AddressBatch, Network};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Configuration for a batch derivation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Private keys as hex strings
    pub private_keys: Vec<String>,

    /// Network name, "mainnet" or "testnet"
    #[serde(default = "default_network")]
    pub network: String,

    /// Process keys in parallel (default: false)
    #[serde(default)]
    pub parallel: bool,
}

fn default_network() -> String {
    "mainnet".to_string()
}

impl BatchConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.private_keys.is_empty() {
            return Err(ConfigError::EmptyKeyList.into());
        }

        for key in &self.private_keys {
            if !is_valid_key_hex(key) {
                return Err(ConfigError::InvalidKey(key.clone()).into());
            }
        }

        // Rejects unknown network names.
        self.network()?;

        Ok(())
    }

    pub fn network(&self) -> Result<Network> {
        Network::from_str(&self.network)
    }

    pub fn to_batch(&self) -> AddressBatch {
        AddressBatch::new(self.private_keys.clone())
    }
}

/// Basic shape check; range validation happens at derivation time.
fn is_valid_key_hex(key: &str) -> bool {
    !key.is_empty() && key.len() <= 64 && key.chars().all(|c| c.is_ascii_hexdigit())
}
