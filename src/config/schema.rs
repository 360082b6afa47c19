//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the minting
//! client. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the minting client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MintConfig {
    /// Network settings (RPC endpoint, chain id, timeouts).
    pub network: NetworkConfig,

    /// Mint target settings (contract, recipient, function).
    pub mint: MintTargetConfig,
}

/// Network configuration.
///
/// The single `rpc_url` serves both standard JSON-RPC transaction submission
/// and the node's confidentiality service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID (e.g., 1291 for a shielded testnet, 31337 for local Anvil).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Number of block confirmations required for finality.
    pub confirmation_blocks: u32,

    /// Maximum time to wait for confirmation in seconds.
    pub confirmation_timeout_secs: u64,

    /// Gas price multiplier (1.0 = quoted, 1.2 = 20% buffer).
    pub gas_price_multiplier: f64,

    /// Maximum gas price in gwei (protection against spikes).
    pub max_gas_price_gwei: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 1291,
            rpc_timeout_secs: 10,
            confirmation_blocks: 1,
            confirmation_timeout_secs: 120,
            gas_price_multiplier: 1.2,
            max_gas_price_gwei: 500,
        }
    }
}

/// Mint target configuration.
///
/// Addresses are kept as plain strings and handed to the chain layer as-is.
/// They are not validated or normalized here; a malformed value surfaces when
/// the flow first tries to use it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MintTargetConfig {
    /// Address of the deployed NFT contract.
    pub contract_address: String,

    /// Address that receives the minted token.
    pub recipient: String,

    /// Contract function to invoke.
    pub function_name: String,
}

impl Default for MintTargetConfig {
    fn default() -> Self {
        Self {
            contract_address: "<Replace with Contract Address>".to_string(),
            recipient: "<Replace with Recipient Address>".to_string(),
            function_name: "safeMint".to_string(),
        }
    }
}
