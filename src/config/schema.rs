//! Configuration schema definitions.
//!
//! All types derive Serde traits and default field-by-field, so an empty
//! (or absent) config file yields a working devnet setup matching the
//! tool's built-in constants.

use serde::{Deserialize, Serialize};

/// Root configuration for the minting tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MinterConfig {
    /// Cluster RPC settings.
    pub rpc: RpcConfig,

    /// Storage node settings.
    pub storage: StorageConfig,

    /// Signing identity settings.
    pub wallet: WalletConfig,
}

/// Cluster RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Cluster name ("devnet", "testnet", "mainnet-beta") or an RPC URL.
    pub cluster: String,

    /// Explicit RPC endpoint overriding the cluster's public one.
    pub url: Option<String>,

    /// Timeout for RPC queries in seconds.
    pub timeout_secs: u64,

    /// Timeout for transaction finalization in seconds.
    pub confirm_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            cluster: "devnet".to_string(),
            url: None,
            timeout_secs: 30,
            confirm_timeout_secs: 120,
        }
    }
}

/// Storage node configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage node endpoint uploads are posted to.
    pub address: String,

    /// Client-side upload timeout in milliseconds.
    pub timeout_ms: u64,

    /// Gateway base URL returned URIs are rooted at.
    pub gateway: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            address: "https://devnet.bundlr.network".to_string(),
            timeout_ms: 60_000,
            gateway: "https://arweave.net".to_string(),
        }
    }
}

/// Signing identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Keypair file path, used when the env var is not set. A missing file
    /// is created with a fresh keypair.
    pub keypair_path: String,

    /// Top the balance up via airdrop on clusters that serve them.
    pub airdrop: bool,

    /// Balance floor in SOL below which an airdrop is requested.
    pub min_balance_sol: f64,

    /// Airdrop amount in SOL.
    pub airdrop_sol: f64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            keypair_path: "wallet.json".to_string(),
            airdrop: true,
            min_balance_sol: 1.0,
            airdrop_sol: 2.0,
        }
    }
}
