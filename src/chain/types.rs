//! Cluster definitions and error types for chain operations.

use std::fmt;
use std::str::FromStr;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use thiserror::Error;

// Re-export RpcConfig from the config module to avoid duplication
pub use crate::config::schema::RpcConfig;

/// A Solana cluster, either well-known or a custom RPC endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cluster {
    Devnet,
    Testnet,
    MainnetBeta,
    Custom(String),
}

impl Cluster {
    /// Public RPC endpoint for this cluster.
    pub fn rpc_url(&self) -> String {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com".to_string(),
            Cluster::Testnet => "https://api.testnet.solana.com".to_string(),
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com".to_string(),
            Cluster::Custom(url) => url.clone(),
        }
    }

    /// Query-string suffix selecting this cluster on explorer.solana.com.
    ///
    /// Mainnet is the explorer default and needs no suffix. Custom endpoints
    /// are labelled as such so links stay inspectable.
    pub fn explorer_suffix(&self) -> &'static str {
        match self {
            Cluster::Devnet => "?cluster=devnet",
            Cluster::Testnet => "?cluster=testnet",
            Cluster::MainnetBeta => "",
            Cluster::Custom(_) => "?cluster=custom",
        }
    }

    /// Explorer URL for an on-chain address.
    pub fn explorer_address(&self, address: &Pubkey) -> String {
        format!(
            "https://explorer.solana.com/address/{}{}",
            address,
            self.explorer_suffix()
        )
    }

    /// Explorer URL for a transaction signature.
    pub fn explorer_tx(&self, signature: &Signature) -> String {
        format!(
            "https://explorer.solana.com/tx/{}{}",
            signature,
            self.explorer_suffix()
        )
    }

    /// Whether this cluster serves airdrops.
    pub fn supports_airdrop(&self) -> bool {
        !matches!(self, Cluster::MainnetBeta)
    }
}

impl FromStr for Cluster {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            other if other.starts_with("http://") || other.starts_with("https://") => {
                Ok(Cluster::Custom(other.to_string()))
            }
            other => Err(ChainError::InvalidCluster(other.to_string())),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cluster::Devnet => write!(f, "devnet"),
            Cluster::Testnet => write!(f, "testnet"),
            Cluster::MainnetBeta => write!(f, "mainnet-beta"),
            Cluster::Custom(url) => write!(f, "{}", url),
        }
    }
}

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Transaction was submitted but never reached the requested commitment.
    #[error("transaction {0} not confirmed")]
    Unconfirmed(Signature),

    /// Invalid keypair material or signing failure.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Account lookup returned nothing.
    #[error("account {0} not found")]
    AccountNotFound(Pubkey),

    /// On-chain account data did not deserialize as expected.
    #[error("account {address} holds malformed data: {message}")]
    MalformedAccount { address: Pubkey, message: String },

    /// A pubkey argument failed to parse.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    /// Unknown cluster name in configuration.
    #[error("unknown cluster '{0}' (expected devnet, testnet, mainnet-beta, or a URL)")]
    InvalidCluster(String),

    /// Airdrop requested on a cluster that does not serve them.
    #[error("cluster {0} does not serve airdrops")]
    AirdropUnavailable(Cluster),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_parse() {
        assert_eq!("devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!(
            "mainnet".parse::<Cluster>().unwrap(),
            Cluster::MainnetBeta
        );
        assert_eq!(
            "https://rpc.example.com".parse::<Cluster>().unwrap(),
            Cluster::Custom("https://rpc.example.com".to_string())
        );
        assert!("nonsense".parse::<Cluster>().is_err());
    }

    #[test]
    fn test_explorer_urls() {
        let address = Pubkey::new_unique();
        let url = Cluster::Devnet.explorer_address(&address);
        assert!(url.starts_with("https://explorer.solana.com/address/"));
        assert!(url.ends_with("?cluster=devnet"));

        let url = Cluster::MainnetBeta.explorer_address(&address);
        assert!(!url.contains('?'));
    }

    #[test]
    fn test_error_display() {
        let err = ChainError::Timeout(30);
        assert_eq!(err.to_string(), "RPC timeout after 30 seconds");

        let err = ChainError::InvalidCluster("nope".to_string());
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_airdrop_support() {
        assert!(Cluster::Devnet.supports_airdrop());
        assert!(!Cluster::MainnetBeta.supports_airdrop());
    }
}
