//! Wallet management: keypair loading, generation, and funding.
//!
//! # Security
//! - Secret material comes from an environment variable or a keypair file
//! - Secrets are never logged; only the public key appears in output

use std::path::Path;

use solana_sdk::native_token::sol_to_lamports;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::keypair::{read_keypair_file, write_keypair_file};
use solana_sdk::signer::Signer;

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult};
use crate::config::schema::WalletConfig;

/// Environment variable holding a base58-encoded keypair.
pub const KEYPAIR_ENV_VAR: &str = "SOLMINT_KEYPAIR";

/// Signing identity for every transaction this tool submits.
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Parse a wallet from base58-encoded keypair bytes.
    pub fn from_base58(encoded: &str) -> ChainResult<Self> {
        let bytes = bs58::decode(encoded.trim())
            .into_vec()
            .map_err(|e| ChainError::Wallet(format!("invalid base58 keypair: {}", e)))?;
        let keypair = Keypair::from_bytes(&bytes)
            .map_err(|e| ChainError::Wallet(format!("invalid keypair bytes: {}", e)))?;
        Ok(Self { keypair })
    }

    /// Load the wallet from `SOLMINT_KEYPAIR`.
    pub fn from_env() -> ChainResult<Self> {
        let encoded = std::env::var(KEYPAIR_ENV_VAR).map_err(|_| {
            ChainError::Wallet(format!("environment variable {} not set", KEYPAIR_ENV_VAR))
        })?;
        Self::from_base58(&encoded)
    }

    /// Load the wallet from a solana-cli JSON keypair file.
    pub fn from_file(path: &Path) -> ChainResult<Self> {
        let keypair = read_keypair_file(path).map_err(|e| {
            ChainError::Wallet(format!("cannot read keypair file {}: {}", path.display(), e))
        })?;
        Ok(Self { keypair })
    }

    /// Resolve the signing identity per configuration.
    ///
    /// Precedence: environment variable, then keypair file, then a freshly
    /// generated keypair persisted at the configured path so later runs
    /// reuse the same identity.
    pub fn load(config: &WalletConfig) -> ChainResult<Self> {
        if std::env::var(KEYPAIR_ENV_VAR).is_ok() {
            let wallet = Self::from_env()?;
            tracing::info!(address = %wallet.pubkey(), source = "env", "wallet loaded");
            return Ok(wallet);
        }

        let path = Path::new(&config.keypair_path);
        if path.exists() {
            let wallet = Self::from_file(path)?;
            tracing::info!(address = %wallet.pubkey(), path = %path.display(), "wallet loaded");
            return Ok(wallet);
        }

        let keypair = Keypair::new();
        write_keypair_file(&keypair, path).map_err(|e| {
            ChainError::Wallet(format!(
                "cannot write keypair file {}: {}",
                path.display(),
                e
            ))
        })?;
        let wallet = Self { keypair };
        tracing::warn!(
            address = %wallet.pubkey(),
            path = %path.display(),
            "no wallet found, generated a new keypair"
        );
        Ok(wallet)
    }

    /// The wallet's public key.
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Borrow the keypair for transaction signing.
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    /// Top the wallet up via airdrop when its balance is below the floor.
    ///
    /// No-op on clusters without airdrops or when the balance is sufficient.
    pub async fn ensure_funded(&self, client: &ChainClient, config: &WalletConfig) -> ChainResult<()> {
        if !config.airdrop || !client.cluster().supports_airdrop() {
            return Ok(());
        }

        let floor = sol_to_lamports(config.min_balance_sol);
        let balance = client.balance(&self.pubkey()).await?;
        if balance >= floor {
            return Ok(());
        }

        let amount = sol_to_lamports(config.airdrop_sol);
        tracing::info!(
            address = %self.pubkey(),
            balance_lamports = balance,
            airdrop_lamports = amount,
            "balance below floor, requesting airdrop"
        );
        let signature = client.request_airdrop(&self.pubkey(), amount).await?;
        let balance = client.balance(&self.pubkey()).await?;
        tracing::info!(signature = %signature, balance_lamports = balance, "airdrop landed");
        Ok(())
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.pubkey())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_roundtrip() {
        let keypair = Keypair::new();
        let encoded = keypair.to_base58_string();
        let wallet = Wallet::from_base58(&encoded).unwrap();
        assert_eq!(wallet.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_invalid_base58() {
        let result = Wallet::from_base58("not a keypair");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("keypair"));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("id.json");
        let keypair = Keypair::new();
        write_keypair_file(&keypair, &path).unwrap();

        let wallet = Wallet::from_file(&path).unwrap();
        assert_eq!(wallet.pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_load_generates_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let config = WalletConfig {
            keypair_path: dir.path().join("wallet.json").display().to_string(),
            ..WalletConfig::default()
        };

        let first = Wallet::load(&config).unwrap();
        let second = Wallet::load(&config).unwrap();
        assert_eq!(first.pubkey(), second.pubkey());
    }

    #[test]
    fn test_missing_file() {
        let result = Wallet::from_file(Path::new("/nonexistent/id.json"));
        assert!(result.is_err());
    }
}
