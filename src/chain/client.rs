//! Solana RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a cluster RPC endpoint at finalized commitment
//! - Query chain state (balance, blockhash, accounts)
//! - Submit transactions and wait for confirmation
//! - Handle timeouts and network errors gracefully

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use solana_client::client_error::Result as ClientResult;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tokio::time::{interval, timeout};

use crate::chain::types::{ChainError, ChainResult, Cluster, RpcConfig};

/// RPC client wrapper pinned to a single cluster.
///
/// All submissions use finalized commitment, the strongest level the RPC
/// offers, so a returned signature refers to an irreversible transaction.
#[derive(Clone)]
pub struct ChainClient {
    rpc: Arc<RpcClient>,
    cluster: Cluster,
    config: RpcConfig,
    timeout_duration: Duration,
}

impl ChainClient {
    /// Connect to the configured cluster.
    ///
    /// Initialization succeeds even if the endpoint is unreachable; the
    /// first real operation surfaces the failure. A health probe result is
    /// logged either way.
    pub async fn new(config: RpcConfig) -> ChainResult<Self> {
        let cluster: Cluster = config.cluster.parse()?;
        let url = config.url.clone().unwrap_or_else(|| cluster.rpc_url());

        let rpc = RpcClient::new_with_commitment(url.clone(), CommitmentConfig::finalized());

        let client = Self {
            rpc: Arc::new(rpc),
            cluster,
            timeout_duration: Duration::from_secs(config.timeout_secs),
            config,
        };

        if client.is_healthy().await {
            tracing::info!(url = %url, cluster = %client.cluster, "RPC client initialized");
        } else {
            tracing::warn!(
                url = %url,
                cluster = %client.cluster,
                "RPC client initialized but endpoint health probe failed"
            );
        }

        Ok(client)
    }

    /// Wrap an RPC future with the configured timeout.
    async fn rpc_call<T, F>(&self, what: &str, fut: F) -> ChainResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("{}: {}", what, e))),
            Err(_) => Err(ChainError::Timeout(self.config.timeout_secs)),
        }
    }

    /// Get the balance of an address in lamports.
    pub async fn balance(&self, address: &Pubkey) -> ChainResult<u64> {
        self.rpc_call("get_balance", self.rpc.get_balance(address))
            .await
    }

    /// Get a recent blockhash for transaction assembly.
    pub async fn latest_blockhash(&self) -> ChainResult<Hash> {
        self.rpc_call("get_latest_blockhash", self.rpc.get_latest_blockhash())
            .await
    }

    /// Fetch an account, erroring if it does not exist.
    pub async fn account(&self, address: &Pubkey) -> ChainResult<Account> {
        let response = self
            .rpc_call(
                "get_account",
                self.rpc
                    .get_account_with_commitment(address, self.rpc.commitment()),
            )
            .await?;
        response.value.ok_or(ChainError::AccountNotFound(*address))
    }

    /// Submit a signed transaction and wait for finalized confirmation.
    pub async fn send_and_confirm(&self, transaction: &Transaction) -> ChainResult<Signature> {
        let confirm_timeout = Duration::from_secs(self.config.confirm_timeout_secs);
        match timeout(
            confirm_timeout,
            self.rpc.send_and_confirm_transaction(transaction),
        )
        .await
        {
            Ok(Ok(signature)) => Ok(signature),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("send_and_confirm: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.config.confirm_timeout_secs)),
        }
    }

    /// Request an airdrop and wait for the funds to land.
    pub async fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> ChainResult<Signature> {
        if !self.cluster.supports_airdrop() {
            return Err(ChainError::AirdropUnavailable(self.cluster.clone()));
        }

        let signature = self
            .rpc_call(
                "request_airdrop",
                self.rpc.request_airdrop(address, lamports),
            )
            .await?;
        self.wait_for_signature(&signature).await?;
        Ok(signature)
    }

    /// Poll until a signature reaches the client commitment level.
    pub async fn wait_for_signature(&self, signature: &Signature) -> ChainResult<()> {
        let confirm_timeout = Duration::from_secs(self.config.confirm_timeout_secs);
        let poll_interval = Duration::from_secs(2);

        let result = timeout(confirm_timeout, async {
            let mut ticker = interval(poll_interval);
            loop {
                ticker.tick().await;
                match self.rpc.confirm_transaction(signature).await {
                    Ok(true) => return Ok(()),
                    Ok(false) => {
                        tracing::debug!(signature = %signature, "transaction pending");
                    }
                    Err(e) => {
                        tracing::debug!(signature = %signature, error = %e, "confirmation query failed");
                    }
                }
            }
        })
        .await;

        match result {
            Ok(inner) => inner,
            Err(_) => Err(ChainError::Unconfirmed(*signature)),
        }
    }

    /// Check if the RPC endpoint is reachable and healthy.
    pub async fn is_healthy(&self) -> bool {
        matches!(
            timeout(self.timeout_duration, self.rpc.get_health()).await,
            Ok(Ok(()))
        )
    }

    /// The cluster this client is connected to.
    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Get the configuration.
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("cluster", &self.cluster)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish()
    }
}
