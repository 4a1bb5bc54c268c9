//! HTTP client for a Bundlr-style storage node.
//!
//! # Responsibilities
//! - Post file bytes to the node's transaction endpoint
//! - Translate the returned receipt id into a gateway URI
//! - Query upload pricing
//!
//! Bundle assembly, funding negotiation, and replication are the node's
//! job; this client only speaks its HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

use crate::config::schema::StorageConfig;
use crate::storage::types::{StorageError, StorageFile};
use crate::storage::StorageClient;

/// Currency identifier in the node's REST paths; uploads are paid for and
/// signed in SOL terms upstream.
const CURRENCY: &str = "solana";

#[derive(Debug, Deserialize)]
struct UploadReceipt {
    id: String,
}

/// Storage client for a single node + gateway pair.
#[derive(Debug, Clone)]
pub struct BundlrStorage {
    http: reqwest::Client,
    node: Url,
    gateway: Url,
}

impl BundlrStorage {
    /// Build a client with the configured endpoints and request timeout.
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        let node = Url::parse(&config.address)
            .map_err(|_| StorageError::InvalidEndpoint(config.address.clone()))?;
        let gateway = Url::parse(&config.gateway)
            .map_err(|_| StorageError::InvalidEndpoint(config.gateway.clone()))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        tracing::debug!(node = %node, gateway = %gateway, timeout_ms = config.timeout_ms, "storage client ready");
        Ok(Self {
            http,
            node,
            gateway,
        })
    }

    /// Quote the upload price for a payload of the given size, in the
    /// node's atomic currency unit.
    pub async fn price(&self, bytes: usize) -> Result<u64, StorageError> {
        let url = self.endpoint(&format!("price/{}/{}", CURRENCY, bytes))?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let body = response.text().await?;
        body.trim().parse().map_err(|_| StorageError::Api {
            status: status.as_u16(),
            message: format!("unparseable price '{}'", body),
        })
    }

    /// Gateway URI for an uploaded receipt id.
    pub fn gateway_uri(&self, id: &str) -> String {
        format!("{}/{}", self.gateway.as_str().trim_end_matches('/'), id)
    }

    fn endpoint(&self, path: &str) -> Result<Url, StorageError> {
        self.node
            .join(path)
            .map_err(|_| StorageError::InvalidEndpoint(format!("{}{}", self.node, path)))
    }
}

#[async_trait]
impl StorageClient for BundlrStorage {
    async fn upload(&self, file: StorageFile) -> Result<String, StorageError> {
        let url = self.endpoint(&format!("tx/{}", CURRENCY))?;

        tracing::debug!(name = %file.name, bytes = file.len(), "uploading to storage node");
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, file.content_type.as_str())
            .body(file.data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let receipt: UploadReceipt = response.json().await?;
        let uri = self.gateway_uri(&receipt.id);
        tracing::debug!(name = %file.name, uri = %uri, "upload accepted");
        Ok(uri)
    }
}
