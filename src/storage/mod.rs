//! Decentralized storage subsystem.
//!
//! # Data Flow
//! ```text
//! local file / serialized JSON
//!     → types.rs (StorageFile: bytes + content type)
//!     → StorageClient::upload (bundlr.rs against a real node,
//!                              memory.rs for tests)
//!     → content-addressed gateway URI
//! ```

use async_trait::async_trait;

pub mod bundlr;
pub mod memory;
pub mod types;

pub use bundlr::BundlrStorage;
pub use memory::MemoryStorage;
pub use types::{StorageError, StorageFile};

/// Upload seam: hand over a file, get back the URI it is served from.
#[async_trait]
pub trait StorageClient: Send + Sync {
    async fn upload(&self, file: StorageFile) -> Result<String, StorageError>;
}
