//! Chain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Config / environment (cluster, keypair)
//!     → wallet.rs (key loading, funding)
//!     → client.rs (RPC connection with timeouts)
//!     → transaction.rs (assemble, sign, submit, confirm)
//! ```
//!
//! # Security Constraints
//! - Keypair material only from environment variable or keypair file
//! - Never log secrets
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use types::{ChainError, ChainResult, Cluster};
pub use wallet::Wallet;
