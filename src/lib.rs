//! Solana NFT Minting Tool Library

pub mod chain;
pub mod config;
pub mod nft;
pub mod storage;

pub use chain::{ChainClient, Cluster, Wallet};
pub use config::MinterConfig;
pub use nft::{CollectionDescriptor, NftDescriptor};
pub use storage::StorageClient;
