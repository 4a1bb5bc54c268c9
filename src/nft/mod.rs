//! NFT operations.
//!
//! # Data Flow
//! ```text
//! NftDescriptor (name, symbol, royalty, image path)
//!     → metadata.rs (image upload → JSON document upload → URI)
//!     → mint.rs (CreateV1 + MintV1 in one finalized transaction)
//!     → update.rs (UpdateV1 repointing an existing token's URI)
//! ```
//! Every operation is a one-shot request; failures propagate to the caller
//! with no partial-state cleanup (submitted transactions are irreversible).

use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::chain::ChainError;
use crate::storage::StorageError;

pub mod descriptor;
pub mod metadata;
pub mod mint;
pub mod update;

pub use descriptor::{CollectionDescriptor, NftDescriptor};
pub use metadata::{upload_metadata, MetadataDocument};
pub use mint::{create_collection_nft, create_nft, create_nft_in_collection, MintedNft};
pub use update::{update_nft_uri, UpdatedNft};

/// Errors from NFT operations.
#[derive(Debug, Error)]
pub enum NftError {
    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("metadata serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Royalty above 100%.
    #[error("seller fee {0} exceeds 10000 basis points")]
    InvalidRoyalty(u16),

    /// The wallet is not the authority a descriptor names.
    #[error("collection authority {authority} does not match wallet {wallet}")]
    AuthorityMismatch { authority: Pubkey, wallet: Pubkey },
}
