//! Token descriptors: pass-through records describing what to mint.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// Royalties are expressed in basis points; 10_000 is 100%.
pub const MAX_SELLER_FEE_BASIS_POINTS: u16 = 10_000;

/// Describes a single NFT to mint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftDescriptor {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub seller_fee_basis_points: u16,
    pub image_file: PathBuf,
}

/// Describes a collection parent NFT: the same fields plus the collection
/// flag and the authority allowed to verify members.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDescriptor {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub seller_fee_basis_points: u16,
    pub image_file: PathBuf,
    pub is_collection: bool,
    pub collection_authority: Pubkey,
}

impl CollectionDescriptor {
    /// View the collection parent as a plain descriptor for upload/creation.
    pub fn as_nft(&self) -> NftDescriptor {
        NftDescriptor {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            description: self.description.clone(),
            seller_fee_basis_points: self.seller_fee_basis_points,
            image_file: self.image_file.clone(),
        }
    }
}
