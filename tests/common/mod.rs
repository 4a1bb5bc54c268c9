//! Shared fixtures for integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use solmint::nft::NftDescriptor;

/// Write a small PNG-tagged fixture file and return its path.
pub fn write_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"\x89PNG\r\n\x1a\nfixture").unwrap();
    path
}

/// The descriptor from the canonical minting scenario.
pub fn sample_descriptor(image_file: PathBuf) -> NftDescriptor {
    NftDescriptor {
        name: "My NFT".to_string(),
        symbol: "Gakydo".to_string(),
        description: "This is my nft.".to_string(),
        seller_fee_basis_points: 0,
        image_file,
    }
}
