//! Off-chain metadata document assembly and upload.

use serde::{Deserialize, Serialize};

use crate::nft::descriptor::NftDescriptor;
use crate::nft::NftError;
use crate::storage::{StorageClient, StorageFile};

/// The JSON document a token's on-chain URI points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
}

impl MetadataDocument {
    /// Build the document for a descriptor with its uploaded image URI.
    pub fn for_nft(descriptor: &NftDescriptor, image_uri: String) -> Self {
        Self {
            name: descriptor.name.clone(),
            symbol: descriptor.symbol.clone(),
            description: descriptor.description.clone(),
            image: image_uri,
        }
    }
}

/// Upload a descriptor's image and metadata document, returning the
/// document URI to mint against.
///
/// Exactly two uploads happen: the image, then the JSON document embedding
/// the image URI. A failure at any point aborts the operation; an already
/// uploaded image is not cleaned up (content-addressed storage has nothing
/// to roll back).
pub async fn upload_metadata(
    storage: &dyn StorageClient,
    descriptor: &NftDescriptor,
) -> Result<String, NftError> {
    let image = StorageFile::from_path(&descriptor.image_file)?;
    let image_uri = storage.upload(image).await?;
    tracing::info!(image_uri = %image_uri, "image uploaded");

    let document = MetadataDocument::for_nft(descriptor, image_uri);
    let bytes = serde_json::to_vec(&document)?;
    let uri = storage
        .upload(StorageFile::json("metadata.json", bytes))
        .await?;
    tracing::info!(metadata_uri = %uri, "metadata uploaded");

    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::io::Write;
    use std::path::PathBuf;

    fn descriptor_with_image(dir: &std::path::Path) -> NftDescriptor {
        let image_path = dir.join("image.png");
        std::fs::File::create(&image_path)
            .unwrap()
            .write_all(b"\x89PNGdata")
            .unwrap();
        NftDescriptor {
            name: "My NFT".to_string(),
            symbol: "Gakydo".to_string(),
            description: "This is my nft.".to_string(),
            seller_fee_basis_points: 0,
            image_file: image_path,
        }
    }

    #[tokio::test]
    async fn test_two_uploads_with_embedded_image_uri() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = descriptor_with_image(dir.path());
        let storage = MemoryStorage::with_uris([
            "https://arweave.net/image",
            "https://arweave.net/doc",
        ]);

        let uri = upload_metadata(&storage, &descriptor).await.unwrap();
        assert_eq!(uri, "https://arweave.net/doc");

        let uploads = storage.uploads();
        assert_eq!(uploads.len(), 2);
        assert_eq!(uploads[0].content_type, "image/png");
        assert_eq!(uploads[0].data, b"\x89PNGdata");

        let document: MetadataDocument = serde_json::from_slice(&uploads[1].data).unwrap();
        assert_eq!(document.image, "https://arweave.net/image");
        assert_eq!(document.name, "My NFT");
        assert_eq!(document.symbol, "Gakydo");
    }

    #[tokio::test]
    async fn test_image_upload_failure_stops_everything() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = descriptor_with_image(dir.path());
        let storage = MemoryStorage::new();
        storage.push_failure("node offline");

        let result = upload_metadata(&storage, &descriptor).await;
        assert!(result.is_err());
        // No metadata upload is attempted after the image upload fails
        assert_eq!(storage.upload_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_image_file() {
        let descriptor = NftDescriptor {
            name: "x".to_string(),
            symbol: "X".to_string(),
            description: String::new(),
            seller_fee_basis_points: 0,
            image_file: PathBuf::from("/nonexistent/image.png"),
        };
        let storage = MemoryStorage::new();

        let result = upload_metadata(&storage, &descriptor).await;
        assert!(result.is_err());
        assert_eq!(storage.upload_count(), 0);
    }
}
