//! In-memory storage driver for tests and dry runs.
//!
//! Mirrors the mock driver the upstream JS SDK ships: uploads are recorded
//! instead of sent anywhere, and the returned URIs (or failures) can be
//! scripted per upload.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::storage::types::{StorageError, StorageFile};
use crate::storage::StorageClient;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    uploads: Mutex<Vec<StorageFile>>,
    scripted: Mutex<VecDeque<Result<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-script the URIs returned by successive uploads, in order.
    pub fn with_uris<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let storage = Self::new();
        for uri in uris {
            storage.push_uri(uri);
        }
        storage
    }

    pub fn push_uri(&self, uri: impl Into<String>) {
        self.scripted.lock().unwrap().push_back(Ok(uri.into()));
    }

    /// Script the next upload to fail with the given message.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.scripted.lock().unwrap().push_back(Err(message.into()));
    }

    /// All upload attempts seen so far, in order.
    pub fn uploads(&self) -> Vec<StorageFile> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }
}

#[async_trait]
impl StorageClient for MemoryStorage {
    async fn upload(&self, file: StorageFile) -> Result<String, StorageError> {
        self.uploads.lock().unwrap().push(file);
        match self.scripted.lock().unwrap().pop_front() {
            Some(Ok(uri)) => Ok(uri),
            Some(Err(message)) => Err(StorageError::Api {
                status: 500,
                message,
            }),
            None => Ok(format!("memory://{}", self.upload_count())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_uris_in_order() {
        let storage = MemoryStorage::with_uris(["https://arweave.net/a", "https://arweave.net/b"]);

        let first = storage
            .upload(StorageFile::new("x", "text/plain", vec![1]))
            .await
            .unwrap();
        let second = storage
            .upload(StorageFile::new("y", "text/plain", vec![2]))
            .await
            .unwrap();

        assert_eq!(first, "https://arweave.net/a");
        assert_eq!(second, "https://arweave.net/b");
        assert_eq!(storage.upload_count(), 2);
    }

    #[tokio::test]
    async fn test_scripted_failure() {
        let storage = MemoryStorage::new();
        storage.push_failure("node offline");

        let result = storage
            .upload(StorageFile::new("x", "text/plain", vec![]))
            .await;
        assert!(matches!(result, Err(StorageError::Api { status: 500, .. })));
        // The attempt is still recorded
        assert_eq!(storage.upload_count(), 1);
    }

    #[tokio::test]
    async fn test_unscripted_uploads_get_placeholder_uris() {
        let storage = MemoryStorage::new();
        let uri = storage
            .upload(StorageFile::new("x", "text/plain", vec![]))
            .await
            .unwrap();
        assert_eq!(uri, "memory://1");
    }
}
