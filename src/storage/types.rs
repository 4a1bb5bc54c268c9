//! Storage file and error definitions.

use std::path::Path;

use thiserror::Error;

/// A file prepared for upload: raw bytes plus the content type the
/// gateway will serve it back with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageFile {
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl StorageFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Read a file from disk, inferring the content type from its extension.
    pub fn from_path(path: &Path) -> Result<Self, StorageError> {
        let data = std::fs::read(path).map_err(|source| StorageError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let content_type = content_type_for(path).to_string();
        Ok(Self {
            name,
            content_type,
            data,
        })
    }

    /// Wrap serialized JSON as an uploadable document.
    pub fn json(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self::new(name, "application/json", data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

/// Errors that can occur talking to the storage node.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Local file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// HTTP transport failure (includes client-side timeouts).
    #[error("storage request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered with a non-success status.
    #[error("storage node returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A configured endpoint URL did not parse.
    #[error("invalid storage endpoint '{0}'")]
    InvalidEndpoint(String),
}
