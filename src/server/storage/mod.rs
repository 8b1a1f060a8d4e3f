//! File storage for uploaded and generated files.
//!
//! Services depend on the `FileStorage` trait so the backing store can be swapped; the
//! only implementation writes to a local directory served statically by the router.

pub mod local;

use async_trait::async_trait;

use crate::server::{error::storage::StorageError, util::id::next_unique_id};

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Writes `bytes` under `key`, replacing any existing file, and returns its public URL.
    async fn save(&self, key: &str, bytes: &[u8], content_type: &str)
        -> Result<String, StorageError>;

    /// Removes the file under `key`. Missing files are not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Public URL for `key`.
    fn url(&self, key: &str) -> String;
}

/// Removes every file in `keys`, logging the ones that could not be deleted.
///
/// Used after the rows pointing at the files are gone, so a failure leaves only an
/// unreferenced file behind.
pub async fn delete_files(storage: &dyn FileStorage, keys: impl IntoIterator<Item = String>) {
    for key in keys {
        if let Err(e) = storage.delete(&key).await {
            tracing::warn!("Failed to delete stored file {}: {}", key, e);
        }
    }
}

/// Builds a unique storage key under `prefix` that keeps a sanitized form of `file_name`.
///
/// Characters outside `[A-Za-z0-9._-]` are replaced with `_` so keys stay path-safe.
pub fn storage_key(prefix: &str, file_name: &str) -> String {
    let sanitized: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let sanitized = sanitized.trim_start_matches('.');
    let sanitized = if sanitized.is_empty() { "file" } else { sanitized };

    format!("{}/{}-{}", prefix, next_unique_id(), sanitized)
}
