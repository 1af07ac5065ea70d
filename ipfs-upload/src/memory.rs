//! In-memory content store
//!
//! Addresses files by the SHA-256 of their bytes. Used when no IPFS endpoint
//! is configured and in tests.

use crate::models::{AddResponse, MediaFile};
use crate::service::{ContentStore, UploadError, UploadResult};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bytes stored under `path`, if any
    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.blobs.lock().ok()?.get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().map(|blobs| blobs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn content_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

impl ContentStore for MemoryStore {
    async fn add(&self, file: &MediaFile) -> UploadResult<AddResponse> {
        let hash = content_hash(&file.bytes);
        self.blobs
            .lock()
            .map_err(|_| UploadError::Server("content store poisoned".to_string()))?
            .insert(hash.clone(), file.bytes.clone());
        Ok(AddResponse {
            name: file.name.clone(),
            hash,
            size: file.bytes.len().to_string(),
        })
    }
}
