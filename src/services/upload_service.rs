use crate::config::IpfsSettings;
use ipfs_upload::{
    AddResponse, ContentStore, IpfsClient, IpfsConfig, MediaFile, MediaUploadTracker, MemoryStore,
    UploadResult,
};

/// Content store selected by configuration
#[derive(Debug, Clone)]
pub enum MediaStore {
    Ipfs(IpfsClient),
    Memory(MemoryStore),
}

impl ContentStore for MediaStore {
    async fn add(&self, file: &MediaFile) -> UploadResult<AddResponse> {
        match self {
            MediaStore::Ipfs(client) => client.add(file).await,
            MediaStore::Memory(store) => store.add(file).await,
        }
    }
}

pub type AppUploadTracker = MediaUploadTracker<MediaStore>;

/// Builds the upload tracker; an empty API URL keeps media in memory
pub fn tracker_from_settings(settings: &IpfsSettings) -> AppUploadTracker {
    let store = if settings.api_url.trim().is_empty() {
        log::info!("No IPFS endpoint configured, keeping uploads in memory");
        MediaStore::Memory(MemoryStore::new())
    } else {
        MediaStore::Ipfs(IpfsClient::new(IpfsConfig {
            api_url: settings.api_url.clone(),
            project_id: settings.project_id.clone(),
            project_secret: settings.project_secret.clone(),
        }))
    };
    MediaUploadTracker::new(store, settings.gateway_url.clone())
}
