//! Per-slot upload tracking
//!
//! A tracker wraps a [`ContentStore`] and reports every state transition of a
//! slot through a `publish` callback, so the owning form can mirror the state
//! into whatever reactive container it uses. Uploads are never retried and
//! carry no timeout.

use crate::models::{MediaFile, UploadState};
use crate::service::{content_url, ContentStore, UploadError, UploadResult};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct MediaUploadTracker<S> {
    store: Arc<S>,
    gateway_url: String,
}

impl<S> Clone for MediaUploadTracker<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            gateway_url: self.gateway_url.clone(),
        }
    }
}

impl<S: ContentStore> MediaUploadTracker<S> {
    pub fn new(store: S, gateway_url: impl Into<String>) -> Self {
        Self {
            store: Arc::new(store),
            gateway_url: gateway_url.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn store_one(&self, file: &MediaFile) -> UploadResult<String> {
        let created = self.store.add(file).await?;
        Ok(content_url(&self.gateway_url, created.path()))
    }

    /// Uploads one file into a single-URL slot
    ///
    /// On failure the slot keeps whatever URL it held before.
    pub async fn upload_single(
        &self,
        slot: &UploadState,
        file: MediaFile,
        mut publish: impl FnMut(UploadState),
    ) -> UploadResult<String> {
        let uploading = slot.begin();
        publish(uploading.clone());

        match self.store_one(&file).await {
            Ok(url) => {
                log::info!("Uploaded {} to {}", file.name, url);
                publish(UploadState::succeed(vec![url.clone()], None));
                Ok(url)
            }
            Err(e) => {
                log::error!("Upload of {} failed: {}", file.name, e);
                publish(uploading.fail(e.to_string()));
                Err(e)
            }
        }
    }

    /// Uploads files one after another in input order
    ///
    /// A failed file is logged and left out of the result, so the returned
    /// list may be shorter than `files` and loses positional correspondence.
    pub async fn upload_many(
        &self,
        slot: &UploadState,
        files: Vec<MediaFile>,
        publish: impl FnMut(UploadState),
    ) -> Vec<String> {
        let never = CancellationToken::new();
        // An uncancelled token cannot yield Err(Cancelled)
        self.upload_many_until(slot, files, &never, publish)
            .await
            .unwrap_or_default()
    }

    /// Same as [`upload_many`](Self::upload_many), stopping once `cancel` fires
    ///
    /// A cancelled batch publishes a failed state and keeps the slot's
    /// previous URLs.
    pub async fn upload_many_until(
        &self,
        slot: &UploadState,
        files: Vec<MediaFile>,
        cancel: &CancellationToken,
        mut publish: impl FnMut(UploadState),
    ) -> UploadResult<Vec<String>> {
        let uploading = slot.begin();
        publish(uploading.clone());

        let total = files.len();
        let mut urls = Vec::with_capacity(total);
        let mut last_error = None;

        for (position, file) in files.iter().enumerate() {
            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                result = self.store_one(file) => Some(result),
            };

            match outcome {
                None => {
                    log::warn!(
                        "Upload batch cancelled after {} of {} files",
                        position,
                        total
                    );
                    publish(uploading.fail(UploadError::Cancelled.to_string()));
                    return Err(UploadError::Cancelled);
                }
                Some(Ok(url)) => {
                    log::debug!("Uploaded {} ({}/{})", file.name, position + 1, total);
                    urls.push(url);
                }
                Some(Err(e)) => {
                    log::warn!("Skipping {} after failed upload: {}", file.name, e);
                    last_error = Some(e);
                }
            }
        }

        let failed = total - urls.len();
        match last_error {
            Some(e) if urls.is_empty() => {
                publish(uploading.fail(e.to_string()));
            }
            Some(_) => {
                let summary = format!("{} of {} uploads failed", failed, total);
                publish(UploadState::succeed(urls.clone(), Some(summary)));
            }
            None => {
                publish(UploadState::succeed(urls.clone(), None));
            }
        }

        log::info!("Uploaded {} of {} files", urls.len(), total);
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::UploadStatus;

    #[tokio::test]
    async fn test_upload_single_publishes_transitions() {
        let tracker = MediaUploadTracker::new(MemoryStore::new(), "https://gw.example");
        let mut states = Vec::new();

        let url = tracker
            .upload_single(
                &UploadState::default(),
                MediaFile::new("banner.jpg", vec![7; 16]),
                |s| states.push(s),
            )
            .await
            .unwrap();

        assert!(url.starts_with("https://gw.example/ipfs/"));
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].status, UploadStatus::Uploading);
        assert_eq!(states[1].status, UploadStatus::Succeeded);
        assert_eq!(states[1].urls, vec![url]);
    }

    #[tokio::test]
    async fn test_upload_many_empty_input() {
        let tracker = MediaUploadTracker::new(MemoryStore::new(), "https://gw.example");
        let mut last = UploadState::default();

        let urls = tracker
            .upload_many(&UploadState::default(), Vec::new(), |s| last = s)
            .await;

        assert!(urls.is_empty());
        assert_eq!(last.status, UploadStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_cancelled_batch_keeps_previous_urls() {
        let tracker = MediaUploadTracker::new(MemoryStore::new(), "https://gw.example");
        let previous = UploadState::succeed(vec!["https://gw.example/ipfs/old".to_string()], None);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut last = UploadState::default();

        let result = tracker
            .upload_many_until(
                &previous,
                vec![MediaFile::new("a.jpg", vec![1])],
                &cancel,
                |s| last = s,
            )
            .await;

        assert_eq!(result, Err(UploadError::Cancelled));
        assert_eq!(last.status, UploadStatus::Failed);
        assert_eq!(last.urls, previous.urls);
        assert!(tracker.store().is_empty());
    }
}
