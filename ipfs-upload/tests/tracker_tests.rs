//! Integration tests for sequential multi-file uploads.
//!
//! Verifies ordering and the lossy omission of failed files.

use ipfs_upload::{
    AddResponse, ContentStore, MediaFile, MediaUploadTracker, UploadError, UploadResult,
    UploadState, UploadStatus,
};
use std::sync::Mutex;

/// Store that rejects files whose name starts with `bad`, recording call order.
#[derive(Default)]
struct FlakyStore {
    calls: Mutex<Vec<String>>,
}

impl ContentStore for FlakyStore {
    async fn add(&self, file: &MediaFile) -> UploadResult<AddResponse> {
        self.calls.lock().unwrap().push(file.name.clone());
        if file.name.starts_with("bad") {
            return Err(UploadError::Transport("connection reset".to_string()));
        }
        Ok(AddResponse {
            name: file.name.clone(),
            hash: format!("Qm{}", file.name),
            size: file.bytes.len().to_string(),
        })
    }
}

fn files(names: &[&str]) -> Vec<MediaFile> {
    names
        .iter()
        .map(|name| MediaFile::new(*name, vec![0u8; 4]))
        .collect()
}

/// Three files where the second fails: two URLs remain, for files 1 and 3, in order.
#[tokio::test]
async fn partial_failure_omits_failed_slot() {
    let tracker = MediaUploadTracker::new(FlakyStore::default(), "https://ipfs.infura.io");
    let mut last = UploadState::default();

    let urls = tracker
        .upload_many(
            &UploadState::default(),
            files(&["vip.jpg", "bad.jpg", "general.jpg"]),
            |s| last = s,
        )
        .await;

    assert_eq!(
        urls,
        vec![
            "https://ipfs.infura.io/ipfs/Qmvip.jpg".to_string(),
            "https://ipfs.infura.io/ipfs/Qmgeneral.jpg".to_string(),
        ]
    );
    assert_eq!(last.status, UploadStatus::Succeeded);
    assert_eq!(last.urls, urls);
    assert_eq!(last.error_message.as_deref(), Some("1 of 3 uploads failed"));
}

/// Files are sent one at a time in input order.
#[tokio::test]
async fn uploads_run_in_input_order() {
    let tracker = MediaUploadTracker::new(FlakyStore::default(), "https://gw");

    tracker
        .upload_many(&UploadState::default(), files(&["a", "bad-b", "c"]), |_| {})
        .await;

    let calls = tracker.store().calls.lock().unwrap().clone();
    assert_eq!(calls, vec!["a", "bad-b", "c"]);
}

/// When every file fails the slot is marked failed.
#[tokio::test]
async fn all_failures_mark_slot_failed() {
    let tracker = MediaUploadTracker::new(FlakyStore::default(), "https://gw");
    let mut last = UploadState::default();

    let urls = tracker
        .upload_many(&UploadState::default(), files(&["bad1", "bad2"]), |s| last = s)
        .await;

    assert!(urls.is_empty());
    assert_eq!(last.status, UploadStatus::Failed);
    assert!(last.error_message.is_some());
}

/// A failed single upload leaves the previous banner URL in place.
#[tokio::test]
async fn failed_single_upload_keeps_previous_url() {
    let tracker = MediaUploadTracker::new(FlakyStore::default(), "https://gw");
    let previous = UploadState::succeed(vec!["https://gw/ipfs/Qmold".to_string()], None);
    let mut last = UploadState::default();

    let result = tracker
        .upload_single(&previous, MediaFile::new("bad.jpg", vec![1]), |s| last = s)
        .await;

    assert!(result.is_err());
    assert_eq!(last.status, UploadStatus::Failed);
    assert_eq!(last.first_url(), Some("https://gw/ipfs/Qmold"));
}
