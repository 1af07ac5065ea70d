//! # IPFS Upload
//!
//! A reusable content-addressed media upload library.
//!
//! This crate provides:
//! - An IPFS HTTP API client (`/api/v0/add`)
//! - An in-memory content store for offline mode and tests
//! - Per-slot upload tracking (idle, uploading, succeeded, failed)
//! - Sequential multi-file uploads with cooperative cancellation
//!
//! ## Separation of Concerns
//!
//! This crate only stores bytes and derives gateway URLs. It does **not**:
//! - Pick files (handled by the UI layer)
//! - Decide which slot a URL belongs to (handled by the form)
//! - Retry or time out uploads
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use ipfs_upload::{IpfsClient, IpfsConfig, MediaFile, MediaUploadTracker, UploadState};
//!
//! let client = IpfsClient::new(IpfsConfig::default());
//! let tracker = MediaUploadTracker::new(client, "https://ipfs.infura.io");
//!
//! let slot = UploadState::default();
//! let url = tracker
//!     .upload_single(&slot, MediaFile::new("banner.jpg", bytes), |state| {
//!         // publish state to the UI
//!     })
//!     .await?;
//! ```

pub mod memory;
pub mod models;
pub mod service;
pub mod tracker;

pub use memory::MemoryStore;
pub use models::{AddResponse, MediaFile, UploadState, UploadStatus};
pub use service::{content_url, ContentStore, IpfsClient, IpfsConfig, UploadError, UploadResult};
pub use tracker::MediaUploadTracker;
