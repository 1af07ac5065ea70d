use serde::{Deserialize, Serialize};

/// A file picked by the user, read fully into memory
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Response from the IPFS `add` endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddResponse {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Hash")]
    pub hash: String,
    #[serde(rename = "Size", default)]
    pub size: String,
}

impl AddResponse {
    /// Content path used to address the stored file
    pub fn path(&self) -> &str {
        &self.hash
    }
}

/// Status of a single media slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

/// Upload state of one media slot of a form
///
/// Single-upload slots hold at most one URL, multi-upload slots hold one URL
/// per successfully stored file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadState {
    pub status: UploadStatus,
    pub urls: Vec<String>,
    pub error_message: Option<String>,
}

impl UploadState {
    /// Marks the slot as uploading, keeping previous URLs
    pub fn begin(&self) -> Self {
        Self {
            status: UploadStatus::Uploading,
            urls: self.urls.clone(),
            error_message: None,
        }
    }

    pub fn succeed(urls: Vec<String>, error_message: Option<String>) -> Self {
        Self {
            status: UploadStatus::Succeeded,
            urls,
            error_message,
        }
    }

    /// Marks the slot as failed; previous URLs stay untouched
    pub fn fail(&self, message: String) -> Self {
        Self {
            status: UploadStatus::Failed,
            urls: self.urls.clone(),
            error_message: Some(message),
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    pub fn first_url(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }
}
