use crate::models::{AddResponse, MediaFile};

/// Result type for upload operations
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors that can occur while storing media
#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    Transport(String),
    Server(String),
    Decode(String),
    Cancelled,
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::Transport(msg) => write!(f, "Transport error: {}", msg),
            UploadError::Server(msg) => write!(f, "Server error: {}", msg),
            UploadError::Decode(msg) => write!(f, "Decode error: {}", msg),
            UploadError::Cancelled => write!(f, "Upload cancelled"),
        }
    }
}

impl std::error::Error for UploadError {}

/// A content-addressed store: bytes in, hash-derived path out
#[allow(async_fn_in_trait)]
pub trait ContentStore {
    async fn add(&self, file: &MediaFile) -> UploadResult<AddResponse>;
}

/// Builds the public URL of stored content: `<gateway>/ipfs/<path>`
pub fn content_url(gateway_url: &str, path: &str) -> String {
    format!("{}/ipfs/{}", gateway_url.trim_end_matches('/'), path)
}

/// Connection settings for an IPFS HTTP API endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct IpfsConfig {
    /// Base of the HTTP API, e.g. `https://ipfs.infura.io:5001/api/v0`
    pub api_url: String,
    pub project_id: Option<String>,
    pub project_secret: Option<String>,
}

impl Default for IpfsConfig {
    fn default() -> Self {
        Self {
            api_url: "https://ipfs.infura.io:5001/api/v0".to_string(),
            project_id: None,
            project_secret: None,
        }
    }
}

/// IPFS HTTP API client
#[derive(Debug, Clone)]
pub struct IpfsClient {
    config: IpfsConfig,
    http: reqwest::Client,
}

impl IpfsClient {
    pub fn new(config: IpfsConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn add_url(&self) -> String {
        format!("{}/add", self.config.api_url.trim_end_matches('/'))
    }
}

impl ContentStore for IpfsClient {
    async fn add(&self, file: &MediaFile) -> UploadResult<AddResponse> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = reqwest::multipart::Form::new().part("file", part);

        let mut request = self.http.post(self.add_url()).multipart(form);
        if let Some(project_id) = &self.config.project_id {
            request = request.basic_auth(project_id, self.config.project_secret.as_ref());
        }

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(UploadError::Server(format!(
                "Server returned status: {}",
                response.status()
            )));
        }

        let created = response
            .json::<AddResponse>()
            .await
            .map_err(|e| UploadError::Decode(format!("Failed to parse response: {}", e)))?;

        log::debug!("Stored {} as {}", file.name, created.path());
        Ok(created)
    }
}
