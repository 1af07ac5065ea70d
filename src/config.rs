use crate::error::AppError;
use crate::services::carousel::DEFAULT_ROTATION_INTERVAL;
use serde::{Deserialize, Serialize};

const EMBEDDED_CONFIG: &str = include_str!("../assets/config.toml");

/// Application settings, read from `assets/config.toml` at build time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub ipfs: IpfsSettings,
    pub contract: ContractSettings,
    pub session: SessionSettings,
    pub carousel: CarouselSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IpfsSettings {
    /// Empty selects the in-memory store
    pub api_url: String,
    pub gateway_url: String,
    pub project_id: Option<String>,
    pub project_secret: Option<String>,
}

impl Default for IpfsSettings {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            gateway_url: "https://ipfs.infura.io".to_string(),
            project_id: None,
            project_secret: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContractSettings {
    pub account_id: String,
    /// When set, featured events are read through NEAR JSON-RPC
    pub rpc_url: Option<String>,
}

impl Default for ContractSettings {
    fn default() -> Self {
        Self {
            account_id: "nft.future-tickets.testnet".to_string(),
            rpc_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SessionSettings {
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselSettings {
    pub interval_secs: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_ROTATION_INTERVAL.as_secs(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(s)?;
        if config.carousel.interval_secs == 0 {
            return Err(AppError::Config(
                "carousel.interval_secs must be positive".to_string(),
            ));
        }
        Ok(config)
    }

    /// Loads the embedded configuration, falling back to defaults
    pub fn load() -> Self {
        match Self::from_toml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Organizer identity of the signed-in user, if any
    pub fn organizer(&self) -> Option<&str> {
        self.session
            .account_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}
