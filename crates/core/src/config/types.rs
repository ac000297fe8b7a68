use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::catalog::{ImageConfig, TmdbConfig};

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Movie catalog (TMDB) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// TMDB API key
    pub api_key: String,
    /// API base URL (default: https://api.themoviedb.org/3)
    #[serde(default)]
    pub base_url: Option<String>,
    /// Poster image base URL (default: https://image.tmdb.org/t/p/w500)
    #[serde(default)]
    pub image_base_url: Option<String>,
    /// Cover shown for movies without a poster
    #[serde(default)]
    pub fallback_poster_url: Option<String>,
    /// Language for curated lists and recommendations
    #[serde(default = "default_language")]
    pub language: String,
    /// Request timeout in seconds (default: none)
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_language() -> String {
    "en-US".to_string()
}

impl CatalogConfig {
    /// Client settings for the TMDB backend.
    pub fn tmdb(&self) -> TmdbConfig {
        TmdbConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            language: Some(self.language.clone()),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Poster URL settings, defaults filled in.
    pub fn images(&self) -> ImageConfig {
        let defaults = ImageConfig::default();
        ImageConfig {
            base_url: self.image_base_url.clone().unwrap_or(defaults.base_url),
            fallback_url: self
                .fallback_poster_url
                .clone()
                .unwrap_or(defaults.fallback_url),
        }
    }
}

/// Available storage backends
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    /// Nothing persists across restarts
    Memory,
}

/// Persisted state configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("reelscout.db")
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub catalog: SanitizedCatalogConfig,
    pub storage: StorageConfig,
    pub server: ServerConfig,
}

/// Sanitized catalog config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub api_key_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub images: ImageConfig,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            catalog: SanitizedCatalogConfig {
                api_key_configured: !config.catalog.api_key.is_empty(),
                base_url: config.catalog.base_url.clone(),
                images: config.catalog.images(),
                language: config.catalog.language.clone(),
                timeout_secs: config.catalog.timeout_secs,
            },
            storage: config.storage.clone(),
            server: config.server.clone(),
        }
    }
}
