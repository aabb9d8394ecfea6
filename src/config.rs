//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\crate-minder\config.toml
//! - macOS: ~/Library/Application Support/crate-minder/config.toml
//! - Linux: ~/.config/crate-minder/config.toml
//!
//! The config file is human-readable and editable. Every field has a
//! default, so a partial file (or no file at all) is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::catalog::{CatalogSettings, DEFAULT_COUNTRY, feed, itunes, musicbrainz, transport};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider endpoints and request settings
    pub catalog: CatalogConfig,

    /// Cache lifetimes
    pub cache: CacheConfig,
}

/// Provider endpoints and request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// iTunes Search API base URL
    pub itunes_base_url: String,

    /// RSS feed generator base URL
    pub feed_base_url: String,

    /// MusicBrainz web service base URL
    pub musicbrainz_base_url: String,

    /// Default storefront country code
    pub country: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// User-Agent sent to every provider (MusicBrainz requires one)
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            itunes_base_url: itunes::DEFAULT_BASE_URL.to_string(),
            feed_base_url: feed::DEFAULT_BASE_URL.to_string(),
            musicbrainz_base_url: musicbrainz::DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            request_timeout_secs: 10,
            user_agent: transport::USER_AGENT.to_string(),
        }
    }
}

/// Cache lifetimes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Album search TTL (default 5 minutes)
    pub search_ttl_secs: u64,

    /// UPC/artist/artwork lookup TTL (default 30 days)
    pub lookup_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            search_ttl_secs: 5 * 60,
            lookup_ttl_secs: 30 * 24 * 60 * 60,
        }
    }
}

impl Config {
    /// Settings for the catalog client
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            itunes_base_url: self.catalog.itunes_base_url.clone(),
            feed_base_url: self.catalog.feed_base_url.clone(),
            musicbrainz_base_url: self.catalog.musicbrainz_base_url.clone(),
            user_agent: self.catalog.user_agent.clone(),
            request_timeout: Duration::from_secs(self.catalog.request_timeout_secs),
            search_ttl: Duration::from_secs(self.cache.search_ttl_secs),
            lookup_ttl: Duration::from_secs(self.cache.lookup_ttl_secs),
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("crate-minder"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    load_from(&path)
}

/// Load configuration from a specific file, falling back to defaults
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)?;
    Ok(path)
}

/// Save configuration to a specific file
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[catalog]"));
        assert!(toml.contains("[cache]"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[catalog]
country = "GB"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.catalog.country, "GB");
        assert_eq!(config.catalog.itunes_base_url, "https://itunes.apple.com");
        assert_eq!(config.cache.search_ttl_secs, 300);
        assert_eq!(config.cache.lookup_ttl_secs, 2_592_000);
    }

    #[test]
    fn test_catalog_settings_conversion() {
        let mut config = Config::default();
        config.cache.search_ttl_secs = 60;
        config.catalog.request_timeout_secs = 3;

        let settings = config.catalog_settings();
        assert_eq!(settings.search_ttl, Duration::from_secs(60));
        assert_eq!(settings.request_timeout, Duration::from_secs(3));
        assert_eq!(settings.lookup_ttl, Duration::from_secs(2_592_000));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.catalog.country = "JP".to_string();
        config.cache.search_ttl_secs = 120;

        save_to(&config, &path).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());

        let loaded = load_from(&path);
        assert_eq!(loaded.catalog.country, "JP");
        assert_eq!(loaded.cache.search_ttl_secs, 120);
    }

    #[test]
    fn test_load_missing_or_broken_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let missing = load_from(&temp.path().join("missing.toml"));
        assert_eq!(missing.catalog.country, "US");

        let broken = temp.path().join("broken.toml");
        std::fs::write(&broken, "[catalog\ncountry = ").unwrap();
        assert_eq!(load_from(&broken).cache.search_ttl_secs, 300);
    }
}
