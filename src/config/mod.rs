//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/region-dash/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Series generation
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Region data source
    #[serde(default)]
    pub data: DataConfig,

    /// Map presentation defaults
    #[serde(default)]
    pub map: MapConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// URL generation settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// Series generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Days per series
    #[serde(default = "default_days")]
    pub days: usize,

    /// RNG seed; unset means a fresh series on every start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Default output format for `show`
    #[serde(default = "default_format")]
    pub format: String,
}

/// Region data source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    /// GeoJSON FeatureCollection of named polygons; unset uses bundled regions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<PathBuf>,
}

/// Map presentation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Title of the nationwide dashboard
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    #[serde(default = "default_center_lng")]
    pub center_lng: f64,

    /// Overview map zoom
    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Detail mini-map zoom
    #[serde(default = "default_detail_zoom")]
    pub detail_zoom: u8,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default URL provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// URL provider templates
    #[serde(default = "default_url_providers")]
    pub providers: HashMap<String, String>,
}

// Default value functions for serde
fn default_days() -> usize {
    DEFAULT_DAYS
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_center_lat() -> f64 {
    DEFAULT_CENTER_LAT
}
fn default_center_lng() -> f64 {
    DEFAULT_CENTER_LNG
}
fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}
fn default_detail_zoom() -> u8 {
    DEFAULT_DETAIL_ZOOM
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> HashMap<String, String> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        "https://www.google.com/maps/@{lat},{lng},{zoom}z".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/#map={zoom}/{lat}/{lng}".to_string(),
    );
    providers.insert(
        "apple".to_string(),
        "https://maps.apple.com/?ll={lat},{lng}&z={zoom}".to_string(),
    );
    providers
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            seed: None,
            format: default_format(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            detail_zoom: default_detail_zoom(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid value for {}: {}", key, value)))
}

/// Empty or "none" clears an optional setting
fn is_unset(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("none")
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Unset optional values read as an empty string
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["generation", "days"] => Some(self.generation.days.to_string()),
            ["generation", "seed"] => Some(
                self.generation
                    .seed
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            ),
            ["generation", "format"] => Some(self.generation.format.clone()),

            ["data", "regions"] => Some(
                self.data
                    .regions
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),

            ["map", "title"] => Some(self.map.title.clone()),
            ["map", "center_lat"] => Some(self.map.center_lat.to_string()),
            ["map", "center_lng"] => Some(self.map.center_lng.to_string()),
            ["map", "zoom"] => Some(self.map.zoom.to_string()),
            ["map", "detail_zoom"] => Some(self.map.detail_zoom.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["url", "default"] => Some(self.url.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["generation", "days"] => self.generation.days = parse_value(key, value)?,
            ["generation", "seed"] => {
                self.generation.seed = if is_unset(value) {
                    None
                } else {
                    Some(parse_value(key, value)?)
                };
            }
            ["generation", "format"] => self.generation.format = value.to_string(),

            ["data", "regions"] => {
                self.data.regions = if is_unset(value) {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }

            ["map", "title"] => self.map.title = value.to_string(),
            ["map", "center_lat"] => self.map.center_lat = parse_value(key, value)?,
            ["map", "center_lng"] => self.map.center_lng = parse_value(key, value)?,
            ["map", "zoom"] => self.map.zoom = parse_value(key, value)?,
            ["map", "detail_zoom"] => self.map.detail_zoom = parse_value(key, value)?,

            ["server", "host"] => self.server.host = value.to_string(),
            ["server", "port"] => self.server.port = parse_value(key, value)?,

            ["url", "default"] => self.url.default = value.to_string(),

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "generation.days",
            "generation.seed",
            "generation.format",
            "data.regions",
            "map.title",
            "map.center_lat",
            "map.center_lng",
            "map.zoom",
            "map.detail_zoom",
            "server.host",
            "server.port",
            "url.default",
        ]
    }

    /// Format a map URL using the specified provider
    ///
    /// Replaces {lat}, {lng} and {zoom} placeholders with actual values
    pub fn format_url(&self, provider: Option<&str>, lat: f64, lng: f64, zoom: u8) -> Result<String> {
        let provider_name = provider.unwrap_or(&self.url.default);

        let template = self.url.providers.get(provider_name).ok_or_else(|| {
            Error::Config(format!("Unknown URL provider: {}", provider_name))
        })?;

        Ok(template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string())
            .replace("{zoom}", &zoom.to_string()))
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
