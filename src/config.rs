//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Default host of the Real-Time Product Search API.
pub const DEFAULT_BASE_URL: &str = "https://real-time-product-search.p.rapidapi.com";

/// Client settings with layered loading.
#[derive(Clone, Serialize, Deserialize)]
pub struct Settings {
    /// RapidAPI key sent as `X-RapidAPI-Key`
    #[serde(default)]
    pub rapid_api_key: String,

    /// API base URL, including scheme
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout in seconds (0 disables it)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Output format for the CLI
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rapid_api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            proxy: None,
            format: OutputFormat::Json,
        }
    }
}

// The key is masked so settings can be logged.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = if self.rapid_api_key.is_empty() { "" } else { "***" };
        f.debug_struct("Settings")
            .field("rapid_api_key", &key)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("proxy", &self.proxy)
            .field("format", &self.format)
            .finish()
    }
}

impl Settings {
    /// Creates default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates settings holding the given API key and default everything else.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self { rapid_api_key: api_key.into(), ..Self::default() }
    }

    /// Builds settings from a plain key/value mapping.
    ///
    /// Recognised keys are `rapid_api_key`, `base_url`, `timeout_secs`,
    /// `connect_timeout_secs` and `proxy`. Unknown keys are ignored and
    /// unparseable numbers keep their defaults. A missing key is not an
    /// error here; the client rejects it at construction.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let mut settings = Self::default();

        if let Some(key) = map.get("rapid_api_key") {
            settings.rapid_api_key = key.clone();
        }
        if let Some(url) = map.get("base_url") {
            settings.base_url = url.clone();
        }
        if let Some(t) = map.get("timeout_secs").and_then(|v| v.parse().ok()) {
            settings.timeout_secs = t;
        }
        if let Some(t) = map.get("connect_timeout_secs").and_then(|v| v.parse().ok()) {
            settings.connect_timeout_secs = t;
        }
        if let Some(proxy) = map.get("proxy") {
            settings.proxy = Some(proxy.clone());
        }

        settings
    }

    /// Loads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads settings with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("product-search").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(key) = std::env::var("RAPIDAPI_KEY") {
            self.rapid_api_key = key;
        }

        if let Ok(url) = std::env::var("RAPIDAPI_BASE_URL") {
            self.base_url = url;
        }

        if let Ok(timeout) = std::env::var("RAPIDAPI_TIMEOUT") {
            if let Ok(t) = timeout.parse() {
                self.timeout_secs = t;
            }
        }

        if let Ok(proxy) = std::env::var("RAPIDAPI_PROXY") {
            self.proxy = Some(proxy);
        }

        self
    }
}

/// Output format for responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Single-line JSON
    Compact,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "pretty" => Ok(OutputFormat::Json),
            "compact" => Ok(OutputFormat::Compact),
            _ => Err(format!("Unknown format: {}. Use: json, compact", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Compact => write!(f, "compact"),
        }
    }
}
