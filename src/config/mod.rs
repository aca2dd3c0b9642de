//! Configuration management for starscan

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Public GitHub REST API base URL
pub const DEFAULT_API_HOST: &str = "https://api.github.com";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Optional GitHub credential, sent as a bearer token on every upstream call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// Upstream API base URL
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Inbound HTTP service settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Sentinel labels used by the aggregate and display computations
    #[serde(default)]
    pub labels: Labels,
}

/// Bind address for `starscan serve`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream HTTP client tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Freshness hint passed to the transport (0 disables the hint)
    #[serde(default = "default_cache_max_age_secs")]
    pub cache_max_age_secs: u64,

    /// Client-side pacing of upstream requests (0 disables pacing)
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
}

/// Sentinel strings for repositories without a declared language.
///
/// The aggregate endpoint and the display layer use different labels, and
/// each is configured independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labels {
    /// `mostUsedLanguage` when no repository declares a language
    #[serde(default = "default_most_used_fallback")]
    pub most_used_fallback: String,

    /// Display top language when the set is empty
    #[serde(default = "default_top_language_fallback")]
    pub top_language_fallback: String,

    /// Display tally key for repositories without a language
    #[serde(default = "default_unknown_language")]
    pub unknown_language: String,

    /// Display group for repositories without a language
    #[serde(default = "default_ungrouped_bucket")]
    pub ungrouped_bucket: String,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_cache_max_age_secs() -> u64 {
    300
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_most_used_fallback() -> String {
    "N/A".to_string()
}

fn default_top_language_fallback() -> String {
    "None".to_string()
}

fn default_unknown_language() -> String {
    "Unknown".to_string()
}

fn default_ungrouped_bucket() -> String {
    "Other".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            cache_max_age_secs: default_cache_max_age_secs(),
            requests_per_second: default_requests_per_second(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            most_used_fallback: default_most_used_fallback(),
            top_language_fallback: default_top_language_fallback(),
            unknown_language: default_unknown_language(),
            ungrouped_bucket: default_ungrouped_bucket(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            api_host: default_api_host(),
            server: ServerConfig::default(),
            http: HttpConfig::default(),
            labels: Labels::default(),
        }
    }
}

/// Runtime overrides layered on top of the config file.
///
/// Populated from CLI flags and their environment variables.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub github_token: Option<String>,
    pub api_host: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".starscan").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Apply CLI/environment overrides. Empty strings are treated as unset.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(token) = non_empty(overrides.github_token.as_deref()) {
            self.github_token = Some(token.to_string());
        }
        if let Some(host) = non_empty(overrides.api_host.as_deref()) {
            self.api_host = host.to_string();
        }
        if let Some(host) = non_empty(overrides.host.as_deref()) {
            self.server.host = host.to_string();
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
    }

    /// Validate settings that would otherwise fail at first use
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.api_host).map_err(|e| {
            ConfigError::Invalid(format!("api_host '{}' is not a URL: {}", self.api_host, e))
        })?;

        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be non-zero".to_string()).into());
        }

        Ok(())
    }

    /// Whether a credential is configured
    pub fn has_token(&self) -> bool {
        self.github_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// `host:port` bind address for the HTTP service
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
