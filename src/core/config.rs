//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.reposcout/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The GitHub token is resolved here once at startup and handed to the
//! client explicitly; nothing else in the app reads the environment.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReposcoutConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GithubConfig {
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    pub per_page: Option<u8>,
    pub quiet_interval_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u8 = 20;
pub const DEFAULT_QUIET_INTERVAL_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub token: Option<String>,
    pub base_url: String,
    pub per_page: u8,
    pub quiet_interval_ms: u64,
    pub request_timeout_secs: u64,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.reposcout/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".reposcout").join("config.toml"))
}

/// Load config from `~/.reposcout/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ReposcoutConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ReposcoutConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ReposcoutConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ReposcoutConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ReposcoutConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# reposcout Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [github]
# token = "ghp_..."                  # Or set GITHUB_ACCESS_TOKEN env var.
#                                    # Without a token, requests are
#                                    # unauthenticated and rate-limited.
# base_url = "https://api.github.com"
# request_timeout_secs = 10

# [search]
# per_page = 20                      # Results requested per search
# quiet_interval_ms = 500            # Typing pause before a search fires
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_token` is from the `--token` flag (None = not specified).
pub fn resolve(config: &ReposcoutConfig, cli_token: Option<&str>) -> ResolvedConfig {
    // Token: CLI → env → config. Empty values count as absent so an
    // empty exported variable doesn't produce a bogus auth header.
    let token = cli_token
        .map(|s| s.to_string())
        .or_else(|| std::env::var("GITHUB_ACCESS_TOKEN").ok())
        .or_else(|| config.github.token.clone())
        .filter(|t| !t.is_empty());

    // Base URL: env → config → default
    let base_url = std::env::var("GITHUB_API_BASE_URL")
        .ok()
        .or_else(|| config.github.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig {
        token,
        base_url,
        per_page: config.search.per_page.unwrap_or(DEFAULT_PER_PAGE),
        quiet_interval_ms: config
            .search
            .quiet_interval_ms
            .unwrap_or(DEFAULT_QUIET_INTERVAL_MS),
        request_timeout_secs: config
            .github
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ReposcoutConfig::default();
        assert!(config.github.token.is_none());
        assert!(config.search.per_page.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ReposcoutConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.per_page, DEFAULT_PER_PAGE);
        assert_eq!(resolved.quiet_interval_ms, DEFAULT_QUIET_INTERVAL_MS);
        assert_eq!(resolved.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ReposcoutConfig {
            github: GithubConfig {
                token: Some("ghp_config".to_string()),
                base_url: Some("https://github.example.com/api/v3".to_string()),
                request_timeout_secs: Some(5),
            },
            search: SearchConfig {
                per_page: Some(10),
                quiet_interval_ms: Some(250),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.base_url, "https://github.example.com/api/v3");
        assert_eq!(resolved.per_page, 10);
        assert_eq!(resolved.quiet_interval_ms, 250);
        assert_eq!(resolved.request_timeout_secs, 5);
    }

    #[test]
    fn test_resolve_cli_token_wins() {
        let config = ReposcoutConfig {
            github: GithubConfig {
                token: Some("ghp_config".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("ghp_cli"));
        assert_eq!(resolved.token.as_deref(), Some("ghp_cli"));
    }

    #[test]
    fn test_resolve_empty_cli_token_degrades_to_unauthenticated() {
        let config = ReposcoutConfig::default();
        let resolved = resolve(&config, Some(""));
        assert!(resolved.token.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[github]
token = "ghp_test123"
base_url = "https://github.example.com/api/v3"
request_timeout_secs = 20

[search]
per_page = 15
quiet_interval_ms = 300
"#;
        let config: ReposcoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.github.token.as_deref(), Some("ghp_test123"));
        assert_eq!(config.github.request_timeout_secs, Some(20));
        assert_eq!(config.search.per_page, Some(15));
        assert_eq!(config.search.quiet_interval_ms, Some(300));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[search]
quiet_interval_ms = 1000
"#;
        let config: ReposcoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.quiet_interval_ms, Some(1000));
        assert!(config.search.per_page.is_none());
        assert!(config.github.token.is_none());
    }
}
