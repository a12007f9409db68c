//! Configuration management for the FitJourney backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FJ__)
//!
//! Provider API keys are supplied out-of-band, e.g.
//! `FJ__PROVIDERS__YOUTUBE__API_KEY=...`. A missing key never prevents
//! startup; the affected adapter degrades to empty results instead.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub providers: ProvidersConfig,
    pub cache: CacheConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream provider endpoints and credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Per-adapter timeout for upstream calls during plan aggregation
    pub timeout_secs: u64,
    pub wger: ProviderEndpoint,
    pub spoonacular: ProviderEndpoint,
    pub youtube: ProviderEndpoint,
}

/// One upstream catalog endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderEndpoint {
    pub base_url: String,
    pub api_key: Option<String>,
}

/// Video cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live for cached video results
    pub video_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            providers: ProvidersConfig {
                timeout_secs: 5,
                wger: ProviderEndpoint {
                    base_url: "https://wger.de/api/v2".to_string(),
                    api_key: None,
                },
                spoonacular: ProviderEndpoint {
                    base_url: "https://api.spoonacular.com".to_string(),
                    api_key: None,
                },
                youtube: ProviderEndpoint {
                    base_url: "https://www.googleapis.com/youtube/v3".to_string(),
                    api_key: None,
                },
            },
            cache: CacheConfig {
                video_ttl_secs: 24 * 60 * 60, // 24 hours
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FJ__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FJ__ prefix)
            // e.g., FJ__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("FJ").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
