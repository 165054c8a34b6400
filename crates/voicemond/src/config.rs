//! Configuration for voicemond.
//!
//! Loads settings from /etc/voicemon/voicemond.toml or uses defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/voicemon/voicemond.toml";

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address for the webhook and ingestion endpoints
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

/// Generative rephrasing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Off by default; the deterministic templates are the primary renderer
    #[serde(default)]
    pub enabled: bool,

    /// Ollama-style endpoint used for rephrasing
    #[serde(default = "default_rewrite_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_rewrite_model")]
    pub model: String,

    #[serde(default = "default_rewrite_timeout")]
    pub timeout_secs: u64,
}

fn default_rewrite_endpoint() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_rewrite_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_rewrite_timeout() -> u64 {
    4
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_rewrite_endpoint(),
            model: default_rewrite_model(),
            timeout_secs: default_rewrite_timeout(),
        }
    }
}

/// Full responder configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl Config {
    /// Load config from file, or return defaults
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_PATH).unwrap_or_else(|e| {
            warn!("Config not found, using defaults: {}", e);
            Config::default()
        })
    }

    fn load_from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!("Loaded config from {}", path);
        Ok(config)
    }

    /// Listen address, honoring the PORT variable container platforms inject.
    pub fn effective_listen_addr(&self) -> String {
        match std::env::var("PORT") {
            Ok(port) if !port.is_empty() => format!("0.0.0.0:{}", port),
            _ => self.server.listen_addr.clone(),
        }
    }
}
