//! Configuration for the collector agent.
//!
//! Loads settings from /etc/voicemon/agent.toml or uses defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/voicemon/agent.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Responder ingestion endpoint the reports are pushed to
    #[serde(default = "default_push_endpoint")]
    pub push_endpoint: String,

    /// Seconds between samples
    #[serde(default = "default_push_interval")]
    pub push_interval_secs: u64,

    /// Listen address for the local inspection endpoints
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Mount point reported as the disk metric
    #[serde(default = "default_disk_mount")]
    pub disk_mount: String,
}

fn default_push_endpoint() -> String {
    "http://127.0.0.1:8080/update-system-info".to_string()
}

fn default_push_interval() -> u64 {
    5
}

fn default_listen_addr() -> String {
    "0.0.0.0:5000".to_string()
}

fn default_disk_mount() -> String {
    "/".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            push_endpoint: default_push_endpoint(),
            push_interval_secs: default_push_interval(),
            listen_addr: default_listen_addr(),
            disk_mount: default_disk_mount(),
        }
    }
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

    /// Push endpoint, honoring the VOICEMON_PUSH_URL deployment override.
    pub fn effective_push_endpoint(&self) -> String {
        match std::env::var("VOICEMON_PUSH_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => self.push_endpoint.clone(),
        }
    }

    /// Listen address, honoring the PORT variable container platforms inject.
    pub fn effective_listen_addr(&self) -> String {
        match std::env::var("PORT") {
            Ok(port) if !port.is_empty() => format!("0.0.0.0:{}", port),
            _ => self.listen_addr.clone(),
        }
    }
}
