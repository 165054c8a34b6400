//! The collector's report wire format.
//!
//! Key names are the wire contract between the agent and the responder;
//! the `Disk (C:)` spelling is historical but fixed. Every field is
//! optional so a partial sample still produces a valid report.

use serde::{Deserialize, Serialize};

/// Full report pushed by the collector on every cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportPayload {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub stats: Option<ReportStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportStats {
    #[serde(rename = "CPU", default)]
    pub cpu: Option<CpuStats>,
    #[serde(rename = "Memory", default)]
    pub memory: Option<MemoryStats>,
    #[serde(rename = "Disk (C:)", default)]
    pub disk: Option<DiskStats>,
    /// Explicitly null on hosts without a battery.
    #[serde(rename = "Battery", default)]
    pub battery: Option<BatteryStats>,
    #[serde(rename = "Network", default)]
    pub network: Option<NetworkStats>,
    #[serde(rename = "System Info", default)]
    pub system: Option<SystemInfoStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpuStats {
    #[serde(rename = "Usage (%)", default)]
    pub usage_percent: Option<f64>,
    #[serde(rename = "Cores", default)]
    pub cores: Option<u32>,
    #[serde(rename = "Frequency (MHz)", default)]
    pub frequency_mhz: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStats {
    #[serde(rename = "Total (GB)", default)]
    pub total_gb: Option<f64>,
    #[serde(rename = "Available (GB)", default)]
    pub available_gb: Option<f64>,
    #[serde(rename = "Used (%)", default)]
    pub used_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiskStats {
    #[serde(rename = "Total (GB)", default)]
    pub total_gb: Option<f64>,
    #[serde(rename = "Used (GB)", default)]
    pub used_gb: Option<f64>,
    #[serde(rename = "Free (GB)", default)]
    pub free_gb: Option<f64>,
    #[serde(rename = "Used (%)", default)]
    pub used_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatteryStats {
    #[serde(rename = "Charging", default)]
    pub charging: Option<bool>,
    #[serde(rename = "Percentage", default)]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkStats {
    #[serde(rename = "Data Sent (MB)", default)]
    pub sent_mb: Option<f64>,
    #[serde(rename = "Data Received (MB)", default)]
    pub received_mb: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemInfoStats {
    #[serde(rename = "OS", default)]
    pub os: Option<String>,
    #[serde(rename = "OS Version", default)]
    pub os_version: Option<String>,
    #[serde(rename = "Architecture", default)]
    pub architecture: Option<String>,
    #[serde(rename = "Uptime", default)]
    pub uptime: Option<String>,
}
