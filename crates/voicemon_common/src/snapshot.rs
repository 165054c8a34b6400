//! The snapshot data model.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// The most recent metrics received from the collector.
///
/// A snapshot either exists in full or not at all; individual fields may be
/// missing when the collector could not sample them. Each ingest replaces
/// the whole value, never merges into the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub cpu_usage_percent: Option<f64>,
    pub memory_used_percent: Option<f64>,
    pub disk_free_gb: Option<f64>,
    pub uptime_text: Option<String>,
    pub summary_text: Option<String>,
    /// When this report arrived; exposed for inspection, never gates answers.
    pub received_at: DateTime<Utc>,
}

impl Snapshot {
    /// Pull the answerable fields out of a raw report payload.
    ///
    /// Any key that is missing or has the wrong shape becomes an absent
    /// field. A malformed report is a sparse snapshot, not an error.
    pub fn from_value(payload: &Value) -> Self {
        let stat = |section: &str, key: &str| payload.get("stats")?.get(section)?.get(key);

        Self {
            cpu_usage_percent: stat("CPU", "Usage (%)").and_then(Value::as_f64),
            memory_used_percent: stat("Memory", "Used (%)").and_then(Value::as_f64),
            disk_free_gb: stat("Disk (C:)", "Free (GB)").and_then(Value::as_f64),
            uptime_text: stat("System Info", "Uptime")
                .and_then(Value::as_str)
                .map(str::to_string),
            summary_text: payload
                .get("summary")
                .and_then(Value::as_str)
                .map(str::to_string),
            received_at: Utc::now(),
        }
    }

    /// A snapshot with every field absent, for tests and placeholders.
    pub fn empty() -> Self {
        Self::from_value(&Value::Null)
    }
}
