//! Metric classification from declared intents and heard phrases.
//!
//! The voice platform's own recognizer picks an intent name upstream, but
//! that name is not always trustworthy; classification layers the declared
//! name, the structured slot phrase, and the raw transcript as successive
//! tiers of evidence.

use crate::normalize::{contains_any, normalize};

/// What the caller is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    Cpu,
    Memory,
    Disk,
    Uptime,
    AllStatus,
    Help,
    Launch,
    Unknown,
}

impl MetricCategory {
    /// Short lowercase label for logs and rewrite prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Memory => "memory",
            Self::Disk => "disk",
            Self::Uptime => "uptime",
            Self::AllStatus => "status",
            Self::Help => "help",
            Self::Launch => "launch",
            Self::Unknown => "unknown",
        }
    }
}

// Needle sets for keyword matching. The scan checks them in this order and
// the first hit wins, so "disk cpu" resolves to Cpu. That ordering is part
// of the contract; keep it stable when adding needles.
const CPU_NEEDLES: &[&str] = &["cpu", "c p u", "processor", "proc"];
const MEMORY_NEEDLES: &[&str] = &["memory", "ram"];
const DISK_NEEDLES: &[&str] = &["disk", "storage", "space", "drive"];
const UPTIME_NEEDLES: &[&str] = &["uptime", "running time", "how long", "since when"];

/// Scan a normalized phrase through the four needle tiers.
fn scan(phrase: &str) -> Option<MetricCategory> {
    if contains_any(phrase, CPU_NEEDLES) {
        Some(MetricCategory::Cpu)
    } else if contains_any(phrase, MEMORY_NEEDLES) {
        Some(MetricCategory::Memory)
    } else if contains_any(phrase, DISK_NEEDLES) {
        Some(MetricCategory::Disk)
    } else if contains_any(phrase, UPTIME_NEEDLES) {
        Some(MetricCategory::Uptime)
    } else {
        None
    }
}

/// Decide which metric an intent request is after.
///
/// The fixed `Check*` intents are taken at their word, except
/// `CheckUptimeIntent`: the upstream recognizer is known to misroute CPU
/// questions into it, so a CPU needle in the transcript overrides the
/// declared name. The free-form `MetricQueryIntent` scans the slot phrase
/// first and falls back to the transcript; the fallback intent (or a
/// missing name) gets the transcript scan only. Names we have never heard
/// of classify as `Unknown`.
pub fn classify(
    intent_name: &str,
    slot_phrase: Option<&str>,
    transcript: Option<&str>,
) -> MetricCategory {
    let heard = normalize(transcript.unwrap_or(""));

    match intent_name {
        "CheckCPUIntent" => MetricCategory::Cpu,
        "CheckMemoryIntent" => MetricCategory::Memory,
        "CheckDiskIntent" => MetricCategory::Disk,
        "CheckAllStatusIntent" => MetricCategory::AllStatus,
        "CheckUptimeIntent" => {
            if contains_any(&heard, CPU_NEEDLES) {
                MetricCategory::Cpu
            } else {
                MetricCategory::Uptime
            }
        }
        "MetricQueryIntent" => {
            let slot = normalize(slot_phrase.unwrap_or(""));
            scan(&slot)
                .or_else(|| scan(&heard))
                .unwrap_or(MetricCategory::Unknown)
        }
        "AMAZON.HelpIntent" => MetricCategory::Help,
        "AMAZON.FallbackIntent" | "" => scan(&heard).unwrap_or(MetricCategory::Unknown),
        _ => MetricCategory::Unknown,
    }
}
