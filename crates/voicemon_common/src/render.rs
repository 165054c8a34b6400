//! Deterministic sentence rendering for each metric category.

use crate::classify::MetricCategory;
use crate::snapshot::Snapshot;

/// A finished spoken reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Always true in this design; every answer is single-turn.
    pub end_session: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_session: true,
        }
    }
}

/// Render the spoken sentence for a category against the latest snapshot.
///
/// A missing snapshot wins over everything else: without data the answer is
/// the same no matter what was asked. Individual missing fields get a
/// per-metric "couldn't read" sentence instead of an error.
pub fn render(category: MetricCategory, snapshot: Option<&Snapshot>) -> Reply {
    let Some(snap) = snapshot else {
        return Reply::say(
            "I don't have fresh system data yet. Please make sure the monitor is running.",
        );
    };

    match category {
        MetricCategory::Cpu => match snap.cpu_usage_percent {
            Some(v) => Reply::say(format!("Your CPU usage is {:.1} percent.", v)),
            None => Reply::say("I couldn't read CPU usage yet."),
        },
        MetricCategory::Memory => match snap.memory_used_percent {
            Some(v) => Reply::say(format!("Your memory usage is {:.1} percent.", v)),
            None => Reply::say("I couldn't read memory usage yet."),
        },
        MetricCategory::Disk => match snap.disk_free_gb {
            Some(v) => Reply::say(format!("You have {:.2} gigabytes free on disk.", v)),
            None => Reply::say("I couldn't read disk information yet."),
        },
        MetricCategory::Uptime => match &snap.uptime_text {
            Some(v) => Reply::say(format!("Your system has been running for {}.", v)),
            None => Reply::say("I couldn't read uptime yet."),
        },
        MetricCategory::AllStatus => match &snap.summary_text {
            Some(v) => Reply::say(v.clone()),
            None => Reply::say("Here's your status, but I couldn't generate the full summary."),
        },
        MetricCategory::Help => Reply::say(
            "You can ask: CPU usage, memory usage, disk space left, uptime, or say full system summary.",
        ),
        MetricCategory::Launch => Reply::say(
            "Hi! You can ask about CPU, memory, storage, uptime, or say system status.",
        ),
        MetricCategory::Unknown => Reply::say(
            "I couldn't tell which metric you want. Try CPU, memory, disk, or uptime.",
        ),
    }
}
