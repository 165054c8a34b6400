//! Request orchestration: request -> category -> reply.

use crate::classify::{classify, MetricCategory};
use crate::render::{render, Reply};
use crate::request::{IncomingRequest, RequestKind};
use crate::snapshot::Snapshot;

/// Map a request to the category it should be answered with.
///
/// Launch requests greet, intent requests go through the classifier, and
/// anything unrecognized is treated the same as an unclassifiable phrase.
pub fn resolve(request: &IncomingRequest) -> MetricCategory {
    match request.kind {
        RequestKind::Launch => MetricCategory::Launch,
        RequestKind::Intent => classify(
            &request.intent_name,
            request.slot_phrase.as_deref(),
            request.transcript.as_deref(),
        ),
        RequestKind::Other => MetricCategory::Unknown,
    }
}

/// Resolve one webhook request against the latest snapshot. Stateless.
pub fn handle(request: &IncomingRequest, snapshot: Option<&Snapshot>) -> Reply {
    render(resolve(request), snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_request(name: &str, transcript: Option<&str>) -> IncomingRequest {
        IncomingRequest {
            kind: RequestKind::Intent,
            intent_name: name.to_string(),
            slot_phrase: None,
            transcript: transcript.map(str::to_string),
        }
    }

    #[test]
    fn test_launch_resolves_to_greeting() {
        let request = IncomingRequest {
            kind: RequestKind::Launch,
            intent_name: String::new(),
            slot_phrase: None,
            transcript: None,
        };
        assert_eq!(resolve(&request), MetricCategory::Launch);
    }

    #[test]
    fn test_other_kind_resolves_to_unknown() {
        let request = IncomingRequest {
            kind: RequestKind::Other,
            intent_name: "SessionEndedRequest".to_string(),
            slot_phrase: None,
            transcript: Some("what is my cpu".to_string()),
        };
        assert_eq!(resolve(&request), MetricCategory::Unknown);
    }

    #[test]
    fn test_intent_kind_goes_through_classifier() {
        let request = intent_request("CheckUptimeIntent", Some("cpu usage please"));
        assert_eq!(resolve(&request), MetricCategory::Cpu);
    }

    #[test]
    fn test_handle_without_snapshot() {
        let request = intent_request("CheckCPUIntent", None);
        let reply = handle(&request, None);
        assert!(reply.text.starts_with("I don't have fresh system data yet"));
        assert!(reply.end_session);
    }

    #[test]
    fn test_handle_renders_metric() {
        let mut snap = Snapshot::empty();
        snap.cpu_usage_percent = Some(55.5);
        let request = intent_request("CheckCPUIntent", None);
        let reply = handle(&request, Some(&snap));
        assert_eq!(reply.text, "Your CPU usage is 55.5 percent.");
    }
}
