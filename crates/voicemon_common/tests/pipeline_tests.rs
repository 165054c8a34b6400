//! End-to-end pipeline tests: webhook envelope -> classification -> reply,
//! and collector report -> snapshot extraction.

use serde_json::json;
use voicemon_common::report::{
    CpuStats, DiskStats, MemoryStats, ReportPayload, ReportStats, SystemInfoStats,
};
use voicemon_common::{handle, IncomingRequest, SkillRequest, SkillResponse, Snapshot};

fn webhook(intent_name: &str) -> IncomingRequest {
    let payload = json!({
        "request": {
            "type": "IntentRequest",
            "intent": { "name": intent_name }
        }
    });
    let parsed: SkillRequest = serde_json::from_value(payload).unwrap();
    IncomingRequest::from(parsed)
}

fn populated_snapshot() -> Snapshot {
    let payload = json!({
        "summary": "Your system is running fine with 8 CPU cores.",
        "stats": {
            "CPU": { "Usage (%)": 17.2 },
            "Memory": { "Used (%)": 48.9 },
            "Disk (C:)": { "Free (GB)": 123.45 },
            "System Info": { "Uptime": "1 day, 2:03:04" }
        }
    });
    Snapshot::from_value(&payload)
}

#[test]
fn test_five_fixed_intents_give_five_distinct_answers() {
    let snap = populated_snapshot();
    let intents = [
        "CheckCPUIntent",
        "CheckMemoryIntent",
        "CheckDiskIntent",
        "CheckUptimeIntent",
        "CheckAllStatusIntent",
    ];

    let clarification = handle(
        &webhook("SomethingUnrecognized"),
        Some(&snap),
    );

    let mut answers = Vec::new();
    for intent in intents {
        let reply = handle(&webhook(intent), Some(&snap));
        assert!(!reply.text.is_empty(), "{} gave an empty answer", intent);
        assert_ne!(
            reply.text, clarification.text,
            "{} fell through to the clarification sentence",
            intent
        );
        answers.push(reply.text);
    }

    let mut deduped = answers.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), answers.len(), "answers were not distinct: {:?}", answers);
}

#[test]
fn test_misrouted_uptime_request_answers_cpu() {
    let payload = json!({
        "request": {
            "type": "IntentRequest",
            "intent": { "name": "CheckUptimeIntent" },
            "inputTranscript": "what's my cpu usage"
        }
    });
    let parsed: SkillRequest = serde_json::from_value(payload).unwrap();
    let request = IncomingRequest::from(parsed);

    let reply = handle(&request, Some(&populated_snapshot()));
    assert_eq!(reply.text, "Your CPU usage is 17.2 percent.");
}

#[test]
fn test_free_form_query_uses_transcript_when_slot_is_empty() {
    let payload = json!({
        "request": {
            "type": "IntentRequest",
            "intent": {
                "name": "MetricQueryIntent",
                "slots": { "phrase": { "value": "" } }
            },
            "inputTranscript": "how much ram is free"
        }
    });
    let parsed: SkillRequest = serde_json::from_value(payload).unwrap();
    let request = IncomingRequest::from(parsed);

    let reply = handle(&request, Some(&populated_snapshot()));
    assert_eq!(reply.text, "Your memory usage is 48.9 percent.");
}

#[test]
fn test_agent_report_round_trips_into_snapshot() {
    // The report the agent serializes must land in the responder's snapshot
    // through the same generic-value path the ingestion route uses.
    let report = ReportPayload {
        summary: Some("All quiet.".to_string()),
        stats: Some(ReportStats {
            cpu: Some(CpuStats {
                usage_percent: Some(9.1),
                cores: Some(4),
                frequency_mhz: Some(1800.0),
            }),
            memory: Some(MemoryStats {
                total_gb: Some(16.0),
                available_gb: Some(8.2),
                used_percent: Some(48.75),
            }),
            disk: Some(DiskStats {
                total_gb: Some(512.0),
                used_gb: Some(300.0),
                free_gb: Some(212.0),
                used_percent: Some(58.6),
            }),
            battery: None,
            network: None,
            system: Some(SystemInfoStats {
                os: Some("Linux".to_string()),
                os_version: Some("6.1".to_string()),
                architecture: Some("x86_64".to_string()),
                uptime: Some("3:04:05".to_string()),
            }),
        }),
    };

    let value = serde_json::to_value(&report).unwrap();
    let snap = Snapshot::from_value(&value);

    assert_eq!(snap.cpu_usage_percent, Some(9.1));
    assert_eq!(snap.memory_used_percent, Some(48.75));
    assert_eq!(snap.disk_free_gb, Some(212.0));
    assert_eq!(snap.uptime_text.as_deref(), Some("3:04:05"));
    assert_eq!(snap.summary_text.as_deref(), Some("All quiet."));
}

#[test]
fn test_full_reply_envelope_shape() {
    let reply = handle(&webhook("CheckDiskIntent"), Some(&populated_snapshot()));
    let envelope = serde_json::to_value(SkillResponse::speak(&reply)).unwrap();

    assert_eq!(envelope["version"], "1.0");
    assert_eq!(envelope["response"]["outputSpeech"]["type"], "PlainText");
    assert_eq!(
        envelope["response"]["outputSpeech"]["text"],
        "You have 123.45 gigabytes free on disk."
    );
    assert_eq!(envelope["response"]["shouldEndSession"], true);
}
