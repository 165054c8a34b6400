//! Voice-assistant webhook wire types.
//!
//! The envelope is parsed permissively: every level is optional with a
//! default, so a sparse or unfamiliar payload degrades to an empty request
//! instead of a rejection.

use crate::render::Reply;
use serde::{Deserialize, Serialize};

/// Incoming webhook envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillRequest {
    #[serde(default)]
    pub request: RequestEnvelope,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestEnvelope {
    #[serde(rename = "type", default)]
    pub request_type: String,
    #[serde(default)]
    pub intent: Option<IntentEnvelope>,
    #[serde(rename = "inputTranscript", default)]
    pub input_transcript: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntentEnvelope {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slots: Option<Slots>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Slots {
    #[serde(default)]
    pub phrase: Option<SlotValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotValue {
    #[serde(default)]
    pub value: Option<String>,
}

/// Kind of webhook request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Launch,
    Intent,
    Other,
}

/// The distilled per-invocation request the dispatcher consumes.
#[derive(Debug, Clone)]
pub struct IncomingRequest {
    pub kind: RequestKind,
    /// Meaningful only when `kind` is `Intent`; empty otherwise.
    pub intent_name: String,
    pub slot_phrase: Option<String>,
    pub transcript: Option<String>,
}

impl From<SkillRequest> for IncomingRequest {
    fn from(req: SkillRequest) -> Self {
        let envelope = req.request;
        let kind = match envelope.request_type.as_str() {
            "LaunchRequest" => RequestKind::Launch,
            "IntentRequest" => RequestKind::Intent,
            _ => RequestKind::Other,
        };

        let (intent_name, slot_phrase) = match envelope.intent {
            Some(intent) => {
                let slot = intent.slots.and_then(|s| s.phrase).and_then(|p| p.value);
                (intent.name, slot)
            }
            None => (String::new(), None),
        };

        Self {
            kind,
            intent_name,
            slot_phrase,
            transcript: envelope.input_transcript,
        }
    }
}

/// Webhook response envelope: one spoken sentence, session closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl SkillResponse {
    /// Wrap a finished reply in the plain-text speech envelope.
    pub fn speak(reply: &Reply) -> Self {
        Self {
            version: "1.0".to_string(),
            response: ResponseBody {
                output_speech: OutputSpeech {
                    speech_type: "PlainText".to_string(),
                    text: reply.text.clone(),
                },
                should_end_session: reply.end_session,
            },
        }
    }
}
