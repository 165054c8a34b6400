//! API routes for voicemond.

use crate::server::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use voicemon_common::{dispatch, render, IncomingRequest, SkillRequest, SkillResponse};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Skill Routes
// ============================================================================

pub fn skill_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(skill_status).post(handle_skill_request))
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: String,
    message: String,
}

async fn skill_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".to_string(),
        message: "voicemon responder is live.".to_string(),
    })
}

async fn handle_skill_request(
    State(state): State<AppStateArc>,
    Json(payload): Json<serde_json::Value>,
) -> Json<SkillResponse> {
    let preview: String = payload.to_string().chars().take(2000).collect();
    info!("Incoming skill payload: {}", preview);

    // Wrong-shaped envelopes degrade to an empty request, never a 4xx.
    let parsed: SkillRequest = serde_json::from_value(payload).unwrap_or_default();
    let request = IncomingRequest::from(parsed);
    info!(
        "Intent: {} | Transcript: {:?}",
        request.intent_name, request.transcript
    );

    let category = dispatch::resolve(&request);
    let snapshot = state.store.latest().await;
    let mut reply = render::render(category, snapshot.as_ref());

    if let Some(rewriter) = &state.rewriter {
        match rewriter.rewrite(category, &reply.text).await {
            Ok(text) => reply.text = text,
            Err(e) => warn!("Rewrite failed, keeping deterministic sentence: {}", e),
        }
    }

    Json(SkillResponse::speak(&reply))
}

// ============================================================================
// Report Routes
// ============================================================================

pub fn report_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/update-system-info", post(update_system_info))
        .route("/latest-system-info", get(latest_system_info))
}

async fn update_system_info(
    State(state): State<AppStateArc>,
    Json(payload): Json<serde_json::Value>,
) -> Json<StatusResponse> {
    state.store.replace(payload).await;
    info!("System info updated.");
    Json(StatusResponse {
        status: "success".to_string(),
        message: "System info received.".to_string(),
    })
}

async fn latest_system_info(State(state): State<AppStateArc>) -> Json<serde_json::Value> {
    match state.store.latest_raw().await {
        Some((mut raw, received_at)) => {
            // Stamp the view with the arrival time so snapshot age is visible.
            if let Some(obj) = raw.as_object_mut() {
                obj.insert(
                    "received_at".to_string(),
                    serde_json::Value::String(received_at.to_rfc3339()),
                );
            }
            Json(raw)
        }
        None => Json(serde_json::json!({ "message": "No data received yet." })),
    }
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/ping", get(ping))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    uptime_seconds: u64,
}

async fn ping(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "voicemond".to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
