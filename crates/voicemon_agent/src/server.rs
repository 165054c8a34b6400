//! Local inspection endpoints for the agent.

use crate::config::Config;
use crate::sampler;
use anyhow::Result;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use voicemon_common::ReportPayload;

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let addr = config.effective_listen_addr();
    let state = Arc::new(config);

    let app = Router::new()
        .route("/", get(home))
        .route("/system-info", get(system_info))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Local info available at http://{}/system-info", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: String,
    message: String,
}

async fn home() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running".to_string(),
        message: "voicemon agent is live.".to_string(),
    })
}

/// Sample on demand; the report here is the same one the push loop sends.
async fn system_info(State(config): State<Arc<Config>>) -> Json<ReportPayload> {
    Json(sampler::collect_report(&config.disk_mount).await)
}
