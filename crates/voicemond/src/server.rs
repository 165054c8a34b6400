//! HTTP server for voicemond.

use crate::config::Config;
use crate::rewrite::SpeechRewriter;
use crate::routes;
use crate::store::SnapshotStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub store: SnapshotStore,
    pub rewriter: Option<SpeechRewriter>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: SnapshotStore, rewriter: Option<SpeechRewriter>) -> Self {
        Self {
            store,
            rewriter,
            start_time: Instant::now(),
        }
    }
}

/// Run the HTTP server
pub async fn run(config: &Config, state: AppState) -> Result<()> {
    let state = Arc::new(state);

    let app = Router::new()
        .merge(routes::skill_routes())
        .merge(routes::report_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let addr = config.effective_listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
