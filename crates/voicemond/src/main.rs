//! Voicemon responder daemon.
//!
//! Answers voice-assistant webhook requests about the monitored host using
//! the most recent report pushed by the collector agent.

mod config;
mod rewrite;
mod routes;
mod server;
mod store;

use anyhow::Result;
use config::Config;
use rewrite::SpeechRewriter;
use server::AppState;
use store::SnapshotStore;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("voicemond v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    let rewriter = if config.rewrite.enabled {
        match SpeechRewriter::new(config.rewrite.clone()) {
            Ok(rewriter) => {
                info!("Speech rewriter enabled ({})", config.rewrite.model);
                Some(rewriter)
            }
            Err(e) => {
                warn!("Speech rewriter unavailable, answering with templates: {}", e);
                None
            }
        }
    } else {
        None
    };

    let state = AppState::new(SnapshotStore::new(), rewriter);
    server::run(&config, state).await
}
