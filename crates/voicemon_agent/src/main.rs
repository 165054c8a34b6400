//! Voicemon collector agent.
//!
//! Samples the host on a fixed cadence, pushes each report to the responder
//! daemon, and serves the same report locally for inspection.

mod config;
mod pusher;
mod sampler;
mod server;

use anyhow::Result;
use config::Config;
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("voicemon-agent v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    if sampler::has_battery() {
        info!("Battery detected, including charge state in reports");
    }

    let push_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = pusher::run(push_config).await {
            error!("Push loop stopped: {}", e);
        }
    });

    server::run(config).await
}
