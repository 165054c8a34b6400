//! Periodic report push to the responder.

use crate::config::Config;
use crate::sampler;
use anyhow::Result;
use std::time::Duration;
use tracing::{info, warn};

/// Sample and push a fresh report on a fixed cadence, forever.
///
/// A failed push is logged and the cadence continues; the responder keeps
/// answering from its previous snapshot until a push gets through again.
pub async fn run(config: Config) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    let endpoint = config.effective_push_endpoint();
    let interval = Duration::from_secs(config.push_interval_secs.max(1));
    info!(
        "Pushing reports to {} every {}s",
        endpoint,
        interval.as_secs()
    );

    loop {
        let report = sampler::collect_report(&config.disk_mount).await;

        match client.post(&endpoint).json(&report).send().await {
            Ok(response) if response.status().is_success() => {
                info!("Report delivered");
            }
            Ok(response) => {
                warn!("Responder returned {}", response.status());
            }
            Err(e) => {
                warn!("Failed to push report: {}", e);
            }
        }

        tokio::time::sleep(interval).await;
    }
}
