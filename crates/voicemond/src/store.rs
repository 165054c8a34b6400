//! Single-slot snapshot store.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use voicemon_common::Snapshot;

/// Holds the most recent report and the snapshot derived from it.
///
/// One slot, replaced wholesale on every ingest; readers always see a
/// complete snapshot or none at all. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct SnapshotStore {
    inner: Arc<RwLock<Option<Entry>>>,
}

#[derive(Clone)]
struct Entry {
    snapshot: Snapshot,
    raw: serde_json::Value,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored snapshot with a freshly ingested payload.
    pub async fn replace(&self, raw: serde_json::Value) {
        let snapshot = Snapshot::from_value(&raw);
        *self.inner.write().await = Some(Entry { snapshot, raw });
    }

    /// The current snapshot, if any report has ever been received.
    pub async fn latest(&self) -> Option<Snapshot> {
        self.inner.read().await.as_ref().map(|e| e.snapshot.clone())
    }

    /// The raw payload as last received plus its arrival time, for inspection.
    pub async fn latest_raw(&self) -> Option<(serde_json::Value, DateTime<Utc>)> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|e| (e.raw.clone(), e.snapshot.received_at))
    }
}
