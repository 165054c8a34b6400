//! Shared types and core logic for the voicemon daemons.
//!
//! Everything in this crate is pure and synchronous: the wire formats for
//! both HTTP boundaries, the snapshot data model, and the classify/render
//! pipeline that turns a voice request plus the latest snapshot into a
//! spoken reply. The daemons own all the I/O.

pub mod classify;
pub mod dispatch;
pub mod normalize;
pub mod render;
pub mod report;
pub mod request;
pub mod snapshot;

pub use classify::{classify, MetricCategory};
pub use dispatch::{handle, resolve};
pub use normalize::{contains_any, normalize};
pub use render::{render, Reply};
pub use report::{ReportPayload, ReportStats};
pub use request::{IncomingRequest, RequestKind, SkillRequest, SkillResponse};
pub use snapshot::Snapshot;
