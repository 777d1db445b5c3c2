//! Synthetics REST API adapter.

mod client;
pub mod types;

pub use client::{classify_status, RestSyntheticsApi};
pub use types::{ScriptLocationPayload, ScriptPayload};
