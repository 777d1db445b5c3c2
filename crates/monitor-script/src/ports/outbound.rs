//! Outbound Ports (Driven Ports)
//!
//! The remote Synthetics service that stores monitor scripts.

use async_trait::async_trait;

use crate::domain::MonitorScript;
use crate::error::RemoteError;

/// Remote monitor script store (Driven Port)
///
/// Implementations own transport concerns: authentication, timeouts and
/// cancellation. Callers perform no retries.
#[async_trait]
pub trait SyntheticsApi: Send + Sync {
    /// Replace the script attached to `monitor_id`. Idempotent.
    async fn update_monitor_script(
        &self,
        monitor_id: &str,
        script: &MonitorScript,
    ) -> Result<(), RemoteError>;

    /// Fetch the script attached to `monitor_id`.
    ///
    /// Returns `RemoteError::NotFound` when the id is unknown to the remote.
    async fn get_monitor_script(&self, monitor_id: &str) -> Result<MonitorScript, RemoteError>;
}
