use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::MonitorScript;
use crate::error::RemoteError;
use crate::ports::outbound::SyntheticsApi;

/// In-memory Synthetics service for tests and offline runs.
///
/// Mirrors the remote contract: PUT overwrites, GET of an unknown id is
/// `NotFound`, and a blanked script stays readable. Every PUT is recorded
/// and single failures can be injected per operation.
#[derive(Default)]
pub struct InMemorySyntheticsApi {
    scripts: Mutex<HashMap<String, MonitorScript>>,
    submissions: Mutex<Vec<(String, MonitorScript)>>,
    fail_next_update: Mutex<Option<RemoteError>>,
    fail_next_get: Mutex<Option<RemoteError>>,
}

impl InMemorySyntheticsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a script as if it already existed remotely.
    pub fn insert(&self, monitor_id: impl Into<String>, script: MonitorScript) {
        self.scripts.lock().insert(monitor_id.into(), script);
    }

    /// Drop a script, as if the monitor was removed out of band.
    pub fn remove(&self, monitor_id: &str) -> Option<MonitorScript> {
        self.scripts.lock().remove(monitor_id)
    }

    pub fn get(&self, monitor_id: &str) -> Option<MonitorScript> {
        self.scripts.lock().get(monitor_id).cloned()
    }

    /// All PUTs in arrival order.
    pub fn submissions(&self) -> Vec<(String, MonitorScript)> {
        self.submissions.lock().clone()
    }

    pub fn last_submission(&self) -> Option<(String, MonitorScript)> {
        self.submissions.lock().last().cloned()
    }

    pub fn fail_next_update(&self, error: RemoteError) {
        *self.fail_next_update.lock() = Some(error);
    }

    pub fn fail_next_get(&self, error: RemoteError) {
        *self.fail_next_get.lock() = Some(error);
    }
}

#[async_trait]
impl SyntheticsApi for InMemorySyntheticsApi {
    async fn update_monitor_script(
        &self,
        monitor_id: &str,
        script: &MonitorScript,
    ) -> Result<(), RemoteError> {
        if let Some(error) = self.fail_next_update.lock().take() {
            return Err(error);
        }
        self.submissions
            .lock()
            .push((monitor_id.to_string(), script.clone()));
        self.scripts
            .lock()
            .insert(monitor_id.to_string(), script.clone());
        Ok(())
    }

    async fn get_monitor_script(&self, monitor_id: &str) -> Result<MonitorScript, RemoteError> {
        if let Some(error) = self.fail_next_get.lock().take() {
            return Err(error);
        }
        self.scripts
            .lock()
            .get(monitor_id)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound {
                monitor_id: monitor_id.to_string(),
            })
    }
}
