//! # Monitor Script Service
//!
//! Lifecycle controller implementing `MonitorScriptApi` over an injected
//! `SyntheticsApi`.
//!
//! ## Lifecycle
//!
//! ```text
//!            create / import
//!   Absent ──────────────────→ Present ──┐ read / update
//!     ↑                          │  ↑────┘
//!     └──── delete / read(404) ──┘
//! ```
//!
//! Every operation issues its remote calls one after another and awaits
//! each; nothing runs in the background and nothing is cached between calls.
//! Remote errors are never retried.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::config::SecurityConfig;
use crate::domain::{
    assemble, blank_script, reconcile, validate_monitor_id, verify, LocationSigner, MonitorScript,
    ResourceState, ScriptDeclaration, ScriptState,
};
use crate::error::{RemoteError, ScriptError};
use crate::ports::{MonitorScriptApi, SyntheticsApi};


/// Leading characters of a tag, enough to correlate log lines.
fn tag_prefix(tag: &str) -> &str {
    tag.get(..8).unwrap_or(tag)
}

/// Monitor script lifecycle controller.
pub struct MonitorScriptService<A: SyntheticsApi> {
    /// Remote service (driven port)
    api: Arc<A>,
    /// Location signer keyed with the configured secret
    signer: LocationSigner,
    /// Recompute tags on read and fail on mismatch
    verify_on_read: bool,
}

impl<A: SyntheticsApi> MonitorScriptService<A> {
    /// Create a service that trusts remote tags on read.
    pub fn new(api: Arc<A>, signer: LocationSigner) -> Self {
        Self {
            api,
            signer,
            verify_on_read: false,
        }
    }

    /// Create from signing configuration.
    pub fn from_config(api: Arc<A>, security: &SecurityConfig) -> Self {
        Self::new(api, security.signer()).with_verification(security.verify_on_read)
    }

    /// Builder-style method to toggle read verification
    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify_on_read = enabled;
        self
    }

    pub fn signer(&self) -> &LocationSigner {
        &self.signer
    }

    /// Build the payload a create/update would submit, without submitting it.
    pub fn build_script(&self, declaration: &ScriptDeclaration) -> MonitorScript {
        assemble(&declaration.text, &declaration.locations, &self.signer)
    }

    async fn submit(&self, monitor_id: &str, script: &MonitorScript) -> Result<(), ScriptError> {
        debug!(
            monitor_id = %monitor_id,
            locations = script.locations.len(),
            tag_prefix = %script.locations.first().map_or("", |l| tag_prefix(&l.tag)),
            "[monitor-script] Submitting script"
        );
        self.api
            .update_monitor_script(monitor_id, script)
            .await
            .map_err(|e| {
                error!(monitor_id = %monitor_id, error = %e, "[monitor-script] Remote update failed");
                ScriptError::from(e)
            })
    }

    fn project(&self, monitor_id: &str, remote: &MonitorScript) -> Result<ScriptState, ScriptError> {
        if self.verify_on_read {
            return verify(monitor_id, remote, &self.signer).map_err(|e| {
                error!(monitor_id = %monitor_id, error = %e, "[monitor-script] Integrity check failed");
                ScriptError::from(e)
            });
        }
        Ok(reconcile(monitor_id, remote))
    }
}

#[async_trait]
impl<A: SyntheticsApi + 'static> MonitorScriptApi for MonitorScriptService<A> {
    async fn create(&self, declaration: &ScriptDeclaration) -> Result<ResourceState, ScriptError> {
        declaration.validate()?;
        let id = declaration.monitor_id.as_str();
        info!(monitor_id = %id, "[monitor-script] Creating monitor script");

        let script = self.build_script(declaration);
        self.submit(id, &script).await?;

        self.read(id).await
    }

    async fn read(&self, monitor_id: &str) -> Result<ResourceState, ScriptError> {
        validate_monitor_id(monitor_id)?;
        info!(monitor_id = %monitor_id, "[monitor-script] Reading monitor script");

        let remote = match self.api.get_monitor_script(monitor_id).await {
            Ok(remote) => remote,
            Err(RemoteError::NotFound { .. }) => {
                warn!(monitor_id = %monitor_id, "[monitor-script] Script not found remotely, marking absent");
                return Ok(ResourceState::Absent);
            }
            Err(e) => {
                error!(monitor_id = %monitor_id, error = %e, "[monitor-script] Remote read failed");
                return Err(e.into());
            }
        };

        let state = self.project(monitor_id, &remote)?;
        debug!(
            monitor_id = %monitor_id,
            locations = state.locations.len(),
            "[monitor-script] Reconciled remote script"
        );
        Ok(ResourceState::Present(state))
    }

    async fn update(
        &self,
        current: &ScriptState,
        declaration: &ScriptDeclaration,
    ) -> Result<ResourceState, ScriptError> {
        declaration.validate()?;

        if declaration.monitor_id != current.monitor_id {
            info!(
                from = %current.monitor_id,
                to = %declaration.monitor_id,
                "[monitor-script] monitor_id changed, replacing resource"
            );
            self.delete(current).await?;
            return self.create(declaration).await;
        }

        let id = current.monitor_id.as_str();
        info!(monitor_id = %id, "[monitor-script] Updating monitor script");

        let script = self.build_script(declaration);
        self.submit(id, &script).await?;

        self.read(id).await
    }

    async fn delete(&self, current: &ScriptState) -> Result<ResourceState, ScriptError> {
        let id = current.monitor_id.as_str();
        validate_monitor_id(id)?;
        info!(monitor_id = %id, "[monitor-script] Deleting monitor script");

        self.submit(id, &blank_script()).await?;
        Ok(ResourceState::Absent)
    }

    async fn import(&self, monitor_id: &str) -> Result<ResourceState, ScriptError> {
        info!(monitor_id = %monitor_id, "[monitor-script] Importing monitor script");
        let seeded = ScriptState::imported(monitor_id);
        self.read(&seeded.monitor_id).await
    }
}
