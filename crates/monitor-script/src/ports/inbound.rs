//! Inbound Ports (Driving Ports)
//!
//! The create/read/update/delete/import contract exposed to a
//! resource-lifecycle framework.

use async_trait::async_trait;

use crate::domain::{ResourceState, ScriptDeclaration, ScriptState};
use crate::error::ScriptError;

/// Monitor script lifecycle API (Driving Port)
///
/// | Operation | From | To |
/// |-----------|------|----|
/// | `create` | Absent | Present |
/// | `read` | Present | Present, or Absent on remote NotFound |
/// | `update` | Present | Present |
/// | `delete` | Present | Absent |
/// | `import` | Absent | Present |
///
/// On error the caller keeps its previous state.
#[async_trait]
pub trait MonitorScriptApi: Send + Sync {
    /// Attach (or overwrite) the declared script, then read it back.
    async fn create(&self, declaration: &ScriptDeclaration) -> Result<ResourceState, ScriptError>;

    /// Refresh local state from the remote.
    async fn read(&self, monitor_id: &str) -> Result<ResourceState, ScriptError>;

    /// Fully replace the script of an existing resource, then read it back.
    ///
    /// A changed `monitor_id` replaces the resource: the old script is
    /// blanked and the declaration is created under the new id.
    async fn update(
        &self,
        current: &ScriptState,
        declaration: &ScriptDeclaration,
    ) -> Result<ResourceState, ScriptError>;

    /// Blank the remote script and clear local identity.
    async fn delete(&self, current: &ScriptState) -> Result<ResourceState, ScriptError>;

    /// Adopt an existing monitor's script by id, then read it.
    async fn import(&self, monitor_id: &str) -> Result<ResourceState, ScriptError>;
}
