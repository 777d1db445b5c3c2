//! Wire types for the monitor script endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::{Location, MonitorScript};

/// Body of `GET`/`PUT /v3/monitors/{id}/script`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptPayload {
    pub script_text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub script_locations: Vec<ScriptLocationPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptLocationPayload {
    pub name: String,
    pub hmac: String,
}

impl From<&MonitorScript> for ScriptPayload {
    fn from(script: &MonitorScript) -> Self {
        Self {
            script_text: script.text.clone(),
            script_locations: script
                .locations
                .iter()
                .map(|l| ScriptLocationPayload {
                    name: l.name.clone(),
                    hmac: l.tag.clone(),
                })
                .collect(),
        }
    }
}

impl From<ScriptPayload> for MonitorScript {
    fn from(payload: ScriptPayload) -> Self {
        Self {
            text: payload.script_text,
            locations: payload
                .script_locations
                .into_iter()
                .map(|l| Location {
                    name: l.name,
                    tag: l.hmac,
                })
                .collect(),
        }
    }
}
