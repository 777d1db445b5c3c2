//! HTTP client for the Synthetics monitor script endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::types::ScriptPayload;
use crate::config::{ApiConfig, MIN_TIMEOUT_SECS};
use crate::domain::{validate_monitor_id, MonitorScript};
use crate::error::RemoteError;
use crate::ports::outbound::SyntheticsApi;

const API_KEY_HEADER: &str = "X-Api-Key";

/// Synthetics REST API client (Driven Adapter).
pub struct RestSyntheticsApi {
    client: Client,
    base_url: Url,
    api_key: String,
}

fn timeout(name: &str, secs: f64) -> Result<Duration, RemoteError> {
    Duration::try_from_secs_f64(secs.max(MIN_TIMEOUT_SECS))
        .map_err(|e| RemoteError::Transport(format!("Invalid {name} {secs}: {e}")))
}

impl RestSyntheticsApi {
    /// Create a new client from API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, RemoteError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| RemoteError::Transport(format!("Invalid base URL {}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::Transport(format!(
                "Invalid base URL {}: cannot carry a path",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout("timeout", config.timeout_secs)?)
            .connect_timeout(timeout("connect timeout", config.connect_timeout_secs)?)
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// `{base}/v3/monitors/{id}/script`, with the id percent-encoded as one
    /// path segment.
    fn script_url(&self, monitor_id: &str) -> Result<Url, RemoteError> {
        validate_monitor_id(monitor_id).map_err(|e| RemoteError::Transport(e.to_string()))?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RemoteError::Transport(format!("Invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v3", "monitors", monitor_id, "script"]);
        Ok(url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> RemoteError {
        if e.is_connect() {
            RemoteError::Connection(format!("Cannot connect to {}", self.base_url))
        } else {
            RemoteError::Transport(e.to_string())
        }
    }
}

/// Map a non-success HTTP status to a `RemoteError`.
pub fn classify_status(status: StatusCode, monitor_id: &str, body: String) -> RemoteError {
    if status == StatusCode::NOT_FOUND {
        RemoteError::NotFound {
            monitor_id: monitor_id.to_string(),
        }
    } else {
        RemoteError::Status {
            status: status.as_u16(),
            message: body,
        }
    }
}

#[async_trait]
impl SyntheticsApi for RestSyntheticsApi {
    async fn update_monitor_script(
        &self,
        monitor_id: &str,
        script: &MonitorScript,
    ) -> Result<(), RemoteError> {
        let url = self.script_url(monitor_id)?;
        debug!(url = %url, "[monitor-script] PUT monitor script");

        let response = self
            .client
            .put(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&ScriptPayload::from(script))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, monitor_id, body));
        }
        Ok(())
    }

    async fn get_monitor_script(&self, monitor_id: &str) -> Result<MonitorScript, RemoteError> {
        let url = self.script_url(monitor_id)?;
        debug!(url = %url, "[monitor-script] GET monitor script");

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, monitor_id, body));
        }

        let payload: ScriptPayload = response
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(payload.into())
    }
}
