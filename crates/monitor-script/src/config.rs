//! # Configuration
//!
//! Signing and transport settings, loaded from an optional TOML file and then
//! overridden from the environment.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SYNTHETICS_SCRIPT_SECRET` | `security.secret` |
//! | `SYNTHETICS_SIGNING_MODE` | `security.signing_mode` |
//! | `SYNTHETICS_VERIFY_ON_READ` | `security.verify_on_read` |
//! | `SYNTHETICS_ALLOW_LEGACY_SECRET` | `security.allow_legacy_secret` |
//! | `NEW_RELIC_API_KEY` | `api.api_key` |
//! | `NEW_RELIC_SYNTHETICS_URL` | `api.base_url` |
//! | `SYNTHETICS_HTTP_TIMEOUT_SECS` | `api.timeout_secs` |
//!
//! ## Security Requirements
//!
//! - The signing secret MUST be set; it is never compiled into the signer
//! - The legacy shared secret is refused unless explicitly allowed

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::domain::validation::{float_at_least, float_at_most, float_gte};
use crate::domain::{LocationSigner, SecureSecret, SigningMode};
use crate::error::ValidationError;

/// Key the remote verifier was originally provisioned with.
///
/// Only accepted when `allow_legacy_secret` is set.
pub const LEGACY_COMPAT_SECRET: &str = "password123";

/// Accepted range for HTTP timeouts, in seconds.
pub const MIN_TIMEOUT_SECS: f64 = 0.1;
pub const MAX_TIMEOUT_SECS: f64 = 3600.0;

/// Default Synthetics REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://synthetics.newrelic.com/synthetics/api";

/// Complete configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Signing configuration.
    pub security: SecurityConfig,
    /// Remote API configuration.
    pub api: ApiConfig,
}

/// Signing configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// HMAC key for location tags.
    pub secret: SecureSecret,
    /// What each tag authenticates.
    pub signing_mode: SigningMode,
    /// Recompute tags on read and fail on mismatch.
    pub verify_on_read: bool,
    /// Permit `LEGACY_COMPAT_SECRET`.
    pub allow_legacy_secret: bool,
}

impl SecurityConfig {
    pub fn signer(&self) -> LocationSigner {
        LocationSigner::new(self.secret.clone(), self.signing_mode)
    }

    pub fn uses_legacy_secret(&self) -> bool {
        self.secret.as_bytes() == LEGACY_COMPAT_SECRET.as_bytes()
    }
}

/// Remote API configuration.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Synthetics REST API.
    pub base_url: String,
    /// Account API key sent as `X-Api-Key`.
    pub api_key: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: f64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_secs: 30.0,
            connect_timeout_secs: 5.0,
        }
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Signing secret is not set. Set SYNTHETICS_SCRIPT_SECRET or provide security.secret in config.")]
    MissingSecret,

    #[error("Refusing the legacy shared secret. Set SYNTHETICS_ALLOW_LEGACY_SECRET=true to opt in.")]
    LegacySecret,

    #[error("API key is not set. Set NEW_RELIC_API_KEY or provide api.api_key in config.")]
    MissingApiKey,

    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    #[error(transparent)]
    Range(#[from] ValidationError),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ScriptConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Apply overrides from a variable lookup (normally `std::env::var`).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup("SYNTHETICS_SCRIPT_SECRET") {
            self.security.secret = SecureSecret::from_passphrase(&secret);
        }
        if let Some(mode) = lookup("SYNTHETICS_SIGNING_MODE") {
            self.security.signing_mode =
                mode.parse::<SigningMode>().map_err(|reason| ConfigError::InvalidValue {
                    var: "SYNTHETICS_SIGNING_MODE",
                    reason,
                })?;
        }
        if let Some(v) = lookup("SYNTHETICS_VERIFY_ON_READ") {
            self.security.verify_on_read = parse_bool("SYNTHETICS_VERIFY_ON_READ", &v)?;
        }
        if let Some(v) = lookup("SYNTHETICS_ALLOW_LEGACY_SECRET") {
            self.security.allow_legacy_secret = parse_bool("SYNTHETICS_ALLOW_LEGACY_SECRET", &v)?;
        }
        if let Some(key) = lookup("NEW_RELIC_API_KEY") {
            self.api.api_key = key;
        }
        if let Some(url) = lookup("NEW_RELIC_SYNTHETICS_URL") {
            self.api.base_url = url;
        }
        if let Some(v) = lookup("SYNTHETICS_HTTP_TIMEOUT_SECS") {
            self.api.timeout_secs = v.trim().parse::<f64>().map_err(|e| {
                ConfigError::InvalidValue {
                    var: "SYNTHETICS_HTTP_TIMEOUT_SECS",
                    reason: e.to_string(),
                }
            })?;
        }
        Ok(())
    }

    /// Validate the signing configuration.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the secret is empty
    /// - the secret is the legacy shared secret and it was not opted into
    pub fn validate_signing(&self) -> Result<(), ConfigError> {
        if self.security.secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.security.uses_legacy_secret() {
            if !self.security.allow_legacy_secret {
                return Err(ConfigError::LegacySecret);
            }
            warn!("[monitor-script] Signing with the legacy shared secret");
        }
        Ok(())
    }

    /// Validate everything needed to talk to the remote.
    ///
    /// Both timeouts must lie in `MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS`, and the
    /// whole-request timeout must not be shorter than the connect timeout.
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        self.validate_signing()?;
        if self.api.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        let api = &self.api;
        for (key, value) in [
            ("api.timeout_secs", api.timeout_secs),
            ("api.connect_timeout_secs", api.connect_timeout_secs),
        ] {
            float_at_least(key, value, MIN_TIMEOUT_SECS)?;
            float_at_most(key, value, MAX_TIMEOUT_SECS)?;
        }
        float_gte("api.timeout_secs", api.timeout_secs, api.connect_timeout_secs)?;
        Ok(())
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            var,
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

/// Load configuration from an optional file, then the process environment.
pub fn load_config(path: Option<&Path>) -> Result<ScriptConfig, ConfigError> {
    let mut config = match path {
        Some(path) => ScriptConfig::from_file(path)?,
        None => ScriptConfig::default(),
    };
    config.apply_overrides(|name| std::env::var(name).ok())?;
    Ok(config)
}
