//! Error types for the monitor script resource

use thiserror::Error;

/// Errors surfaced by the lifecycle controller.
///
/// Remote failures are carried through unchanged so the caller sees the
/// transport's own message.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Invalid declaration: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

impl ScriptError {
    /// True when the remote service reported the monitor id as unknown.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote(RemoteError::NotFound { .. }))
    }
}

/// Errors from the remote Synthetics service (driven port).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("Monitor script not found: {monitor_id}")]
    NotFound { monitor_id: String },

    #[error("Remote returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Canonical body decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Script body is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("Decoded script body is not valid UTF-8")]
    InvalidUtf8,
}

/// Integrity failures detected while reconciling remote state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("Tamper detected for location {location}: expected tag {expected}, got {actual}")]
    TamperDetected {
        location: String,
        expected: String,
        actual: String,
    },
}

/// Declaration and value-range validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("monitor_id must not be empty")]
    EmptyMonitorId,

    #[error("monitor_id {monitor_id:?} must be a single URL path segment")]
    InvalidMonitorId { monitor_id: String },

    #[error("text must not be empty")]
    EmptyText,

    #[error("Too many locations: {count} > {max}")]
    TooManyLocations { count: usize, max: usize },

    #[error("Location {index} has an empty name")]
    EmptyLocationName { index: usize },

    #[error("expected {key} to be greater than or equal to {gte}, got {value}")]
    BelowMinimum { key: String, gte: f64, value: f64 },

    #[error("expected {key} to be at least {min:.6}, got {value:.6}")]
    NotAtLeast { key: String, min: f64, value: f64 },

    #[error("expected {key} to be at most {max:.6}, got {value:e}")]
    NotAtMost { key: String, max: f64, value: f64 },
}
