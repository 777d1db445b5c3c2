//! # Domain Entities
//!
//! Declared inputs, the remote-facing script aggregate and the reconciled
//! resource state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum number of execution locations a declaration may carry.
pub const MAX_LOCATIONS: usize = 1;

/// Characters that would change how an id resolves inside a URL path.
const RESERVED_ID_CHARS: &[char] = &['/', '\\', '?', '#'];

/// Reject monitor ids that are blank or that would not stay a single URL
/// path segment.
pub fn validate_monitor_id(monitor_id: &str) -> Result<(), ValidationError> {
    if monitor_id.trim().is_empty() {
        return Err(ValidationError::EmptyMonitorId);
    }
    if matches!(monitor_id, "." | "..")
        || monitor_id.contains(RESERVED_ID_CHARS)
        || monitor_id.chars().any(char::is_control)
    {
        return Err(ValidationError::InvalidMonitorId {
            monitor_id: monitor_id.to_string(),
        });
    }
    Ok(())
}

/// A named execution location carrying its authentication tag (hex HMAC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub tag: String,
}

/// A location as declared by the caller.
///
/// Any tag supplied here is ignored on submission; the tag sent to the
/// remote is always recomputed from the current body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationDeclaration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl LocationDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: None,
        }
    }
}

/// Remote-facing script aggregate submitted on create/update.
///
/// `text` always holds the canonical (base64) body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonitorScript {
    pub text: String,
    pub locations: Vec<Location>,
}

/// Declared configuration for one script resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptDeclaration {
    pub monitor_id: String,
    pub text: String,
    #[serde(default)]
    pub locations: Vec<LocationDeclaration>,
}

impl ScriptDeclaration {
    pub fn new(monitor_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            monitor_id: monitor_id.into(),
            text: text.into(),
            locations: Vec::new(),
        }
    }

    /// Builder-style method to add a location
    pub fn with_location(mut self, name: impl Into<String>) -> Self {
        self.locations.push(LocationDeclaration::new(name));
        self
    }

    /// Reject declarations the remote contract cannot represent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_monitor_id(&self.monitor_id)?;
        if self.text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if self.locations.len() > MAX_LOCATIONS {
            return Err(ValidationError::TooManyLocations {
                count: self.locations.len(),
                max: MAX_LOCATIONS,
            });
        }
        if let Some(index) = self
            .locations
            .iter()
            .position(|l| l.name.trim().is_empty())
        {
            return Err(ValidationError::EmptyLocationName { index });
        }
        Ok(())
    }
}

/// Local declarative state of a present resource.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptState {
    pub monitor_id: String,
    pub text: String,
    pub locations: Vec<Location>,
}

impl ScriptState {
    /// State seeded by import: only the identity is known.
    pub fn imported(monitor_id: impl Into<String>) -> Self {
        Self {
            monitor_id: monitor_id.into(),
            ..Self::default()
        }
    }
}

/// Lifecycle state of one resource instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResourceState {
    Absent,
    Present(ScriptState),
}

impl ResourceState {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn as_present(&self) -> Option<&ScriptState> {
        match self {
            Self::Present(state) => Some(state),
            Self::Absent => None,
        }
    }

    /// Resource identifier; empty when absent.
    pub fn id(&self) -> &str {
        self.as_present().map_or("", |s| s.monitor_id.as_str())
    }
}
