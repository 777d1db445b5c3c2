//! # Synthetics Monitor Script
//!
//! Lifecycle management for the script attached to a synthetic monitor, with
//! a per-location HMAC tag that lets the remote execution environment verify
//! the script was not altered in transit or at rest.
//!
//! ## Data Flow
//!
//! ```text
//! ScriptDeclaration ──encode──→ canonical body ──sign──→ MonitorScript
//!                                                           │
//!                                          PUT (create/update/delete)
//!                                                           ↓
//!                                                   Synthetics API
//!                                                           │
//!                                                  GET (read/import)
//!                                                           ↓
//! ResourceState ←──────────── reconcile ←──────────── MonitorScript
//! ```
//!
//! ## Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Canonical signing | Tags are computed over the base64 body, never the raw text |
//! | Fresh tags | A submitted tag always matches the body submitted with it |
//! | Name independence | In the default mode every location gets the same tag |
//! | Delete as blank | Delete overwrites the script with a single space |
//! | Not found is absent | A remote 404 on read clears the resource without error |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Encoding, signing, assembly, reconciliation (pure)
//! - `ports/` - `MonitorScriptApi` (inbound), `SyntheticsApi` (outbound)
//! - `service/` - Lifecycle controller
//! - `adapters/` - In-memory and REST implementations of `SyntheticsApi`
//! - `config` - Secret and transport configuration
//!
//! ## Usage
//!
//! ```ignore
//! use monitor_script::{InMemorySyntheticsApi, MonitorScriptApi, MonitorScriptService};
//! use monitor_script::{LocationSigner, ScriptDeclaration, SecureSecret};
//! use std::sync::Arc;
//!
//! let api = Arc::new(InMemorySyntheticsApi::new());
//! let signer = LocationSigner::body_only(SecureSecret::from_passphrase("s3cret"));
//! let service = MonitorScriptService::new(api, signer);
//!
//! let decl = ScriptDeclaration::new("abc123", "GET https://example.com").with_location("us-east");
//! let state = service.create(&decl).await?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::InMemorySyntheticsApi;
#[cfg(feature = "rest")]
pub use adapters::RestSyntheticsApi;
pub use config::{load_config, ApiConfig, ConfigError, ScriptConfig, SecurityConfig};
pub use domain::{
    Location, LocationDeclaration, LocationSigner, MonitorScript, ResourceState, ScriptDeclaration,
    ScriptState, SecureSecret, SigningMode,
};
pub use error::{EncodingError, ReconcileError, RemoteError, ScriptError, ValidationError};
pub use ports::{MonitorScriptApi, SyntheticsApi};
pub use service::MonitorScriptService;
