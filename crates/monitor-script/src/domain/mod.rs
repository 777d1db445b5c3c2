//! Domain Layer - Pure business logic
//!
//! - Canonical body encoding
//! - Location signing (HMAC-SHA256)
//! - Script assembly and reconciliation
//! - Declaration and value-range validation
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - No logging

pub mod assembler;
pub mod encoding;
pub mod entities;
pub mod reconciler;
pub mod secret;
pub mod signer;
pub mod validation;

pub use assembler::{assemble, blank_script, DELETE_PLACEHOLDER};
pub use encoding::{decode_script, encode_script};
pub use entities::{
    Location, LocationDeclaration, MonitorScript, ResourceState, ScriptDeclaration, ScriptState,
    validate_monitor_id, MAX_LOCATIONS,
};
pub use reconciler::{reconcile, verify};
pub use secret::SecureSecret;
pub use signer::{compute_tag, sign_locations, LocationSigner, SigningMode, TAG_HEX_LEN};
