//! # Location Signer
//!
//! Computes the per-location authentication tag attached to a monitor script.
//!
//! ## Tag Construction
//!
//! `tag = hex(HMAC-SHA256(secret, message))`, always over the *canonical*
//! (encoded) body.
//!
//! | Mode | Authenticated message | Tags across locations |
//! |------|-----------------------|-----------------------|
//! | `BodyOnly` (default) | `canonical_body` | identical |
//! | `NameBound` | `name \|\| 0x00 \|\| canonical_body` | differ per name |
//!
//! `BodyOnly` is what the remote verifier currently expects. `NameBound`
//! changes observable output and must be selected explicitly.
//!
//! This module performs no logging and no I/O.

use std::str::FromStr;

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use super::entities::{Location, LocationDeclaration};
use super::secret::SecureSecret;

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex-encoded tag (256-bit MAC).
pub const TAG_HEX_LEN: usize = 64;

/// What the location tag authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SigningMode {
    /// Tag covers the canonical body only.
    #[default]
    BodyOnly,
    /// Tag covers the location name and the canonical body.
    NameBound,
}

impl FromStr for SigningMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "body_only" | "body-only" => Ok(Self::BodyOnly),
            "name_bound" | "name-bound" => Ok(Self::NameBound),
            other => Err(format!("unknown signing mode: {other}")),
        }
    }
}

fn new_mac(secret: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length")
}

fn mac_for(secret: &[u8], mode: SigningMode, name: &str, canonical_body: &str) -> HmacSha256 {
    let mut mac = new_mac(secret);
    if mode == SigningMode::NameBound {
        mac.update(name.as_bytes());
        mac.update(&[0u8]);
    }
    mac.update(canonical_body.as_bytes());
    mac
}

/// Compute the hex tag for one location.
pub fn compute_tag(secret: &[u8], mode: SigningMode, name: &str, canonical_body: &str) -> String {
    hex::encode(mac_for(secret, mode, name, canonical_body).finalize().into_bytes())
}

/// Sign every location name against the canonical body (body-only mode).
///
/// An empty input yields an empty output.
pub fn sign_locations<'a>(
    canonical_body: &str,
    names: impl IntoIterator<Item = &'a str>,
    secret: &[u8],
) -> Vec<Location> {
    names
        .into_iter()
        .map(|name| Location {
            name: name.to_string(),
            tag: compute_tag(secret, SigningMode::BodyOnly, name, canonical_body),
        })
        .collect()
}

/// Keyed signer holding the configured secret and mode.
#[derive(Debug, Clone)]
pub struct LocationSigner {
    secret: SecureSecret,
    mode: SigningMode,
}

impl LocationSigner {
    pub fn new(secret: SecureSecret, mode: SigningMode) -> Self {
        Self { secret, mode }
    }

    /// Signer in the default body-only mode.
    pub fn body_only(secret: SecureSecret) -> Self {
        Self::new(secret, SigningMode::BodyOnly)
    }

    pub fn mode(&self) -> SigningMode {
        self.mode
    }

    /// Tag for a single location.
    pub fn tag(&self, name: &str, canonical_body: &str) -> String {
        compute_tag(self.secret.as_bytes(), self.mode, name, canonical_body)
    }

    /// Sign declared locations, preserving order. Declared tags are discarded.
    pub fn sign(&self, canonical_body: &str, locations: &[LocationDeclaration]) -> Vec<Location> {
        locations
            .iter()
            .map(|l| Location {
                name: l.name.clone(),
                tag: self.tag(&l.name, canonical_body),
            })
            .collect()
    }

    /// Constant-time check of a hex tag against the canonical body.
    pub fn verify(&self, name: &str, canonical_body: &str, tag: &str) -> bool {
        let Ok(raw) = hex::decode(tag) else {
            return false;
        };
        mac_for(self.secret.as_bytes(), self.mode, name, canonical_body)
            .verify_slice(&raw)
            .is_ok()
    }
}
