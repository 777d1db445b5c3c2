//! # Signing Secret
//!
//! Wrapper for the location-signing key that zeroizes memory on drop.
//!
//! ## Security
//!
//! The key is supplied by configuration (environment or config file) and is
//! never embedded in the signer. The wrapper keeps it out of logs and clears
//! it when dropped.

use serde::{Deserialize, Deserializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// HMAC key of arbitrary length that zeroizes on drop.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureSecret {
    inner: Vec<u8>,
}

impl SecureSecret {
    /// Create a new secure secret from raw key bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: bytes.into(),
        }
    }

    /// Create from a passphrase; the key is its UTF-8 bytes.
    pub fn from_passphrase(passphrase: &str) -> Self {
        Self::new(passphrase.as_bytes())
    }

    /// Create from a hex-encoded key.
    pub fn from_hex(encoded: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(encoded.trim()).map(Self::new)
    }

    /// Get the key bytes (use carefully!).
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl std::fmt::Debug for SecureSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecureSecret(***)")
    }
}

// Config files carry the passphrase as a plain string.
impl<'de> Deserialize<'de> for SecureSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_passphrase(&s))
    }
}
