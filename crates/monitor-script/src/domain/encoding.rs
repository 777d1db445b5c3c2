//! Canonical script body encoding (standard padded base64).
//!
//! The canonical form is what gets transported and what gets signed.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::EncodingError;

/// Encode a plaintext script body into its canonical transport form.
pub fn encode_script(raw: &str) -> String {
    STANDARD.encode(raw.as_bytes())
}

/// Decode a canonical body back into plaintext.
pub fn decode_script(canonical: &str) -> Result<String, EncodingError> {
    let bytes = STANDARD
        .decode(canonical.as_bytes())
        .map_err(|e| EncodingError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| EncodingError::InvalidUtf8)
}
