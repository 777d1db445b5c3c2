//! # State Reconciler
//!
//! Projects a remote `MonitorScript` back into local declarative state.
//!
//! - A body in canonical form is decoded back to plaintext.
//! - Anything else (notably the blank delete placeholder) is kept verbatim.
//!
//! The remote stores no marker saying who encoded a body, so the projection
//! is purely syntactic: a plaintext script written by another client that
//! happens to be padded base64 of UTF-8 (`YWJj`) reconciles as its decoding
//! (`abc`). Scripts written through this crate always round-trip.
//! - Locations are copied in order; tags are taken as reported.
//!
//! `reconcile` performs no integrity check. `verify` recomputes every tag
//! from the returned body and reports the first mismatch.

use super::encoding::decode_script;
use super::entities::{MonitorScript, ScriptState};
use super::signer::LocationSigner;
use crate::error::ReconcileError;

/// Plaintext view of a remote body.
pub fn project_body(remote_text: &str) -> String {
    decode_script(remote_text).unwrap_or_else(|_| remote_text.to_string())
}

/// Project remote state into local fields without verification.
pub fn reconcile(monitor_id: &str, remote: &MonitorScript) -> ScriptState {
    ScriptState {
        monitor_id: monitor_id.to_string(),
        text: project_body(&remote.text),
        locations: remote.locations.clone(),
    }
}

/// Project remote state, rejecting any location whose tag does not match
/// the returned body.
pub fn verify(
    monitor_id: &str,
    remote: &MonitorScript,
    signer: &LocationSigner,
) -> Result<ScriptState, ReconcileError> {
    for location in &remote.locations {
        if !signer.verify(&location.name, &remote.text, &location.tag) {
            return Err(ReconcileError::TamperDetected {
                location: location.name.clone(),
                expected: signer.tag(&location.name, &remote.text),
                actual: location.tag.clone(),
            });
        }
    }
    Ok(reconcile(monitor_id, remote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assembler::{assemble, blank_script};
    use crate::domain::entities::{Location, LocationDeclaration};
    use crate::domain::secret::SecureSecret;

    fn signer() -> LocationSigner {
        LocationSigner::body_only(SecureSecret::from_passphrase("test-secret"))
    }

    #[test]
    fn test_assemble_then_reconcile_round_trips() {
        let script = assemble(
            "GET https://example.com",
            &[LocationDeclaration::new("us-east")],
            &signer(),
        );
        let state = reconcile("m-1", &script);
        assert_eq!(state.monitor_id, "m-1");
        assert_eq!(state.text, "GET https://example.com");
        assert_eq!(state.locations, script.locations);
    }

    #[test]
    fn test_blank_placeholder_kept_verbatim() {
        let state = reconcile("m-1", &blank_script());
        assert_eq!(state.text, " ");
        assert!(state.locations.is_empty());
    }

    #[test]
    fn test_foreign_body_decoded_when_it_parses_as_base64() {
        let remote = |text: &str| MonitorScript {
            text: text.to_string(),
            locations: Vec::new(),
        };
        assert_eq!(reconcile("m", &remote("YWJj")).text, "abc");
        assert_eq!(reconcile("m", &remote("abc")).text, "abc");
        assert_eq!(reconcile("m", &remote("GET https://example.com")).text, "GET https://example.com");
    }

    #[test]
    fn test_location_order_preserved() {
        let remote = MonitorScript {
            text: "Ym9keQ==".to_string(),
            locations: vec![
                Location { name: "b".into(), tag: "2".into() },
                Location { name: "a".into(), tag: "1".into() },
            ],
        };
        let names: Vec<_> = reconcile("m", &remote)
            .locations
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_reconcile_trusts_remote_tags() {
        let mut script = assemble("body", &[LocationDeclaration::new("us-east")], &signer());
        script.locations[0].tag = "00".repeat(32);
        let state = reconcile("m", &script);
        assert_eq!(state.locations[0].tag, "00".repeat(32));
    }

    #[test]
    fn test_verify_accepts_untampered_script() {
        let script = assemble("body", &[LocationDeclaration::new("us-east")], &signer());
        assert!(verify("m", &script, &signer()).is_ok());
    }

    #[test]
    fn test_verify_detects_body_tampering() {
        let mut script = assemble("body", &[LocationDeclaration::new("us-east")], &signer());
        let original_tag = script.locations[0].tag.clone();
        script.text = crate::domain::encoding::encode_script("evil body");

        match verify("m", &script, &signer()) {
            Err(ReconcileError::TamperDetected { location, actual, expected }) => {
                assert_eq!(location, "us-east");
                assert_eq!(actual, original_tag);
                assert_ne!(expected, original_tag);
            }
            other => panic!("expected tamper detection, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_blank_script_has_nothing_to_check() {
        assert!(verify("m", &blank_script(), &signer()).is_ok());
    }
}
