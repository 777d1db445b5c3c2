//! Script assembler: plaintext body + declared locations -> `MonitorScript`.

use super::encoding::encode_script;
use super::entities::{LocationDeclaration, MonitorScript};
use super::signer::LocationSigner;

/// Body written on delete. The remote API has no delete verb for scripts.
pub const DELETE_PLACEHOLDER: &str = " ";

/// Build the remote-facing script for a declared body and locations.
///
/// Tags are always computed from the canonical form of `raw_body`, so the
/// aggregate never carries a tag for a different body.
pub fn assemble(
    raw_body: &str,
    locations: &[LocationDeclaration],
    signer: &LocationSigner,
) -> MonitorScript {
    let text = encode_script(raw_body);
    let locations = signer.sign(&text, locations);
    MonitorScript { text, locations }
}

/// The blank script submitted by delete.
pub fn blank_script() -> MonitorScript {
    MonitorScript {
        text: DELETE_PLACEHOLDER.to_string(),
        locations: Vec::new(),
    }
}
