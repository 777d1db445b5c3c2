//! # Property Tests
//!
//! Round-trip and tag properties over the public domain API.

#[cfg(test)]
mod tests {
    use monitor_script::domain::{assemble, decode_script, encode_script, reconcile};
    use monitor_script::{LocationDeclaration, LocationSigner, SecureSecret, SigningMode};
    use proptest::prelude::*;

    fn signer(mode: SigningMode) -> LocationSigner {
        LocationSigner::new(SecureSecret::from_passphrase("property-secret"), mode)
    }

    proptest! {
        #[test]
        fn prop_assemble_then_reconcile_recovers_declaration(
            body in any::<String>(),
            name in proptest::option::of("[a-z]{2,6}-[a-z]{2,6}"),
        ) {
            let declared: Vec<_> = name.iter().cloned().map(LocationDeclaration::new).collect();
            let script = assemble(&body, &declared, &signer(SigningMode::BodyOnly));
            let state = reconcile("m", &script);

            prop_assert_eq!(&state.text, &body);
            let names: Vec<_> = state.locations.iter().map(|l| l.name.clone()).collect();
            prop_assert_eq!(names, name.into_iter().collect::<Vec<_>>());
            prop_assert_eq!(state.locations, script.locations);
        }

        #[test]
        fn prop_canonical_encoding_round_trips(body in any::<String>()) {
            prop_assert_eq!(decode_script(&encode_script(&body)).unwrap(), body);
        }

        #[test]
        fn prop_every_submitted_tag_verifies(body in any::<String>(), bound in any::<bool>()) {
            let mode = if bound { SigningMode::NameBound } else { SigningMode::BodyOnly };
            let signer = signer(mode);
            let script = assemble(&body, &[LocationDeclaration::new("us-east")], &signer);
            prop_assert!(signer.verify("us-east", &script.text, &script.locations[0].tag));
        }
    }
}
