//! # Lifecycle Integration Tests
//!
//! Drives a resource Absent → Present → Present → Absent through the public
//! API, plus the import path and remote failure handling.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use monitor_script::domain::{encode_script, TAG_HEX_LEN};
    use monitor_script::{
        InMemorySyntheticsApi, LocationSigner, MonitorScript, MonitorScriptApi,
        MonitorScriptService, RemoteError, ResourceState, ScriptConfig, ScriptDeclaration,
        ScriptError, ScriptState, SecureSecret, SyntheticsApi,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const SECRET: &str = "integration-secret";

    fn signer() -> LocationSigner {
        LocationSigner::body_only(SecureSecret::from_passphrase(SECRET))
    }

    fn service_over(
        api: Arc<InMemorySyntheticsApi>,
    ) -> MonitorScriptService<InMemorySyntheticsApi> {
        MonitorScriptService::new(api, signer())
    }

    fn expect_present(state: ResourceState) -> ScriptState {
        match state {
            ResourceState::Present(state) => state,
            ResourceState::Absent => panic!("expected present resource"),
        }
    }

    /// Remote whose GET always fails with a server error; PUT succeeds.
    #[derive(Default)]
    struct FlakyReadApi {
        puts: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl SyntheticsApi for FlakyReadApi {
        async fn update_monitor_script(
            &self,
            _monitor_id: &str,
            _script: &MonitorScript,
        ) -> Result<(), RemoteError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn get_monitor_script(&self, _monitor_id: &str) -> Result<MonitorScript, RemoteError> {
            Err(RemoteError::Status {
                status: 503,
                message: "service unavailable".to_string(),
            })
        }
    }

    // =============================================================================
    // FULL LIFECYCLE
    // =============================================================================

    #[tokio::test]
    async fn test_full_lifecycle() {
        let api = Arc::new(InMemorySyntheticsApi::new());
        let service = service_over(api.clone());

        // Create
        let decl = ScriptDeclaration::new("abc123", "GET https://example.com").with_location("us-east");
        let created = expect_present(service.create(&decl).await.unwrap());
        assert_eq!(created.text, "GET https://example.com");
        let first = api.last_submission().unwrap().1;
        assert_eq!(first.text, "R0VUIGh0dHBzOi8vZXhhbXBsZS5jb20=");
        assert_eq!(first.locations[0].tag.len(), TAG_HEX_LEN);

        // Refresh is idempotent
        let refreshed = expect_present(service.read("abc123").await.unwrap());
        assert_eq!(refreshed, created);

        // Update with a new body re-signs
        let decl = ScriptDeclaration::new("abc123", "GET https://example.org").with_location("us-east");
        let updated = expect_present(service.update(&created, &decl).await.unwrap());
        let second = api.last_submission().unwrap().1;
        assert_eq!(updated.text, "GET https://example.org");
        assert_eq!(second.locations[0].name, first.locations[0].name);
        assert_ne!(second.locations[0].tag, first.locations[0].tag);

        // Delete blanks the script
        let deleted = service.delete(&updated).await.unwrap();
        assert_eq!(deleted, ResourceState::Absent);
        assert_eq!(api.get("abc123").unwrap().text, " ");

        // Recreate after delete
        let recreated = expect_present(service.create(&decl).await.unwrap());
        assert_eq!(recreated.text, "GET https://example.org");
        assert_eq!(api.submissions().len(), 4);
    }

    #[tokio::test]
    async fn test_import_then_manage() {
        let api = Arc::new(InMemorySyntheticsApi::new());
        let body = encode_script("existing body");
        api.insert(
            "abc123",
            MonitorScript {
                locations: vec![monitor_script::Location {
                    name: "eu-west".to_string(),
                    tag: signer().tag("eu-west", &body),
                }],
                text: body,
            },
        );
        let service = service_over(api.clone());

        let imported = expect_present(service.import("abc123").await.unwrap());
        assert_eq!(imported.monitor_id, "abc123");
        assert_eq!(imported.text, "existing body");
        assert_eq!(imported.locations[0].name, "eu-west");

        let decl = ScriptDeclaration::new("abc123", "existing body").with_location("eu-west");
        let updated = expect_present(service.update(&imported, &decl).await.unwrap());
        assert_eq!(updated.locations, imported.locations);
    }

    #[tokio::test]
    async fn test_monitor_removed_out_of_band() {
        let api = Arc::new(InMemorySyntheticsApi::new());
        let service = service_over(api.clone());
        service
            .create(&ScriptDeclaration::new("abc123", "body"))
            .await
            .unwrap();

        api.remove("abc123");

        assert_eq!(service.read("abc123").await.unwrap(), ResourceState::Absent);
    }

    // =============================================================================
    // FAILURE HANDLING
    // =============================================================================

    #[tokio::test]
    async fn test_read_after_write_failure_propagates() {
        let api = Arc::new(FlakyReadApi::default());
        let service = MonitorScriptService::new(api.clone(), signer());

        let err = service
            .create(&ScriptDeclaration::new("abc123", "body"))
            .await
            .unwrap_err();

        assert_eq!(api.puts.load(Ordering::SeqCst), 1);
        assert!(matches!(err, ScriptError::Remote(RemoteError::Status { status: 503, .. })));
        assert_eq!(err.to_string(), "Remote returned HTTP 503: service unavailable");
    }

    #[tokio::test]
    async fn test_no_retries_on_remote_failure() {
        let api = Arc::new(FlakyReadApi::default());
        let service = MonitorScriptService::new(api.clone(), signer());

        assert!(service.read("abc123").await.is_err());
        assert!(service
            .delete(&ScriptState::imported("abc123"))
            .await
            .is_ok());
        assert_eq!(api.puts.load(Ordering::SeqCst), 1);
    }

    // =============================================================================
    // CONFIGURATION WIRING
    // =============================================================================

    #[tokio::test]
    async fn test_service_from_toml_config() {
        let config = ScriptConfig::from_toml_str(
            r#"
            [security]
            secret = "integration-secret"
            verify_on_read = true
            "#,
        )
        .unwrap();
        config.validate_signing().unwrap();

        let api = Arc::new(InMemorySyntheticsApi::new());
        let service = MonitorScriptService::from_config(api.clone(), &config.security);
        let decl = ScriptDeclaration::new("abc123", "body").with_location("us-east");
        let state = expect_present(service.create(&decl).await.unwrap());

        // Same secret, same mode: tags agree with a directly built signer
        assert_eq!(
            state.locations[0].tag,
            signer().tag("us-east", &encode_script("body"))
        );
    }

    #[test]
    fn test_resource_state_serializes_for_cli_output() {
        let state = ResourceState::Present(ScriptState {
            monitor_id: "abc123".to_string(),
            text: "body".to_string(),
            locations: Vec::new(),
        });
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "present");
        assert_eq!(json["monitor_id"], "abc123");
        assert_eq!(json["text"], "body");
    }
}
