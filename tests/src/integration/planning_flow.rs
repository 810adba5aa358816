//! # Planning Flow
//!
//! End-to-end runs of the planning service: a test-selection provider feeds
//! the packer and the shards land as `shard<id>.txt` files on disk.
//!
//! ## Flows Tested:
//!
//! 1. **Built-in list → shard files**: the reference layout for a 30 minute budget
//! 2. **JSON file → shard files**: records read from disk, stale output cleared
//! 3. **Failed selection → fallback**: the built-in list replaces a failing provider

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use tempfile::tempdir;

    use shard_packer::{
        builtin_tests, BuiltinTestSelection, JsonFileTestSelection, MockTestSelection,
        PackingConfig, SelectionError, Shard, ShardError, ShardFileWriter, ShardPlanService,
        ShardPlanningApi, ShardReporter, TestRecord, TestSelectionProvider, TracingReporter,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn read_manifest(dir: &std::path::Path, id: u32) -> Vec<String> {
        fs::read_to_string(dir.join(format!("shard{}.txt", id)))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Reporter that records shard totals instead of logging them.
    #[derive(Default)]
    struct RecordingReporter {
        totals: Mutex<Vec<f64>>,
    }

    impl ShardReporter for RecordingReporter {
        fn report(&self, shards: &[Shard<'_>], _duration_limit: f64) {
            self.totals
                .lock()
                .extend(shards.iter().map(Shard::total_duration));
        }
    }

    /// Provider that is never reachable.
    struct OfflineService;

    #[async_trait]
    impl TestSelectionProvider for OfflineService {
        async fn fetch_tests(&self) -> Result<Vec<TestRecord>, SelectionError> {
            Err(SelectionError::Unavailable("connection refused".to_string()))
        }

        fn source(&self) -> &str {
            "offline"
        }
    }

    // =============================================================================
    // BUILT-IN LIST → SHARD FILES
    // =============================================================================

    #[tokio::test]
    async fn test_builtin_list_writes_reference_layout() {
        let out = tempdir().unwrap();
        let dir = out.path().join("shards");
        let service = ShardPlanService::new(
            Arc::new(BuiltinTestSelection),
            Arc::new(ShardFileWriter::new(&dir)),
            Arc::new(TracingReporter),
        );

        let summary = service.plan().await.unwrap();

        assert_eq!(summary.shard_count, 4);
        assert_eq!(summary.test_count, 12);
        assert_eq!(summary.total_duration, 95.0);
        assert_eq!(summary.max_shard_duration, 30.0);
        assert!(summary.oversized.is_empty());
        assert_eq!(summary.artifacts.len(), 4);

        assert_eq!(
            read_manifest(&dir, 0),
            vec![
                "e2e_test12.test.ts",
                "e2e_test4.test.ts",
                "e2e_test8.test.ts",
                "e2e_test5.test.ts",
                "e2e_test2.test.ts",
            ]
        );
        assert_eq!(
            read_manifest(&dir, 1),
            vec!["e2e_test10.test.ts", "e2e_test11.test.ts"]
        );
        assert_eq!(
            read_manifest(&dir, 2),
            vec!["e2e_test3.test.ts", "e2e_test6.test.ts", "e2e_test9.test.ts"]
        );
        assert_eq!(
            read_manifest(&dir, 3),
            vec!["e2e_test1.test.ts", "e2e_test7.test.ts"]
        );
    }

    // =============================================================================
    // JSON FILE → SHARD FILES
    // =============================================================================

    #[tokio::test]
    async fn test_json_file_replaces_stale_output() {
        let out = tempdir().unwrap();
        let input = out.path().join("selection.json");
        fs::write(
            &input,
            r#"[
                {"test": "login.test.ts", "duration": 12.5},
                {"test": "checkout.test.ts", "duration": 40},
                {"test": "search.test.ts", "duration": 17.5}
            ]"#,
        )
        .unwrap();

        let dir = out.path().join("shards");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("shard7.txt"), "stale.test.ts").unwrap();

        let reporter = Arc::new(RecordingReporter::default());
        let service = ShardPlanService::new(
            Arc::new(JsonFileTestSelection::new(&input)),
            Arc::new(ShardFileWriter::new(&dir)),
            reporter.clone(),
        );

        let summary = service.plan().await.unwrap();

        assert_eq!(summary.shard_count, 2);
        assert_eq!(summary.oversized, vec!["checkout.test.ts".to_string()]);
        assert_eq!(*reporter.totals.lock(), vec![40.0, 30.0]);
        assert_eq!(read_manifest(&dir, 0), vec!["checkout.test.ts"]);
        assert_eq!(
            read_manifest(&dir, 1),
            vec!["search.test.ts", "login.test.ts"]
        );
        assert!(!dir.join("shard7.txt").exists());
    }

    #[tokio::test]
    async fn test_missing_json_file_is_a_selection_error() {
        let out = tempdir().unwrap();
        let service = ShardPlanService::new(
            Arc::new(JsonFileTestSelection::new(out.path().join("missing.json"))),
            Arc::new(ShardFileWriter::new(out.path().join("shards"))),
            Arc::new(TracingReporter),
        );

        assert!(matches!(
            service.plan().await,
            Err(ShardError::Selection(SelectionError::Io { .. }))
        ));
    }

    // =============================================================================
    // FAILED SELECTION → FALLBACK
    // =============================================================================

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_builtin_list() {
        let out = tempdir().unwrap();
        let dir = out.path().join("shards");
        let service = ShardPlanService::new(
            Arc::new(OfflineService),
            Arc::new(ShardFileWriter::new(&dir)),
            Arc::new(TracingReporter),
        )
        .with_fallback(Arc::new(BuiltinTestSelection));

        let summary = service.plan().await.unwrap();

        assert_eq!(summary.test_count, builtin_tests().len());
        assert_eq!(summary.shard_count, 4);
        assert!(dir.join("shard3.txt").exists());
    }

    #[tokio::test]
    async fn test_unreachable_service_without_fallback_writes_nothing() {
        let out = tempdir().unwrap();
        let dir = out.path().join("shards");
        let service = ShardPlanService::new(
            Arc::new(OfflineService),
            Arc::new(ShardFileWriter::new(&dir)),
            Arc::new(TracingReporter),
        );

        let result = service.plan().await;

        assert!(matches!(
            result,
            Err(ShardError::Selection(SelectionError::Unavailable(_)))
        ));
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_failing_fallback_reports_fallback_error() {
        let out = tempdir().unwrap();
        let service = ShardPlanService::new(
            Arc::new(OfflineService),
            Arc::new(ShardFileWriter::new(out.path().join("shards"))),
            Arc::new(TracingReporter),
        )
        .with_fallback(Arc::new(MockTestSelection::failing("also down")));

        assert!(service.plan().await.is_err());
    }

    #[tokio::test]
    async fn test_custom_limit_single_shard() {
        let out = tempdir().unwrap();
        let dir = out.path().join("shards");
        let service = ShardPlanService::new(
            Arc::new(BuiltinTestSelection),
            Arc::new(ShardFileWriter::new(&dir)),
            Arc::new(TracingReporter),
        )
        .with_config(PackingConfig::new(95.0).unwrap())
        .unwrap();

        let summary = service.plan().await.unwrap();

        assert_eq!(summary.shard_count, 1);
        assert_eq!(read_manifest(&dir, 0).len(), 12);
        assert_eq!(summary.shards[0].tests.len(), 12);
    }
}
