//! # Outbound Ports
//!
//! Traits for external collaborators: test selection, shard persistence and
//! diagnostics.

use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{SelectionError, Shard, ShardError, ShardId, TestRecord};

/// Test-selection provider - outbound port.
///
/// Supplies the tests relevant to the current change list.
#[async_trait]
pub trait TestSelectionProvider: Send + Sync {
    /// Fetch the selected tests with their durations.
    async fn fetch_tests(&self) -> Result<Vec<TestRecord>, SelectionError>;

    /// Short name used in logs.
    fn source(&self) -> &str;
}

/// Shard persistence - outbound port.
pub trait ShardSink: Send + Sync {
    /// Persist one artifact per shard, returning the artifact locations.
    fn persist(&self, shards: &[Shard<'_>]) -> Result<Vec<PathBuf>, ShardError>;
}

/// Diagnostics sink - outbound port.
pub trait ShardReporter: Send + Sync {
    /// Report the packed shards.
    fn report(&self, shards: &[Shard<'_>], duration_limit: f64);
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Mock test selection returning a fixed result.
#[derive(Clone, Debug, Default)]
pub struct MockTestSelection {
    /// Tests to return.
    pub tests: Vec<TestRecord>,
    /// When set, fail with `SelectionError::Unavailable(reason)`.
    pub failure: Option<String>,
}

impl MockTestSelection {
    /// Provider that always succeeds with `tests`.
    pub fn with_tests(tests: Vec<TestRecord>) -> Self {
        Self {
            tests,
            failure: None,
        }
    }

    /// Provider that always fails.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            tests: Vec::new(),
            failure: Some(reason.into()),
        }
    }
}

#[async_trait]
impl TestSelectionProvider for MockTestSelection {
    async fn fetch_tests(&self) -> Result<Vec<TestRecord>, SelectionError> {
        match &self.failure {
            Some(reason) => Err(SelectionError::Unavailable(reason.clone())),
            None => Ok(self.tests.clone()),
        }
    }

    fn source(&self) -> &str {
        "mock"
    }
}

/// Shard sink that keeps manifests in memory.
#[derive(Debug, Default)]
pub struct InMemoryShardSink {
    manifests: Mutex<Vec<(ShardId, String)>>,
}

impl InMemoryShardSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Manifests persisted so far, as `(shard id, newline-joined names)`.
    pub fn manifests(&self) -> Vec<(ShardId, String)> {
        self.manifests.lock().clone()
    }
}

impl ShardSink for InMemoryShardSink {
    fn persist(&self, shards: &[Shard<'_>]) -> Result<Vec<PathBuf>, ShardError> {
        let mut manifests = self.manifests.lock();
        manifests.clear();
        manifests.extend(shards.iter().map(|s| (s.id, s.manifest())));
        Ok(shards.iter().map(|s| PathBuf::from(s.file_name())).collect())
    }
}
