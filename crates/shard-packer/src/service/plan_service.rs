//! Shard Planning Service
//!
//! Orchestrates one planning run: fetch tests, pack them, write the shard
//! files, then dump the shards to the log.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::algorithms::pack_with_config;
use crate::domain::{PackingConfig, PlanSummary, ShardError, TestRecord};
use crate::ports::{ShardPlanningApi, ShardReporter, ShardSink, TestSelectionProvider};

/// Shard planning service.
///
/// Implements the `ShardPlanningApi` port using injected collaborators.
pub struct ShardPlanService {
    /// Primary test selection (driven port)
    provider: Arc<dyn TestSelectionProvider>,
    /// Used when the primary provider fails
    fallback: Option<Arc<dyn TestSelectionProvider>>,
    /// Shard persistence (driven port)
    sink: Arc<dyn ShardSink>,
    /// Diagnostics (driven port)
    reporter: Arc<dyn ShardReporter>,
    config: PackingConfig,
}

impl ShardPlanService {
    /// Create a service with the default packing configuration and no fallback.
    pub fn new(
        provider: Arc<dyn TestSelectionProvider>,
        sink: Arc<dyn ShardSink>,
        reporter: Arc<dyn ShardReporter>,
    ) -> Self {
        Self {
            provider,
            fallback: None,
            sink,
            reporter,
            config: PackingConfig::default(),
        }
    }

    /// Use a validated packing configuration.
    pub fn with_config(mut self, config: PackingConfig) -> Result<Self, ShardError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Fall back to `fallback` when the primary provider fails.
    pub fn with_fallback(mut self, fallback: Arc<dyn TestSelectionProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Fetch tests from the primary provider, or the fallback if it fails.
    pub async fn fetch_tests(&self) -> Result<Vec<TestRecord>, ShardError> {
        match self.provider.fetch_tests().await {
            Ok(tests) => {
                info!(source = self.provider.source(), count = tests.len(), "Fetched tests");
                Ok(tests)
            }
            Err(err) => {
                let Some(fallback) = &self.fallback else {
                    return Err(err.into());
                };
                warn!(
                    source = self.provider.source(),
                    fallback = fallback.source(),
                    "Test selection failed, using fallback: {}",
                    err
                );
                let tests = fallback.fetch_tests().await?;
                info!(source = fallback.source(), count = tests.len(), "Fetched tests");
                Ok(tests)
            }
        }
    }
}

#[async_trait]
impl ShardPlanningApi for ShardPlanService {
    async fn plan(&self) -> Result<PlanSummary, ShardError> {
        let tests = self.fetch_tests().await?;
        let shards = pack_with_config(&tests, &self.config)?;

        let artifacts = self.sink.persist(&shards)?;
        self.reporter.report(&shards, self.config.duration_limit);

        let summary = PlanSummary {
            artifacts,
            ..PlanSummary::from_shards(&shards)
        };
        info!(
            shards = summary.shard_count,
            tests = summary.test_count,
            oversized = summary.oversized.len(),
            limit = self.config.duration_limit,
            "Shard plan complete"
        );
        Ok(summary)
    }

    fn config(&self) -> &PackingConfig {
        &self.config
    }
}
