//! # Inbound Ports
//!
//! API trait defining what the Shard Packer can do.

use async_trait::async_trait;

use crate::domain::{PackingConfig, PlanSummary, ShardError};

/// Shard planning API - inbound port.
#[async_trait]
pub trait ShardPlanningApi: Send + Sync {
    /// Fetch the selected tests, pack them and hand the shards to the sink
    /// and reporter.
    async fn plan(&self) -> Result<PlanSummary, ShardError>;

    /// Get the active packing configuration.
    fn config(&self) -> &PackingConfig;
}
