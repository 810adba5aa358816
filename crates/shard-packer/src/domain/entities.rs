//! # Domain Entities
//!
//! Shards, packing configuration and planning summaries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::errors::{ShardError, ShardId};
use super::value_objects::{TestRecord, TimedTest};

/// Default per-shard duration limit (minutes).
pub const DEFAULT_DURATION_LIMIT: f64 = 30.0;

/// A group of tests that run together on one parallel worker.
///
/// Tests are borrowed from the caller's input, never copied.
/// Serialized as `{"id": <n>, "tests": [{"test": .., "duration": ..}, ..]}`.
#[derive(Clone, Debug, Serialize)]
pub struct Shard<'a, T = TestRecord> {
    /// Sequence number in creation order.
    pub id: ShardId,
    /// Tests in the order they were packed.
    pub tests: Vec<&'a T>,
    /// Set when the shard holds a single test that alone exceeds the limit.
    #[serde(skip)]
    pub exceeds_limit: bool,
}

impl<'a, T: TimedTest> Shard<'a, T> {
    /// Create a shard seeded with its first test.
    pub fn seeded(id: ShardId, seed: &'a T) -> Self {
        Self {
            id,
            tests: vec![seed],
            exceeds_limit: false,
        }
    }

    /// Sum of the durations of all tests in this shard.
    pub fn total_duration(&self) -> f64 {
        self.tests.iter().map(|t| t.duration()).sum()
    }

    /// Number of tests in this shard.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Always false for shards produced by the packer.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Names of the tests in packing order.
    pub fn test_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tests.iter().map(|t| t.name())
    }

    /// Artifact file name for this shard, e.g. `shard3.txt`.
    pub fn file_name(&self) -> String {
        format!("shard{}.txt", self.id)
    }

    /// Newline-joined test names, the content of the shard artifact.
    pub fn manifest(&self) -> String {
        self.test_names().collect::<Vec<_>>().join("\n")
    }
}

/// Owned snapshot of a shard, for callers that outlive the input tests.
///
/// Same wire shape as [`Shard`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShardAssignment {
    /// Shard sequence number.
    pub id: ShardId,
    /// Tests assigned to the shard.
    pub tests: Vec<TestRecord>,
}

impl From<&Shard<'_, TestRecord>> for ShardAssignment {
    fn from(shard: &Shard<'_, TestRecord>) -> Self {
        Self {
            id: shard.id,
            tests: shard.tests.iter().map(|t| (*t).clone()).collect(),
        }
    }
}

/// Packing configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackingConfig {
    /// Maximum tolerable total duration per shard.
    pub duration_limit: f64,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            duration_limit: DEFAULT_DURATION_LIMIT,
        }
    }
}

impl PackingConfig {
    /// Create a new configuration with validation.
    pub fn new(duration_limit: f64) -> Result<Self, ShardError> {
        let config = Self { duration_limit };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ShardError> {
        if !self.duration_limit.is_finite() || self.duration_limit <= 0.0 {
            return Err(ShardError::InvalidDurationLimit(self.duration_limit));
        }
        Ok(())
    }

    /// Builder-style method to set the duration limit.
    pub fn with_duration_limit(mut self, limit: f64) -> Self {
        self.duration_limit = limit;
        self
    }
}

/// Outcome of one planning run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PlanSummary {
    /// Number of shards produced.
    pub shard_count: usize,
    /// Number of tests partitioned.
    pub test_count: usize,
    /// Sum of all test durations.
    pub total_duration: f64,
    /// Longest shard total, the expected wall-clock time of the run.
    pub max_shard_duration: f64,
    /// Tests that alone exceed the duration limit.
    pub oversized: Vec<String>,
    /// Artifacts written by the shard sink.
    pub artifacts: Vec<PathBuf>,
    /// The shards themselves.
    pub shards: Vec<ShardAssignment>,
}

impl PlanSummary {
    /// Summarize packed shards.
    pub fn from_shards(shards: &[Shard<'_>]) -> Self {
        let totals: Vec<f64> = shards.iter().map(Shard::total_duration).collect();
        Self {
            shard_count: shards.len(),
            test_count: shards.iter().map(Shard::len).sum(),
            total_duration: totals.iter().sum(),
            max_shard_duration: totals.iter().copied().fold(0.0, f64::max),
            oversized: shards
                .iter()
                .filter(|s| s.exceeds_limit)
                .flat_map(|s| s.test_names().map(str::to_string))
                .collect(),
            artifacts: Vec::new(),
            shards: shards.iter().map(ShardAssignment::from).collect(),
        }
    }
}
