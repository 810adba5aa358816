//! Tracing Reporter Adapter
//!
//! Implements `ShardReporter` as line-oriented log output.

use tracing::{debug, info};

use crate::domain::Shard;
use crate::ports::outbound::ShardReporter;

/// Reports shards through `tracing`.
///
/// Per shard: its id, one line per test with its duration and a separator.
/// The packer already warns about oversized singletons, so they only get an
/// extra debug line here.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl TracingReporter {
    /// Render the report lines for one shard.
    pub fn lines(shard: &Shard<'_>) -> Vec<String> {
        let mut lines = Vec::with_capacity(shard.len() + 2);
        lines.push(format!("shard id: {}", shard.id));
        lines.extend(
            shard
                .tests
                .iter()
                .map(|t| format!("test: {}    duration: {}", t.name, t.duration)),
        );
        lines.push("---------------------".to_string());
        lines
    }
}

impl ShardReporter for TracingReporter {
    fn report(&self, shards: &[Shard<'_>], duration_limit: f64) {
        for shard in shards {
            if shard.exceeds_limit {
                for test in &shard.tests {
                    debug!(
                        shard = shard.id,
                        limit = duration_limit,
                        "{} has duration longer than threshold ({} > {})",
                        test.name,
                        test.duration,
                        duration_limit
                    );
                }
            }
            for line in Self::lines(shard) {
                info!("{}", line);
            }
        }
    }
}
