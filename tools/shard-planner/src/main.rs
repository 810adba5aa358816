//! Shard Planner binary.

use anyhow::{Context, Result};
use clap::Parser;
use shard_packer::ShardPlanningApi;
use shard_telemetry::{init_logging, TelemetryConfig};
use tracing::info;

use shard_planner::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    init_logging(&telemetry).context("Failed to initialize logging")?;

    let service = args.build_service()?;
    let summary = service.plan().await.context("Shard planning failed")?;

    info!(
        shards = summary.shard_count,
        tests = summary.test_count,
        longest = summary.max_shard_duration,
        oversized = summary.oversized.len(),
        output = %args.output_dir.display(),
        "Wrote {} shard files",
        summary.artifacts.len()
    );

    if args.json {
        let json = serde_json::to_string_pretty(&summary.shards)
            .context("Failed to serialize shards")?;
        println!("{}", json);
    }

    Ok(())
}
