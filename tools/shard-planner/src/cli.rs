//! Command-line arguments and service wiring.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use shard_packer::{
    BuiltinTestSelection, JsonFileTestSelection, PackingConfig, ShardFileWriter, ShardPlanService,
    TestSelectionProvider, TracingReporter, DEFAULT_DURATION_LIMIT,
};

use crate::api::{ChangeList, TestSelectionClient, DEFAULT_SELECTION_URL};

/// Split the selected end-to-end tests into duration-bounded CI shards.
#[derive(Parser, Debug, Clone)]
#[command(name = "shard-planner")]
#[command(about = "Pack end-to-end tests into shards that fit a time budget")]
pub struct Args {
    /// Test-selection service endpoint
    #[arg(short, long, default_value = DEFAULT_SELECTION_URL)]
    pub endpoint: String,

    /// Changed source file to send to the selection service (repeatable)
    #[arg(short = 'c', long = "changed-file")]
    pub changed_files: Vec<String>,

    /// Read test records from a JSON file instead of the selection service
    #[arg(short, long, conflicts_with = "offline")]
    pub input: Option<PathBuf>,

    /// Use the built-in test list without contacting the selection service
    #[arg(long)]
    pub offline: bool,

    /// Fail instead of falling back to the built-in list when selection fails
    #[arg(long)]
    pub no_fallback: bool,

    /// Maximum total duration per shard
    #[arg(short = 'l', long, default_value_t = DEFAULT_DURATION_LIMIT)]
    pub duration_limit: f64,

    /// Directory receiving shard<id>.txt files (recreated on every run)
    #[arg(short, long, default_value = "shards")]
    pub output_dir: PathBuf,

    /// Print the packed shards as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validated packing configuration.
    pub fn packing_config(&self) -> Result<PackingConfig> {
        PackingConfig::new(self.duration_limit).context("Invalid --duration-limit")
    }

    /// Primary test-selection provider for these arguments.
    pub fn provider(&self) -> Result<Arc<dyn TestSelectionProvider>> {
        if self.offline {
            return Ok(Arc::new(BuiltinTestSelection));
        }
        if let Some(path) = &self.input {
            return Ok(Arc::new(JsonFileTestSelection::new(path)));
        }
        let client = TestSelectionClient::new(
            self.endpoint.clone(),
            ChangeList::new(self.changed_files.iter().cloned()),
        )
        .context("Failed to create test-selection client")?;
        Ok(Arc::new(client))
    }

    /// Whether a failed selection falls back to the built-in list.
    pub fn uses_fallback(&self) -> bool {
        !self.offline && !self.no_fallback
    }

    /// Build the planning service.
    pub fn build_service(&self) -> Result<ShardPlanService> {
        let mut service = ShardPlanService::new(
            self.provider()?,
            Arc::new(ShardFileWriter::new(&self.output_dir)),
            Arc::new(TracingReporter),
        )
        .with_config(self.packing_config()?)?;

        if self.uses_fallback() {
            service = service.with_fallback(Arc::new(BuiltinTestSelection));
        }
        Ok(service)
    }
}
