//! Shard File Adapter
//!
//! Implements `ShardSink` by writing one `shard<id>.txt` per shard into a
//! freshly recreated output directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::{Shard, ShardError};
use crate::ports::outbound::ShardSink;

/// Writes shard manifests as text files.
///
/// Any existing directory at the output location is removed first, so stale
/// shard files from a previous run never survive.
#[derive(Clone, Debug)]
pub struct ShardFileWriter {
    dir: PathBuf,
}

impl ShardFileWriter {
    /// Create a writer targeting `dir`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn reset_dir(&self) -> Result<(), ShardError> {
        if self.dir.exists() {
            debug!(dir = %self.dir.display(), "Removing existing shard directory");
            std::fs::remove_dir_all(&self.dir).map_err(|e| self.io_error(&self.dir, e))?;
        }
        std::fs::create_dir_all(&self.dir).map_err(|e| self.io_error(&self.dir, e))
    }

    fn io_error(&self, path: &Path, e: std::io::Error) -> ShardError {
        ShardError::Persistence {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    }
}

impl ShardSink for ShardFileWriter {
    fn persist(&self, shards: &[Shard<'_>]) -> Result<Vec<PathBuf>, ShardError> {
        self.reset_dir()?;

        let mut written = Vec::with_capacity(shards.len());
        for shard in shards {
            let path = self.dir.join(shard.file_name());
            let manifest = shard.manifest();
            std::fs::write(&path, &manifest).map_err(|e| self.io_error(&path, e))?;

            info!("Shard file created: {}", path.display());
            for line in manifest.lines() {
                info!("{}", line);
            }
            info!("-----");
            written.push(path);
        }

        Ok(written)
    }
}
