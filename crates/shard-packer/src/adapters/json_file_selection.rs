//! JSON File Test Selection Adapter
//!
//! Reads test records from a JSON array on disk, the same shape the
//! selection service returns.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{SelectionError, TestRecord};
use crate::ports::outbound::TestSelectionProvider;

/// Test selection read from a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileTestSelection {
    path: PathBuf,
}

impl JsonFileTestSelection {
    /// Create a provider for the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TestSelectionProvider for JsonFileTestSelection {
    async fn fetch_tests(&self) -> Result<Vec<TestRecord>, SelectionError> {
        let bytes = std::fs::read(&self.path).map_err(|e| SelectionError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let tests: Vec<TestRecord> = serde_json::from_slice(&bytes)
            .map_err(|e| SelectionError::Parse(format!("{}: {}", self.path.display(), e)))?;

        debug!(path = %self.path.display(), count = tests.len(), "Loaded test records");
        Ok(tests)
    }

    fn source(&self) -> &str {
        "file"
    }
}
