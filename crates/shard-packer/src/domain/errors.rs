//! # Domain Errors
//!
//! Error types for the Shard Packer.

use std::path::PathBuf;

use thiserror::Error;

/// Shard identifier, assigned in creation order starting at 0.
pub type ShardId = u32;

/// Shard packing and planning errors.
#[derive(Debug, Error)]
pub enum ShardError {
    /// Duration limit is zero, negative or not a finite number.
    #[error("Invalid duration limit: {0} (must be a positive finite number)")]
    InvalidDurationLimit(f64),

    /// A test record carries a negative or non-finite duration.
    #[error("Invalid duration for {test}: {duration}")]
    InvalidDuration {
        /// Offending test name
        test: String,
        /// Offending duration
        duration: f64,
    },

    /// Test selection failed and no fallback was available.
    #[error("Test selection failed: {0}")]
    Selection(#[from] SelectionError),

    /// Writing shard artifacts failed.
    #[error("Failed to persist shards at {path}: {message}")]
    Persistence {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        message: String,
    },

    /// A packing invariant does not hold.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Errors raised by test-selection providers.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// Transport-level failure talking to the selection service.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The selection service answered with a non-success status.
    #[error("Selection service returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body (possibly truncated)
        body: String,
    },

    /// The response or file could not be decoded as test records.
    #[error("Failed to parse test records: {0}")]
    Parse(String),

    /// Reading a local source failed.
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// Source path
        path: PathBuf,
        /// Underlying I/O error
        message: String,
    },

    /// The provider cannot serve requests.
    #[error("Test selection unavailable: {0}")]
    Unavailable(String),
}
