//! # Shard Telemetry
//!
//! Logging setup shared by the shard planner binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shard_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config).expect("Failed to init logging");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SHARD_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `SHARD_JSON_LOGS` | `false` (`true` when `CI` is set) | JSON output |
//! | `SHARD_LOG_TARGETS` | `true` | Print event targets |
//! | `NO_COLOR` | unset | Disable ANSI colors |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Init(String),

    /// The configuration is invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
