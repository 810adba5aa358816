//! Telemetry configuration from environment variables.

use std::env;

/// Logging configuration for the shard planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error or a full directive)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to print event targets
    pub show_targets: bool,

    /// Whether to use ANSI colors in human-readable output
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "shard-planner".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            show_targets: true,
            ansi: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SHARD_SERVICE_NAME`: Service name (default: shard-planner)
    /// - `SHARD_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `SHARD_JSON_LOGS`: Enable JSON logs (default: false, true under CI)
    /// - `SHARD_LOG_TARGETS`: Show event targets (default: true)
    /// - `NO_COLOR`: Disable ANSI colors when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let is_ci = lookup("CI").is_some_and(|v| is_truthy(&v));

        Self {
            service_name: lookup("SHARD_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("SHARD_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("SHARD_JSON_LOGS")
                .map(|v| is_truthy(&v))
                .unwrap_or(is_ci),

            show_targets: lookup("SHARD_LOG_TARGETS")
                .map(|v| !is_falsy(&v))
                .unwrap_or(defaults.show_targets),

            ansi: lookup("NO_COLOR").is_none(),
        }
    }

    /// Override the log level, e.g. from a `--verbose` flag.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

fn is_falsy(value: &str) -> bool {
    value.eq_ignore_ascii_case("false") || value == "0"
}
