//! # Domain Value Objects
//!
//! Immutable test records and the shape the packer works on.

use serde::{Deserialize, Serialize};

use super::errors::ShardError;

/// Anything that has a name and an execution duration.
///
/// The packer is generic over this shape so callers can pack their own
/// record types without converting them first.
pub trait TimedTest {
    /// Test identifier, opaque to the packer.
    fn name(&self) -> &str;

    /// Execution cost in the caller's time unit.
    fn duration(&self) -> f64;
}

/// A single test case with its known execution duration.
///
/// Wire format: `{"test": "<name>", "duration": <number>}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Test identifier (usually a test file path).
    #[serde(rename = "test")]
    pub name: String,
    /// Execution duration (minutes in the reference configuration).
    pub duration: f64,
}

impl TestRecord {
    /// Create a new test record.
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

impl TimedTest for TestRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn duration(&self) -> f64 {
        self.duration
    }
}

impl<T: TimedTest + ?Sized> TimedTest for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn duration(&self) -> f64 {
        (**self).duration()
    }
}

/// Reject negative or non-finite durations.
pub fn validate_duration<T: TimedTest>(test: &T) -> Result<(), ShardError> {
    let duration = test.duration();
    if !duration.is_finite() || duration < 0.0 {
        return Err(ShardError::InvalidDuration {
            test: test.name().to_string(),
            duration,
        });
    }
    Ok(())
}
