//! Built-in Test Selection Adapter
//!
//! Fixed list of end-to-end tests used offline or when the selection service
//! is unreachable.

use async_trait::async_trait;

use crate::domain::{SelectionError, TestRecord};
use crate::ports::outbound::TestSelectionProvider;

const BUILTIN_DURATIONS: [f64; 12] = [
    6.0, 2.0, 10.0, 1.0, 2.0, 10.0, 6.0, 2.0, 10.0, 16.0, 12.0, 18.0,
];

/// The built-in test list: `e2e_test1.test.ts` .. `e2e_test12.test.ts`.
pub fn builtin_tests() -> Vec<TestRecord> {
    BUILTIN_DURATIONS
        .iter()
        .enumerate()
        .map(|(i, duration)| TestRecord::new(format!("e2e_test{}.test.ts", i + 1), *duration))
        .collect()
}

/// Test selection backed by [`builtin_tests`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinTestSelection;

#[async_trait]
impl TestSelectionProvider for BuiltinTestSelection {
    async fn fetch_tests(&self) -> Result<Vec<TestRecord>, SelectionError> {
        Ok(builtin_tests())
    }

    fn source(&self) -> &str {
        "builtin"
    }
}
