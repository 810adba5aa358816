//! Request types for the test-selection service.

use serde::{Deserialize, Serialize};

/// Change list posted to the selection service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeList {
    /// Paths of the modified source files.
    pub file_list: Vec<String>,
}

impl ChangeList {
    /// Build a change list from file paths.
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            file_list: files.into_iter().map(Into::into).collect(),
        }
    }
}
