//! API client module for the test-selection service.
//!
//! Posts the change list and receives the relevant tests with durations.

mod client;
mod types;

pub use client::{TestSelectionClient, DEFAULT_SELECTION_URL};
pub use types::*;
