//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits: built-in and file-backed test selection,
//! shard artifact files and log-based diagnostics.

mod builtin_selection;
mod json_file_selection;
mod reporter;
mod shard_files;

pub use builtin_selection::{builtin_tests, BuiltinTestSelection};
pub use json_file_selection::JsonFileTestSelection;
pub use reporter::TracingReporter;
pub use shard_files::ShardFileWriter;
