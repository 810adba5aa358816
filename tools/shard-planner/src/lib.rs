//! Shard Planner: split the selected end-to-end tests into CI shards.
//!
//! ```text
//! change list ──POST──→ selection service ──→ [test, duration]*
//!                                                   │
//!                                          pack(limit = 30)
//!                                                   │
//!                          shards/shard0.txt .. shards/shardN.txt
//! ```
//!
//! When the selection service is unreachable the built-in test list is used
//! unless `--no-fallback` is given.

pub mod api;
pub mod cli;

pub use api::{ChangeList, TestSelectionClient, DEFAULT_SELECTION_URL};
pub use cli::Args;
