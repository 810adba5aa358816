//! # Shard Packer
//!
//! Partitions an end-to-end test suite into parallel shards whose total
//! duration stays within a time budget.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Bound CI wall-clock time by spreading tests over as few workers as the
//! budget allows:
//! - Descending-duration sort plus two-pointer greedy fill
//! - Oversized tests isolated in flagged singleton shards
//! - Pluggable test selection with a built-in fallback list
//!
//! ## Module Structure
//!
//! ```text
//! shard-packer/
//! ├── domain/          # TestRecord, Shard, PackingConfig, errors, invariants
//! ├── algorithms/      # Shard packing
//! ├── ports/           # API trait + dependency traits
//! ├── adapters/        # Built-in/JSON selection, shard files, log reporter
//! └── service/         # Planning run orchestration
//! ```
//!
//! ## Example
//!
//! ```
//! use shard_packer::{pack, TestRecord};
//!
//! let tests = vec![TestRecord::new("a.test.ts", 15.0), TestRecord::new("b.test.ts", 15.0)];
//! let shards = pack(&tests, 30.0).unwrap();
//! assert_eq!(shards.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    builtin_tests, BuiltinTestSelection, JsonFileTestSelection, ShardFileWriter, TracingReporter,
};
pub use algorithms::{pack, pack_with_config};
pub use domain::{
    check_all, invariant_non_empty, invariant_oversized_isolated, invariant_partition,
    invariant_sequential_ids, invariant_within_budget, shard_of, validate_duration,
    PackingConfig, PlanSummary, SelectionError, Shard, ShardAssignment, ShardError, ShardId,
    TestRecord, TimedTest, DEFAULT_DURATION_LIMIT,
};
pub use ports::{
    InMemoryShardSink, MockTestSelection, ShardPlanningApi, ShardReporter, ShardSink,
    TestSelectionProvider,
};
pub use service::ShardPlanService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
