//! # Ports Layer
//!
//! Inbound API and outbound dependency traits for the Shard Packer.

pub mod inbound;
pub mod outbound;

pub use inbound::ShardPlanningApi;
pub use outbound::{
    InMemoryShardSink, MockTestSelection, ShardReporter, ShardSink, TestSelectionProvider,
};
