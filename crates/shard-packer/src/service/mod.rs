//! # Service Layer
//!
//! Wires ports together for a complete planning run.

mod plan_service;

pub use plan_service::ShardPlanService;
