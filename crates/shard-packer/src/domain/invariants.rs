//! # Domain Invariants
//!
//! Rules that must hold for every packing result.

use std::collections::HashMap;

use super::entities::Shard;
use super::errors::{ShardError, ShardId};
use super::value_objects::TimedTest;

/// Invariant: shards partition the input.
///
/// The multiset of test names across all shards equals the multiset of input
/// names. No test is lost or duplicated.
pub fn invariant_partition<T: TimedTest>(
    input: &[T],
    shards: &[Shard<'_, T>],
) -> Result<(), ShardError> {
    let mut expected: HashMap<&str, i64> = HashMap::new();
    for test in input {
        *expected.entry(test.name()).or_default() += 1;
    }

    for name in shards.iter().flat_map(Shard::test_names) {
        let count = expected.entry(name).or_default();
        *count -= 1;
        if *count < 0 {
            return Err(ShardError::InvariantViolation(format!(
                "{} assigned more often than it appears in the input",
                name
            )));
        }
    }

    if let Some((name, _)) = expected.iter().find(|(_, count)| **count > 0) {
        return Err(ShardError::InvariantViolation(format!(
            "{} was not assigned to any shard",
            name
        )));
    }

    Ok(())
}

/// Invariant: every shard with more than one test fits the budget.
pub fn invariant_within_budget<T: TimedTest>(
    shards: &[Shard<'_, T>],
    duration_limit: f64,
) -> Result<(), ShardError> {
    for shard in shards.iter().filter(|s| s.len() > 1) {
        let total = shard.total_duration();
        if total > duration_limit {
            return Err(ShardError::InvariantViolation(format!(
                "shard {} totals {} over limit {}",
                shard.id, total, duration_limit
            )));
        }
    }
    Ok(())
}

/// Invariant: no shard is emitted empty.
pub fn invariant_non_empty<T: TimedTest>(shards: &[Shard<'_, T>]) -> Result<(), ShardError> {
    match shards.iter().find(|s| s.is_empty()) {
        Some(shard) => Err(ShardError::InvariantViolation(format!(
            "shard {} is empty",
            shard.id
        ))),
        None => Ok(()),
    }
}

/// Invariant: a test longer than the limit sits alone in a flagged shard.
pub fn invariant_oversized_isolated<T: TimedTest>(
    shards: &[Shard<'_, T>],
    duration_limit: f64,
) -> Result<(), ShardError> {
    for shard in shards {
        let has_oversized = shard.tests.iter().any(|t| t.duration() > duration_limit);
        if has_oversized && (shard.len() != 1 || !shard.exceeds_limit) {
            return Err(ShardError::InvariantViolation(format!(
                "shard {} holds an oversized test but is not a flagged singleton",
                shard.id
            )));
        }
        if shard.exceeds_limit && !has_oversized {
            return Err(ShardError::InvariantViolation(format!(
                "shard {} is flagged oversized but fits the limit",
                shard.id
            )));
        }
    }
    Ok(())
}

/// Invariant: shard ids run 0, 1, 2, .. in creation order.
pub fn invariant_sequential_ids<T: TimedTest>(shards: &[Shard<'_, T>]) -> Result<(), ShardError> {
    for (expected, shard) in shards.iter().enumerate() {
        if shard.id as usize != expected {
            return Err(ShardError::InvariantViolation(format!(
                "shard at position {} has id {}",
                expected, shard.id
            )));
        }
    }
    Ok(())
}

/// Check every invariant at once.
pub fn check_all<T: TimedTest>(
    input: &[T],
    shards: &[Shard<'_, T>],
    duration_limit: f64,
) -> Result<(), ShardError> {
    invariant_partition(input, shards)?;
    invariant_within_budget(shards, duration_limit)?;
    invariant_non_empty(shards)?;
    invariant_oversized_isolated(shards, duration_limit)?;
    invariant_sequential_ids(shards)
}

/// Look up which shard a test landed in.
pub fn shard_of<T: TimedTest>(shards: &[Shard<'_, T>], name: &str) -> Option<ShardId> {
    shards
        .iter()
        .find(|s| s.test_names().any(|n| n == name))
        .map(|s| s.id)
}
