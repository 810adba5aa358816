//! # Shard Packing Algorithm
//!
//! Greedy two-pointer bin packing over tests sorted by descending duration.
//!
//! Each shard is seeded with the largest remaining test, topped up with the
//! next-largest tests while they fit, then filled from the small end. The
//! heuristic is not optimal but is deterministic and runs in O(n log n).

use tracing::{debug, warn};

use crate::domain::{validate_duration, PackingConfig, Shard, ShardError, ShardId, TimedTest};

/// Pack `tests` into shards whose total duration stays within `duration_limit`.
///
/// A test that alone exceeds the limit is emitted as a flagged singleton shard
/// and a warning is logged; that is not an error. Ties between equal durations
/// keep input order, but callers should not depend on it.
///
/// # Errors
///
/// - [`ShardError::InvalidDurationLimit`] if the limit is not positive and finite.
/// - [`ShardError::InvalidDuration`] if any test has a negative or non-finite duration.
pub fn pack<T: TimedTest>(
    tests: &[T],
    duration_limit: f64,
) -> Result<Vec<Shard<'_, T>>, ShardError> {
    PackingConfig::new(duration_limit)?;
    for test in tests {
        validate_duration(test)?;
    }

    let mut sorted: Vec<&T> = tests.iter().collect();
    sorted.sort_by(|a, b| b.duration().total_cmp(&a.duration()));

    let mut shards = Vec::new();
    // Unassigned range is sorted[low..high].
    let mut low = 0;
    let mut high = sorted.len();
    let mut next_id: ShardId = 0;

    while low < high {
        let seed = sorted[low];
        low += 1;

        let mut shard = Shard::seeded(next_id, seed);
        next_id += 1;
        let mut total = seed.duration();

        if total > duration_limit {
            warn!(
                test = seed.name(),
                duration = total,
                limit = duration_limit,
                "{} has duration longer than threshold",
                seed.name()
            );
            shard.exceeds_limit = true;
            shards.push(shard);
            continue;
        }

        while low < high && total + sorted[low].duration() <= duration_limit {
            total += sorted[low].duration();
            shard.tests.push(sorted[low]);
            low += 1;
        }

        while low < high && total + sorted[high - 1].duration() <= duration_limit {
            total += sorted[high - 1].duration();
            shard.tests.push(sorted[high - 1]);
            high -= 1;
        }

        debug!(shard = shard.id, tests = shard.len(), total, "Packed shard");
        shards.push(shard);
    }

    Ok(shards)
}

/// Pack with a validated [`PackingConfig`].
pub fn pack_with_config<'a, T: TimedTest>(
    tests: &'a [T],
    config: &PackingConfig,
) -> Result<Vec<Shard<'a, T>>, ShardError> {
    pack(tests, config.duration_limit)
}
