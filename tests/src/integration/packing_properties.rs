//! # Packing Properties
//!
//! Randomized checks that every packing result partitions its input, keeps
//! multi-test shards within the budget and isolates oversized tests.
//!
//! Inputs come from a seeded `StdRng` so failures reproduce.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shard_packer::TestRecord;

/// Random suite of `count` tests with durations in `[0, max_duration)`.
pub fn random_suite(rng: &mut StdRng, count: usize, max_duration: f64) -> Vec<TestRecord> {
    (0..count)
        .map(|i| {
            let duration = (rng.gen_range(0.0..max_duration) * 10.0_f64).round() / 10.0;
            TestRecord::new(format!("e2e_random{}.test.ts", i), duration)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shard_packer::{
        builtin_tests, check_all, invariant_oversized_isolated, pack, shard_of, TimedTest,
    };

    const SEED: u64 = 0x5EED_0E2E;

    // =============================================================================
    // INVARIANTS OVER RANDOM SUITES
    // =============================================================================

    #[test]
    fn test_random_suites_satisfy_invariants() {
        let mut rng = StdRng::seed_from_u64(SEED);

        for round in 0..200 {
            let count = rng.gen_range(0..60);
            let limit = rng.gen_range(5.0..60.0);
            let suite = random_suite(&mut rng, count, 45.0);

            let shards = pack(&suite, limit).unwrap();
            if let Err(e) = check_all(&suite, &shards, limit) {
                panic!("round {} (limit {}): {}", round, limit, e);
            }
        }
    }

    #[test]
    fn test_oversized_tests_are_isolated() {
        let mut rng = StdRng::seed_from_u64(SEED + 1);
        let suite = random_suite(&mut rng, 80, 100.0);
        let limit = 30.0;

        let shards = pack(&suite, limit).unwrap();
        invariant_oversized_isolated(&shards, limit).unwrap();

        let oversized = suite.iter().filter(|t| t.duration > limit).count();
        let flagged = shards.iter().filter(|s| s.exceeds_limit).count();
        assert_eq!(oversized, flagged);
    }

    #[test]
    fn test_packing_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(SEED + 2);
        let suite = random_suite(&mut rng, 40, 20.0);

        let first = pack(&suite, 30.0).unwrap();
        let second = pack(&suite, 30.0).unwrap();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_shard_count_bounds() {
        let mut rng = StdRng::seed_from_u64(SEED + 3);

        for _ in 0..100 {
            let suite = random_suite(&mut rng, 30, 25.0);
            let shards = pack(&suite, 30.0).unwrap();
            let total: f64 = suite.iter().map(TimedTest::duration).sum();

            assert!(shards.len() <= suite.len());
            assert!(shards.len() as f64 >= (total / 30.0).floor());
        }
    }

    #[test]
    fn test_empty_suite() {
        let suite: Vec<TestRecord> = Vec::new();
        assert!(pack(&suite, 30.0).unwrap().is_empty());
    }

    // =============================================================================
    // LIMIT SWEEPS
    // =============================================================================

    #[test]
    fn test_builtin_suite_shard_count_never_grows_with_limit() {
        let suite = builtin_tests();
        let mut previous = usize::MAX;

        for limit in 18..=100 {
            let count = pack(&suite, limit as f64).unwrap().len();
            assert!(
                count <= previous,
                "limit {} produced {} shards, more than {}",
                limit,
                count,
                previous
            );
            previous = count;
        }
        assert_eq!(pack(&suite, 95.0).unwrap().len(), 1);
    }

    /// The greedy fill can need more shards for a larger limit.
    #[test]
    fn test_larger_limit_can_produce_more_shards() {
        let suite: Vec<TestRecord> = [29.0, 18.0, 14.0, 13.0, 13.0, 9.0, 8.0, 8.0, 6.0, 6.0, 5.0]
            .iter()
            .enumerate()
            .map(|(i, d)| TestRecord::new(format!("t{}", i), *d))
            .collect();

        let at_26 = pack(&suite, 26.0).unwrap();
        let at_27 = pack(&suite, 27.0).unwrap();

        assert_eq!(at_26.len(), 5);
        assert_eq!(at_27.len(), 6);
        check_all(&suite, &at_26, 26.0).unwrap();
        check_all(&suite, &at_27, 27.0).unwrap();
        assert_eq!(shard_of(&at_26, "t0"), Some(0));
        assert!(at_26[0].exceeds_limit);
    }
}
