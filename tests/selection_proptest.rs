//! Property tests for selection invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use coreselect::{greedy_select, FeatureMatrix, PartitionPlan, SamplerConfig, SubsetSampler};

mod common;
use common::uniform_activations;

proptest! {
    /// Partitions concatenated in order reconstruct the exact pool, for any
    /// pool size and partition count that crosses the partitioning threshold.
    #[test]
    fn partition_coverage(pool_len in 1usize..500, num_partitions in 1usize..12) {
        let config = SamplerConfig::builder()
            .batch_size(1)
            .num_partitions(num_partitions)
            .build();
        if let Some(plan) = PartitionPlan::plan(pool_len, &config) {
            let pool: Vec<usize> = (0..pool_len).collect();
            let rebuilt: Vec<usize> = plan.split(&pool).flatten().copied().collect();
            prop_assert_eq!(rebuilt, pool);
        }
    }

    /// Greedy output length is min(target, candidates) with no duplicates.
    #[test]
    fn greedy_size_and_uniqueness(n in 1usize..40, target in 0usize..60, seed in 0u64..100) {
        let matrix = FeatureMatrix::from_activations(uniform_activations(n, 5, seed));
        let candidates: Vec<usize> = (0..n).collect();
        let picked = greedy_select(&matrix, &candidates, target).unwrap();
        prop_assert_eq!(picked.len(), target.min(n));
        let unique: HashSet<_> = picked.iter().copied().collect();
        prop_assert_eq!(unique.len(), picked.len());
    }

    /// Batches across a full drain never repeat an id and respect the size
    /// bound min(batch_size, pool before the call).
    #[test]
    fn drain_without_replacement(
        n in 1usize..120,
        batch_size in 1usize..20,
        num_partitions in 1usize..4,
        seed in 0u64..50,
    ) {
        let config = SamplerConfig::builder()
            .batch_size(batch_size)
            .num_partitions(num_partitions)
            .seed(seed)
            .n_threads(1)
            .build();
        let mut sampler =
            SubsetSampler::new(uniform_activations(n, 4, seed), None, config).unwrap();

        let mut seen = HashSet::new();
        while !sampler.is_exhausted() {
            let before = sampler.remaining().len();
            let batch = sampler.select_batch().unwrap();
            prop_assert_eq!(batch.len(), before.min(batch_size));
            for id in batch {
                prop_assert!(seen.insert(id));
            }
        }
        prop_assert_eq!(seen.len(), n);
    }
}
