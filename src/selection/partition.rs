//! Partition planning: splitting the id pool into independent chunks.
//!
//! A plan is computed once per selection call from an immutable snapshot of
//! the pool. Workers only ever see read-only slices of that snapshot; the
//! pool itself is mutated single-threaded after every worker has joined.

use super::config::SamplerConfig;

/// Per-partition sample budget for the greedy inner loop.
///
/// `floor(source_len * log_epoch_factor / batch_size)`, clamped into
/// `[min(batch_size, source_len), source_len]`. The lower clamp guarantees a
/// greedy pass always has enough candidates to fill a batch (or takes the
/// whole source when it is smaller than a batch); the upper clamp skips
/// subsampling when the budget already covers the source.
pub fn sample_budget(source_len: usize, batch_size: usize, log_epoch_factor: f32) -> usize {
    let raw = (source_len as f64 * log_epoch_factor as f64 / batch_size as f64).floor() as usize;
    raw.max(batch_size.min(source_len)).min(source_len)
}

/// Plan for splitting a pool snapshot into contiguous partitions.
///
/// Built by [`PartitionPlan::plan`]; `None` means the pool is too small to
/// bother partitioning and should be selected from directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    /// Length of each partition (the tail chunk may be shorter).
    pub partition_size: usize,
    /// Random-sample budget applied to each partition before its greedy run.
    pub sample_budget: usize,
}

impl PartitionPlan {
    /// Decide whether to partition a pool of `pool_len` ids.
    ///
    /// Partitioning only pays off when every partition can contribute a full
    /// batch of winners, i.e. `pool_len >= num_partitions * batch_size`.
    /// Below that threshold the caller should run a single greedy pass over
    /// the whole pool.
    pub fn plan(pool_len: usize, config: &SamplerConfig) -> Option<Self> {
        if pool_len < config.num_partitions * config.batch_size {
            return None;
        }
        let partition_size = pool_len / config.num_partitions;
        Some(Self {
            partition_size,
            sample_budget: sample_budget(
                partition_size,
                config.batch_size,
                config.log_epoch_factor,
            ),
        })
    }

    /// Split a pool snapshot into contiguous partitions.
    ///
    /// Chunks cover the snapshot in original order with no id dropped or
    /// duplicated; a division remainder shows up as one shorter tail chunk.
    pub fn split<'a>(&self, pool: &'a [usize]) -> std::slice::Chunks<'a, usize> {
        pool.chunks(self.partition_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(batch_size: usize, num_partitions: usize) -> SamplerConfig {
        SamplerConfig::builder()
            .batch_size(batch_size)
            .num_partitions(num_partitions)
            .build()
    }

    #[test]
    fn small_pool_is_not_partitioned() {
        assert_eq!(PartitionPlan::plan(19, &config(10, 2)), None);
        assert_eq!(PartitionPlan::plan(0, &config(10, 2)), None);
    }

    #[test]
    fn pool_at_threshold_is_partitioned() {
        let plan = PartitionPlan::plan(20, &config(10, 2)).unwrap();
        assert_eq!(plan.partition_size, 10);
    }

    #[test]
    fn partition_sizes_for_even_split() {
        let plan = PartitionPlan::plan(100, &config(10, 2)).unwrap();
        assert_eq!(plan.partition_size, 50);
        let pool: Vec<usize> = (0..100).collect();
        let parts: Vec<_> = plan.split(&pool).collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 50);
        assert_eq!(parts[1].len(), 50);
    }

    #[test]
    fn remainder_becomes_tail_chunk() {
        let plan = PartitionPlan::plan(103, &config(10, 3)).unwrap();
        assert_eq!(plan.partition_size, 34);
        let pool: Vec<usize> = (0..103).collect();
        let parts: Vec<_> = plan.split(&pool).collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts.last().unwrap().len(), 1);
    }

    #[test]
    fn split_covers_pool_exactly() {
        for pool_len in [20usize, 41, 99, 100, 257] {
            for num_partitions in [1usize, 2, 3, 7] {
                let cfg = config(2, num_partitions);
                if let Some(plan) = PartitionPlan::plan(pool_len, &cfg) {
                    let pool: Vec<usize> = (0..pool_len).collect();
                    let rebuilt: Vec<usize> =
                        plan.split(&pool).flatten().copied().collect();
                    assert_eq!(rebuilt, pool, "len={} parts={}", pool_len, num_partitions);
                }
            }
        }
    }

    #[test]
    fn budget_follows_formula() {
        // 50 * 5 / 10 = 25
        assert_eq!(sample_budget(50, 10, 5.0), 25);
        // floor(7 * 5 / 10) = 3, below min(10, 7) -> clamped up to 7
        assert_eq!(sample_budget(7, 10, 5.0), 7);
        // floor(5 * 5 / 10) = 2, clamped up to min(10, 5) = 5
        assert_eq!(sample_budget(5, 10, 5.0), 5);
        // formula above source length -> clamped down
        assert_eq!(sample_budget(10, 2, 5.0), 10);
    }

    #[test]
    fn budget_of_empty_source_is_zero() {
        assert_eq!(sample_budget(0, 10, 5.0), 0);
    }
}
