//! Parallel fan-out of greedy selection over pool partitions.

use crate::data::FeatureMatrix;
use crate::utils::Parallelism;

use super::greedy::greedy_select;
use super::partition::PartitionPlan;
use super::subsample::sample_without_replacement;
use super::SelectionError;

/// Run one greedy selection per partition and concatenate the winners.
///
/// Each partition is independently subsampled down to the plan's budget
/// (seeded per partition so draws need no cross-worker coordination), then
/// greedily reduced to at most `batch_size` winners. Workers share the
/// feature matrix read-only; results are collected in partition order, not
/// score order, so the merged list is deterministic for a fixed seed.
///
/// The call joins every worker before returning. Any worker error aborts the
/// whole call with no partial result — the caller's pool is only mutated
/// after a fully successful run.
pub fn run_partitions(
    matrix: &FeatureMatrix,
    pool: &[usize],
    plan: &PartitionPlan,
    batch_size: usize,
    seed: u64,
    parallelism: Parallelism,
) -> Result<Vec<usize>, SelectionError> {
    let partitions: Vec<(usize, &[usize])> = plan.split(pool).enumerate().collect();

    let results: Vec<Result<Vec<usize>, SelectionError>> =
        parallelism.maybe_par_map(partitions, |(index, ids)| {
            let partition_seed = seed.wrapping_add(index as u64);
            let sample = sample_without_replacement(ids, plan.sample_budget, partition_seed);
            greedy_select(matrix, &sample, batch_size)
        });

    // Fail fast: the first worker error wins, nothing partial escapes.
    let mut merged = Vec::with_capacity(results.len() * batch_size);
    for result in results {
        merged.extend(result?);
    }
    Ok(merged)
}
