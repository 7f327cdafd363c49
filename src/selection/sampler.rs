//! The batch sampler: owns selection state across successive calls.

use std::collections::HashSet;

use ndarray::Array2;

use crate::data::FeatureMatrix;
use crate::utils::run_with_threads;

use super::config::{ConfigError, SamplerConfig};
use super::greedy::greedy_select;
use super::logger::SelectionLogger;
use super::partition::{sample_budget, PartitionPlan};
use super::runner::run_partitions;
use super::subsample::sample_without_replacement;
use super::SelectionError;

// =============================================================================
// SubsetSampler
// =============================================================================

/// Stateful greedy submodular batch sampler.
///
/// Holds the normalized [`FeatureMatrix`] (built once at construction) and
/// the pool of not-yet-selected item ids. Every [`select_batch`] call picks
/// up to `batch_size` ids and permanently removes them from the pool, so
/// batches never repeat an id across the sampler's lifetime.
///
/// # Per-call flow
///
/// 1. Snapshot the pool. If it is large enough, split it into contiguous
///    partitions and greedily select up to `batch_size` winners per
///    partition in parallel, each over a seeded random subsample. Otherwise
///    the whole pool is the intermediate winner set.
/// 2. Re-derive the sample budget from the intermediate winner count and
///    run one more greedy pass to pick the final batch. This second pass is
///    what arbitrates across partitions, since each partition picked its
///    local best independently.
/// 3. Only on success, remove the batch from the pool.
///
/// The pool is mutated exclusively on the caller's thread, strictly after
/// all partition workers have joined.
///
/// [`select_batch`]: SubsetSampler::select_batch
#[derive(Debug, Clone)]
pub struct SubsetSampler {
    features: FeatureMatrix,
    final_activations: Option<Array2<f32>>,
    pool: Vec<usize>,
    config: SamplerConfig,
    logger: SelectionLogger,
    /// Advanced once per call so successive batches draw fresh subsamples
    /// while the full sequence stays reproducible for a fixed config seed.
    call_seed: u64,
}

impl SubsetSampler {
    /// Create a sampler over raw penultimate-layer activations.
    ///
    /// Rectification and whole-dataset column normalization are applied once
    /// here; the resulting matrix is read-only for the sampler's lifetime.
    /// `final_activations` is carried as an opaque payload for extensions
    /// and is never consumed by scoring.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the configuration is invalid or the activation
    /// matrix is empty. Nothing is computed on the error path.
    pub fn new(
        penultimate_activations: Array2<f32>,
        final_activations: Option<Array2<f32>>,
        config: SamplerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if penultimate_activations.nrows() == 0 || penultimate_activations.ncols() == 0 {
            return Err(ConfigError::EmptyFeatureMatrix);
        }

        let features = FeatureMatrix::from_activations(penultimate_activations);
        let pool: Vec<usize> = (0..features.n_items()).collect();
        let logger = SelectionLogger::new(config.verbosity);
        let call_seed = config.seed;

        Ok(Self {
            features,
            final_activations,
            pool,
            config,
            logger,
            call_seed,
        })
    }

    /// Ids not yet selected, in original order.
    #[inline]
    pub fn remaining(&self) -> &[usize] {
        &self.pool
    }

    /// Returns `true` once every id has been selected.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    /// The normalized feature matrix backing selection.
    #[inline]
    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    /// Opaque final-layer payload passed at construction, if any.
    ///
    /// Not consumed by the selection algorithm; reserved for extensions.
    #[inline]
    pub fn final_activations(&self) -> Option<&Array2<f32>> {
        self.final_activations.as_ref()
    }

    /// Select the next batch of up to `batch_size` ids, in pick order.
    ///
    /// Returns fewer ids only when the pool holds fewer than `batch_size`
    /// (pool exhaustion is not an error; an empty pool yields an empty vec).
    /// On error the pool is left untouched, so the call can be retried or
    /// abandoned without losing ids.
    ///
    /// # Errors
    ///
    /// [`SelectionError`] from any partition worker or the final pass;
    /// failures are all-or-nothing per call.
    pub fn select_batch(&mut self) -> Result<Vec<usize>, SelectionError> {
        if self.pool.is_empty() {
            return Ok(Vec::new());
        }

        let seed = self.call_seed;
        let config = &self.config;
        let features = &self.features;
        let pool = &self.pool;
        let logger = &self.logger;

        let batch = run_with_threads(config.n_threads, |parallelism| {
            // Intermediate winners: per-partition greedy picks, or the whole
            // pool when it is too small to partition.
            let (intermediate, n_partitions) = match PartitionPlan::plan(pool.len(), config) {
                Some(plan) => {
                    let winners = run_partitions(
                        features,
                        pool,
                        &plan,
                        config.batch_size,
                        seed,
                        parallelism,
                    )?;
                    let n = pool.len().div_ceil(plan.partition_size);
                    (winners, n)
                }
                None => (pool.clone(), 1),
            };

            // Final reduction pass over the merged winners, with a budget
            // re-derived from the intermediate count.
            let budget = sample_budget(
                intermediate.len(),
                config.batch_size,
                config.log_epoch_factor,
            );
            let final_candidates = sample_without_replacement(&intermediate, budget, seed);

            logger.info(format!(
                "selecting {} ids from {} partitions: {} intermediate, {} sampled",
                config.batch_size,
                n_partitions,
                intermediate.len(),
                final_candidates.len(),
            ));

            greedy_select(features, &final_candidates, config.batch_size)
        })?;

        // Without-replacement guarantee: mutate the pool only after every
        // worker has joined and the whole call has succeeded.
        let selected: HashSet<usize> = batch.iter().copied().collect();
        self.pool.retain(|id| !selected.contains(id));
        self.call_seed = self.call_seed.wrapping_add(1);

        self.logger
            .debug(format!("selected ids (final pass): {:?}", batch));

        Ok(batch)
    }
}
