//! Subset selection: scoring, greedy maximization, partitioning, fan-out.
//!
//! Components, leaf to root:
//!
//! - [`compute_scores`]: per-candidate marginal-gain scores
//! - [`greedy_select`]: fixed-cardinality greedy argmax loop
//! - [`PartitionPlan`]: contiguous pool partitions + sample budgets
//! - [`run_partitions`]: one greedy run per partition, in parallel
//! - [`SubsetSampler`]: orchestrator owning the shrinking id pool
//!
//! Most users only need [`SubsetSampler`] and [`SamplerConfig`].

mod config;
mod greedy;
mod logger;
mod partition;
mod runner;
mod sampler;
mod score;
mod subsample;

pub use config::{ConfigError, SamplerConfig};
pub use greedy::greedy_select;
pub use logger::{SelectionLogger, Verbosity};
pub use partition::{sample_budget, PartitionPlan};
pub use runner::run_partitions;
pub use sampler::SubsetSampler;
pub use score::compute_scores;
pub use subsample::sample_without_replacement;

// =============================================================================
// SelectionError
// =============================================================================

/// Errors raised while selecting a batch.
///
/// Any of these aborts the whole call before the id pool is mutated:
/// selection is all-or-nothing per call. Pool exhaustion is deliberately
/// *not* an error; a short or empty batch is returned instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    /// A negative feature value was encountered where non-negativity is
    /// guaranteed by upstream rectification. Signals corrupted input, never
    /// clamped silently.
    #[error("negative feature value {value} at item {id}, column {column}")]
    NegativeActivation {
        /// Item id (row) holding the offending value.
        id: usize,
        /// Feature column of the offending value.
        column: usize,
        /// The negative value itself.
        value: f32,
    },

    /// A candidate id was out of range for the feature matrix.
    #[error("candidate id {id} out of range for {n_items} items")]
    IdOutOfRange { id: usize, n_items: usize },
}
