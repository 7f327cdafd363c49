//! coreselect: greedy submodular batch selection for Rust.
//!
//! Picks a fixed-size, diverse, representative subset of items from a large
//! candidate pool by greedily maximizing a concave (square-root) score over
//! running feature sums. Designed for selecting the most informative batch of
//! samples each round (e.g. active learning), without replacement across
//! rounds.
//!
//! # Key Types
//!
//! - [`SubsetSampler`] - Stateful sampler; call [`SubsetSampler::select_batch`]
//!   repeatedly to drain the pool batch by batch
//! - [`SamplerConfig`] - Configuration builder
//! - [`FeatureMatrix`] - Normalized per-item feature vectors
//!
//! # How selection works
//!
//! Each call snapshots the remaining pool, splits it into contiguous
//! partitions, greedily selects up to `batch_size` winners per partition in
//! parallel (over a seeded random subsample), then runs one more greedy pass
//! over the union of partition winners to arbitrate the final batch.
//!
//! # Example
//!
//! ```
//! use coreselect::{SamplerConfig, SubsetSampler};
//! use ndarray::Array2;
//!
//! let activations = Array2::from_shape_fn((100, 8), |(i, j)| ((i + j) % 7) as f32);
//! let config = SamplerConfig::builder()
//!     .batch_size(10)
//!     .num_partitions(2)
//!     .build();
//!
//! let mut sampler = SubsetSampler::new(activations, None, config).unwrap();
//! let batch = sampler.select_batch().unwrap();
//! assert_eq!(batch.len(), 10);
//! assert_eq!(sampler.remaining().len(), 90);
//! ```

pub mod data;
pub mod selection;
pub mod testing;
pub mod utils;

// High-level sampler types
pub use selection::{SamplerConfig, SubsetSampler};

// Selection primitives (for callers composing their own pipelines)
pub use selection::{compute_scores, greedy_select, PartitionPlan};

// Data types
pub use data::FeatureMatrix;

// Errors and logging
pub use selection::{ConfigError, SelectionError, SelectionLogger, Verbosity};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
