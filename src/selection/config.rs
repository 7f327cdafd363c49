//! Sampler configuration with builder pattern.
//!
//! [`SamplerConfig`] gathers every tuning knob for a [`SubsetSampler`]
//! (batch size, partition count, sample-budget factor, seed, threading,
//! verbosity). The builder comes from the `bon` crate; validation happens
//! in [`SamplerConfig::validate`], called by the sampler constructor before
//! any work starts.
//!
//! [`SubsetSampler`]: super::SubsetSampler
//!
//! # Example
//!
//! ```
//! use coreselect::SamplerConfig;
//!
//! let config = SamplerConfig::builder()
//!     .batch_size(64)
//!     .num_partitions(8)
//!     .seed(7)
//!     .build();
//! assert!(config.validate().is_ok());
//! ```

use bon::Builder;

use super::logger::Verbosity;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors rejected during configuration validation, before any selection
/// work starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// batch_size must be at least 1.
    #[error("batch_size must be positive, got 0")]
    InvalidBatchSize,

    /// num_partitions must be at least 1.
    #[error("num_partitions must be positive, got 0")]
    InvalidNumPartitions,

    /// log_epoch_factor must be a positive finite number.
    #[error("log_epoch_factor must be positive and finite, got {0}")]
    InvalidLogEpochFactor(f32),

    /// The feature matrix has no items or no features.
    #[error("feature matrix is empty")]
    EmptyFeatureMatrix,
}

// =============================================================================
// SamplerConfig
// =============================================================================

/// Configuration for a [`SubsetSampler`](super::SubsetSampler).
///
/// `batch_size` and `num_partitions` are required; everything else has a
/// sensible default.
#[derive(Debug, Clone, Builder)]
pub struct SamplerConfig {
    /// Target number of ids per selected batch.
    pub batch_size: usize,

    /// Number of partitions for the parallel fan-out. The pool is only
    /// partitioned when it holds at least `num_partitions * batch_size` ids.
    pub num_partitions: usize,

    /// Tuning constant for the random-sample budget
    /// (`floor(len * factor / batch_size)`). Larger values mean bigger
    /// candidate samples and slower, higher-quality greedy passes.
    #[builder(default = 5.0)]
    pub log_epoch_factor: f32,

    /// Base seed for all random subsampling. A fixed seed makes the whole
    /// batch sequence reproducible.
    #[builder(default = 42)]
    pub seed: u64,

    /// Worker threads for the partition fan-out: 0 = auto, 1 = sequential,
    /// n = exactly n threads.
    #[builder(default = 0)]
    pub n_threads: usize,

    /// Verbosity for selection progress logging.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl SamplerConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize);
        }
        if self.num_partitions == 0 {
            return Err(ConfigError::InvalidNumPartitions);
        }
        if !self.log_epoch_factor.is_finite() || self.log_epoch_factor <= 0.0 {
            return Err(ConfigError::InvalidLogEpochFactor(self.log_epoch_factor));
        }
        Ok(())
    }
}
