//! Shared helpers for integration tests.

use coreselect::testing::random_activations;
use ndarray::Array2;

/// Seeded activation matrix with values uniform in `[0, 1]`.
pub fn uniform_activations(rows: usize, cols: usize, seed: u64) -> Array2<f32> {
    random_activations(rows, cols, seed, 0.0, 1.0)
}
