//! Normalized feature matrix backing all selection scores.
//!
//! [`FeatureMatrix`] holds one fixed-length feature vector per dataset item,
//! rectified and column-normalized once at construction. The matrix is
//! immutable afterwards and shared read-only across all partition workers,
//! so no locking is ever needed.

use ndarray::{Array2, ArrayView1, Axis};

/// Immutable item × feature matrix of non-negative values.
///
/// Rows are indexed by stable integer item id (the row number). Each column
/// is normalized to sum to 1 over the *entire* dataset; the normalization is
/// computed once and reused read-only for every selection call.
///
/// # Example
///
/// ```
/// use coreselect::FeatureMatrix;
/// use ndarray::array;
///
/// let m = FeatureMatrix::from_activations(array![[1.0, 0.0], [0.0, 1.0], [0.5, 0.5]]);
/// assert_eq!(m.n_items(), 3);
/// assert_eq!(m.n_features(), 2);
/// // Column sums are 1 after normalization.
/// assert!((m.row(0)[0] - 2.0 / 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    data: Array2<f32>,
}

impl FeatureMatrix {
    /// Build from raw penultimate-layer activations.
    ///
    /// Applies rectification (`max(0.0)`) element-wise, then divides each
    /// column by its sum across all rows. Columns that sum to zero are left
    /// all-zero rather than divided (which would produce NaN).
    pub fn from_activations(activations: Array2<f32>) -> Self {
        let mut data = activations.mapv(|v| v.max(0.0));
        let col_sums = data.sum_axis(Axis(0));
        for (mut col, &sum) in data.columns_mut().into_iter().zip(col_sums.iter()) {
            if sum > 0.0 {
                col.mapv_inplace(|v| v / sum);
            }
        }
        Self { data }
    }

    /// Build from values that are already rectified and normalized.
    ///
    /// No sanitization is applied; scoring still fails loudly if a negative
    /// value is encountered.
    pub fn from_normalized(data: Array2<f32>) -> Self {
        Self { data }
    }

    /// Number of items (rows).
    #[inline]
    pub fn n_items(&self) -> usize {
        self.data.nrows()
    }

    /// Number of feature columns.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.data.ncols()
    }

    /// Returns `true` if the matrix has no items or no features.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0 || self.data.ncols() == 0
    }

    /// Feature vector for the item with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id >= n_items()`.
    #[inline]
    pub fn row(&self, id: usize) -> ArrayView1<'_, f32> {
        self.data.row(id)
    }
}
