//! Data handling for subset selection.
//!
//! The only data type the selection algorithms consume is [`FeatureMatrix`]:
//! an immutable item × feature matrix of non-negative, column-normalized
//! values. Everything upstream of it (model inference, data loading) is out
//! of scope for this crate.

mod matrix;

pub use matrix::FeatureMatrix;
