//! Marginal-gain scoring for greedy subset selection.
//!
//! The objective is a concave (square-root) function of the per-column
//! feature mass accumulated by the chosen subset. Concavity gives diminishing
//! returns as a column's running sum grows, which is what makes the set
//! function submodular and the greedy loop well-behaved.

use ndarray::{Array1, ArrayView1};

use crate::data::FeatureMatrix;

use super::SelectionError;

/// Score every candidate against a running column sum of chosen rows.
///
/// With no rows chosen yet (`n_chosen == 0`) every candidate scores 0.0 — the
/// degenerate first pick, where the caller's argmax falls back to the first
/// candidate position. Otherwise each candidate `c` scores
/// `Σ_cols sqrt(running_sum + row(c))`.
///
/// Writes into `out` (cleared first) so the greedy loop can reuse one buffer.
///
/// # Errors
///
/// [`SelectionError::NegativeActivation`] if any candidate feature value is
/// negative; non-negativity is an upstream invariant and a violation means
/// the normalization was corrupted.
pub(crate) fn marginal_scores(
    matrix: &FeatureMatrix,
    running_sum: &ArrayView1<'_, f32>,
    n_chosen: usize,
    candidates: &[usize],
    out: &mut Vec<f32>,
) -> Result<(), SelectionError> {
    out.clear();

    if n_chosen == 0 {
        out.resize(candidates.len(), 0.0);
        return Ok(());
    }

    for &id in candidates {
        let row = matrix.row(id);
        let mut total = 0.0f32;
        for (column, (&s, &v)) in running_sum.iter().zip(row.iter()).enumerate() {
            if v < 0.0 {
                return Err(SelectionError::NegativeActivation {
                    id,
                    column,
                    value: v,
                });
            }
            total += (s + v).sqrt();
        }
        out.push(total);
    }
    Ok(())
}

/// Score candidates given an explicit chosen set.
///
/// Convenience wrapper over the incremental engine used by
/// [`greedy_select`](super::greedy_select): builds the running column sum
/// from `chosen`, then scores each candidate. Pure and safe to call
/// concurrently over a shared matrix.
///
/// # Errors
///
/// [`SelectionError::NegativeActivation`] on any negative feature value in
/// `chosen` or `candidates` rows; [`SelectionError::IdOutOfRange`] for ids
/// past the end of the matrix.
pub fn compute_scores(
    matrix: &FeatureMatrix,
    chosen: &[usize],
    candidates: &[usize],
) -> Result<Vec<f32>, SelectionError> {
    let n_items = matrix.n_items();
    if let Some(&id) = chosen.iter().chain(candidates).find(|&&id| id >= n_items) {
        return Err(SelectionError::IdOutOfRange { id, n_items });
    }

    let mut running_sum = Array1::<f32>::zeros(matrix.n_features());
    for &id in chosen {
        accumulate_row(matrix, id, &mut running_sum)?;
    }

    let mut scores = Vec::with_capacity(candidates.len());
    marginal_scores(
        matrix,
        &running_sum.view(),
        chosen.len(),
        candidates,
        &mut scores,
    )?;
    Ok(scores)
}

/// Add an item's feature vector into the running column sum.
///
/// Validates non-negativity on the way in, so the sum itself can be trusted
/// by later score passes.
pub(crate) fn accumulate_row(
    matrix: &FeatureMatrix,
    id: usize,
    running_sum: &mut Array1<f32>,
) -> Result<(), SelectionError> {
    let row = matrix.row(id);
    for (column, &v) in row.iter().enumerate() {
        if v < 0.0 {
            return Err(SelectionError::NegativeActivation {
                id,
                column,
                value: v,
            });
        }
    }
    *running_sum += &row;
    Ok(())
}
