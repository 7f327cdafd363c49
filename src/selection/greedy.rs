//! Fixed-cardinality greedy subset maximization.

use ndarray::Array1;

use crate::data::FeatureMatrix;

use super::score::{accumulate_row, marginal_scores};
use super::SelectionError;

/// Greedily select up to `target` ids from `candidates`, in pick order.
///
/// Each step scores every remaining candidate against the running column sum
/// of the rows chosen so far, picks the argmax, and moves it to the chosen
/// list. The running sum is maintained incrementally; the sqrt transform is
/// recomputed over the remaining candidates each step (it cannot be
/// incrementalized, being nonlinear).
///
/// Exactly `min(target, candidates.len())` iterations run: this is a
/// fixed-cardinality greedy with no early exit or convergence check. Ties
/// are broken toward the lowest candidate position, so the output is fully
/// deterministic for a given candidate order. Empty candidates or
/// `target == 0` yield an empty vec, not an error.
///
/// Cost per step is O(remaining × features); partition sizes are bounded by
/// the sample budget upstream, which keeps this affordable.
///
/// # Errors
///
/// [`SelectionError::NegativeActivation`] if a negative feature value is hit
/// (upstream corruption), [`SelectionError::IdOutOfRange`] for bad ids.
pub fn greedy_select(
    matrix: &FeatureMatrix,
    candidates: &[usize],
    target: usize,
) -> Result<Vec<usize>, SelectionError> {
    let n_items = matrix.n_items();
    if let Some(&id) = candidates.iter().find(|&&id| id >= n_items) {
        return Err(SelectionError::IdOutOfRange { id, n_items });
    }

    let take = target.min(candidates.len());
    let mut remaining: Vec<usize> = candidates.to_vec();
    let mut chosen: Vec<usize> = Vec::with_capacity(take);
    let mut running_sum = Array1::<f32>::zeros(matrix.n_features());
    let mut scores: Vec<f32> = Vec::with_capacity(remaining.len());

    for _ in 0..take {
        marginal_scores(
            matrix,
            &running_sum.view(),
            chosen.len(),
            &remaining,
            &mut scores,
        )?;

        // Strict `>` keeps the first (lowest-position) maximum on ties.
        let mut best_pos = 0;
        let mut best_score = f32::NEG_INFINITY;
        for (pos, &score) in scores.iter().enumerate() {
            if score > best_score {
                best_score = score;
                best_pos = pos;
            }
        }

        // Plain remove, not swap_remove: remaining must stay in original
        // order for the tie-break to mean "lowest original position".
        let id = remaining.remove(best_pos);
        accumulate_row(matrix, id, &mut running_sum)?;
        chosen.push(id);
    }

    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn orthogonal_matrix() -> FeatureMatrix {
        FeatureMatrix::from_normalized(array![
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn selects_requested_count() {
        let m = orthogonal_matrix();
        let picked = greedy_select(&m, &[0, 1, 2], 2).unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn first_pick_is_first_candidate() {
        // Empty chosen set scores everything 0, so the tie-break lands on
        // the first candidate position regardless of feature content.
        let m = orthogonal_matrix();
        let picked = greedy_select(&m, &[2, 0, 1], 1).unwrap();
        assert_eq!(picked, vec![2]);
    }

    #[test]
    fn favors_diverse_followup() {
        // After picking item 0, item 1 adds mass to an empty column, which
        // the concave objective rewards over duplicating item 0.
        let m = FeatureMatrix::from_normalized(array![
            [1.0, 0.0],
            [0.0, 1.0],
            [0.9, 0.0],
        ]);
        let picked = greedy_select(&m, &[0, 1, 2], 2).unwrap();
        assert_eq!(picked, vec![0, 1]);
    }

    #[test]
    fn target_larger_than_pool_selects_all() {
        let m = orthogonal_matrix();
        let picked = greedy_select(&m, &[0, 1, 2], 10).unwrap();
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn empty_candidates_yield_empty() {
        let m = orthogonal_matrix();
        assert!(greedy_select(&m, &[], 5).unwrap().is_empty());
    }

    #[test]
    fn zero_target_yields_empty() {
        let m = orthogonal_matrix();
        assert!(greedy_select(&m, &[0, 1], 0).unwrap().is_empty());
    }

    #[test]
    fn no_duplicates_in_output() {
        let m = orthogonal_matrix();
        let picked = greedy_select(&m, &[0, 1, 2], 3).unwrap();
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), picked.len());
    }

    #[test]
    fn out_of_range_candidate_is_rejected() {
        let m = orthogonal_matrix();
        let err = greedy_select(&m, &[0, 7], 2).unwrap_err();
        assert_eq!(err, SelectionError::IdOutOfRange { id: 7, n_items: 3 });
    }

    #[test]
    fn deterministic_pick_order() {
        let m = FeatureMatrix::from_activations(array![
            [1.0, 0.0],
            [0.0, 1.0],
            [0.5, 0.5],
        ]);
        // First pick: tie-break to position 0. Second pick: item 1 adds the
        // untouched column, beating item 2's split mass under sqrt.
        let picked = greedy_select(&m, &[0, 1, 2], 2).unwrap();
        assert_eq!(picked, vec![0, 1]);
    }
}
