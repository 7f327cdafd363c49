//! Seeded random subsampling of candidate ids.

use rand::prelude::*;

/// Sample `k` ids from `ids` without replacement, sorted ascending.
///
/// Uses a partial Fisher-Yates shuffle, so cost is O(ids.len()) regardless
/// of `k`. If `k >= ids.len()` the input is returned as-is (already a full
/// sample). Sorting the output keeps downstream tie-breaking aligned with
/// original id order, which makes selection deterministic for a fixed seed.
pub fn sample_without_replacement(ids: &[usize], k: usize, seed: u64) -> Vec<usize> {
    if k >= ids.len() {
        return ids.to_vec();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions: Vec<usize> = (0..ids.len()).collect();
    for i in 0..k {
        let j = rng.gen_range(i..positions.len());
        positions.swap(i, j);
    }

    let mut sampled: Vec<usize> = positions[..k].iter().map(|&p| ids[p]).collect();
    sampled.sort_unstable();
    sampled
}
