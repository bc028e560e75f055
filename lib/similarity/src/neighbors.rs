//! Nearest-neighbor ranking
//!
//! Ranks every other record by Euclidean distance to the target's
//! normalized feature vector.

use crate::summary::NeighborResult;
use attrix_core::{Dataset, FeatureVector};
use std::cmp::Ordering;

/// Rank all records except `target` by ascending distance.
///
/// Candidates are visited in index order and sorted with a stable sort, so
/// equal distances are ordered by ascending index. At most `limit` results
/// are returned.
pub fn rank_neighbors(
    dataset: &Dataset,
    vectors: &[FeatureVector],
    target: usize,
    limit: usize,
) -> Vec<NeighborResult> {
    let target_vector = &vectors[target];

    let mut ranked: Vec<(usize, f64)> = vectors
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != target)
        .map(|(index, vector)| (index, target_vector.euclidean_distance(vector)))
        .collect();

    ranked.sort_by(|a, b| compare_distance(a.1, b.1));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(index, distance)| NeighborResult {
            index,
            distance,
            record: dataset.records()[index].clone(),
        })
        .collect()
}

#[inline]
fn compare_distance(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
