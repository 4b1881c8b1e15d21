//! Calorie-distance ranking for meal candidates.
//!
//! Exercises are never ranked; they have no nutritional dimension to rank on.

use crate::catalog::Recipe;
use itertools::Itertools;

/// Orders candidates by `|calories - target|` ascending, closest first.
///
/// The sort is stable: ties keep catalog iteration order, which makes
/// selection deterministic under a fixed seed. An empty input yields an empty
/// output; emptiness is the caller's concern.
pub fn rank_by_calorie_distance(candidates: Vec<&Recipe>, target: f64) -> Vec<&Recipe> {
    candidates
        .into_iter()
        .sorted_by(|a, b| {
            let da = (a.calories - target).abs();
            let db = (b.calories - target).abs();
            da.total_cmp(&db)
        })
        .collect()
}
