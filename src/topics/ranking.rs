// Ranked results: the (term, weight) pairs handed back to callers.
//
// Both scorers finish the same way: sort, cut to top N, divide by the
// maximum, round to 3 decimals. That shared tail lives here.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single term in the word cloud with its weight in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: String,
    pub weight: f64,
}

/// Descending by weight, ties broken by lexically smaller term first.
pub fn compare_scored(a: &(String, f64), b: &(String, f64)) -> Ordering {
    b.1.partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.0.cmp(&b.0))
}

/// Round to 3 decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Sort raw scores, keep the top `top_n`, and max-normalize into [0, 1].
///
/// Returns an empty ranking when there is nothing to rank or when the best
/// score is not a positive finite number.
pub fn rank_and_normalize(mut scored: Vec<(String, f64)>, top_n: usize) -> Vec<RankedTerm> {
    scored.retain(|(_, score)| score.is_finite());
    scored.sort_by(compare_scored);
    scored.truncate(top_n);

    let max_weight = match scored.first() {
        Some((_, w)) if *w > 0.0 => *w,
        _ => return Vec::new(),
    };

    scored
        .into_iter()
        .map(|(term, score)| RankedTerm {
            term,
            weight: round3((score / max_weight).max(0.0)),
        })
        .collect()
}
