//! Weighted-sum scoring and threshold classification.

use super::types::{Evaluation, FeatureSet, WeightSet};

/// Fixed decision cutoff. A score at or above this predicts "cat".
pub const THRESHOLD: f64 = 0.6;

/// Scores a feature set under the given weights.
///
/// The score is `ears + eyes + tail`, where each term is the feature's
/// weight if the flag is set and `0.0` otherwise. Terms are added in that
/// order and nothing is rounded. Weights are used exactly as given: no
/// clamping, no normalization, so the score can exceed 1.0.
///
/// # Examples
///
/// ```
/// use cat_neuron::decision::{evaluate, FeatureSet, WeightSet};
///
/// let eval = evaluate(&FeatureSet::new(true, true, false), &WeightSet::default());
/// assert!((eval.score - 0.8).abs() < 1e-9);
/// assert!(eval.is_cat);
/// ```
pub fn evaluate(features: &FeatureSet, weights: &WeightSet) -> Evaluation {
    let ears_term = term(features.has_pointed_ears, weights.ears);
    let eyes_term = term(features.has_cat_eyes, weights.eyes);
    let tail_term = term(features.has_long_tail, weights.tail);
    let score = ears_term + eyes_term + tail_term;

    Evaluation {
        ears_term,
        eyes_term,
        tail_term,
        score,
        is_cat: is_cat(score),
    }
}

/// Threshold comparison. Non-strict: exactly [`THRESHOLD`] is a cat.
pub fn is_cat(score: f64) -> bool {
    score >= THRESHOLD
}

#[inline]
fn term(observed: bool, weight: f64) -> f64 {
    if observed {
        weight
    } else {
        0.0
    }
}
