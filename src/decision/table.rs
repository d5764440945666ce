//! Ranking of every feature combination under one weight setting.

use serde::{Deserialize, Serialize};

use super::engine::evaluate;
use super::types::{Evaluation, FeatureSet, WeightSet};

/// One feature combination and how it scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub features: FeatureSet,
    pub evaluation: Evaluation,
}

/// All eight feature combinations scored under a fixed [`WeightSet`],
/// highest score first.
///
/// Scores closer than `epsilon` count as tied; tied rows keep the order of
/// [`FeatureSet::all_combinations`].
///
/// # Examples
///
/// ```
/// use cat_neuron::decision::{DecisionTable, WeightSet};
///
/// let table = DecisionTable::build(&WeightSet::default());
/// assert_eq!(table.rows().len(), 8);
/// assert!(table.rows()[0].evaluation.is_cat);
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTable {
    rows: Vec<TableRow>,
}

impl DecisionTable {
    /// Default tie tolerance for score ranking.
    pub const EPSILON: f64 = 1e-9;

    /// Builds the table with the default tie tolerance.
    pub fn build(weights: &WeightSet) -> Self {
        Self::build_with_epsilon(weights, Self::EPSILON)
    }

    /// Builds the table with a custom tie tolerance.
    pub fn build_with_epsilon(weights: &WeightSet, epsilon: f64) -> Self {
        let mut rows: Vec<TableRow> = FeatureSet::all_combinations()
            .iter()
            .map(|features| TableRow {
                features: *features,
                evaluation: evaluate(features, weights),
            })
            .collect();

        // Stable sort, so rows within epsilon of each other keep enumeration order.
        rows.sort_by(|a, b| {
            let (sa, sb) = (a.evaluation.score, b.evaluation.score);
            if (sa - sb).abs() <= epsilon {
                return std::cmp::Ordering::Equal;
            }
            sb.partial_cmp(&sa).unwrap_or(std::cmp::Ordering::Equal)
        });

        Self { rows }
    }

    /// Returns the rows in ranked order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Consumes the table and returns the ranked rows.
    pub fn into_rows(self) -> Vec<TableRow> {
        self.rows
    }

    /// Number of combinations classified as cat.
    pub fn cat_count(&self) -> usize {
        self.rows.iter().filter(|r| r.evaluation.is_cat).count()
    }

    /// Lowest score that still classifies as cat, if any combination does.
    pub fn weakest_cat_score(&self) -> Option<f64> {
        self.rows
            .iter()
            .filter(|r| r.evaluation.is_cat)
            .map(|r| r.evaluation.score)
            .reduce(f64::min)
    }
}

/// Scores all eight combinations under `weights`, highest score first.
pub fn decision_table(weights: &WeightSet) -> Vec<TableRow> {
    DecisionTable::build(weights).into_rows()
}
