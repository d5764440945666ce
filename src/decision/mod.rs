//! The decision engine.
//!
//! A single linear unit with three boolean inputs:
//!
//! - **Inputs**: observed traits ([`FeatureSet`]).
//! - **Weights**: per-trait importance ([`WeightSet`]).
//! - **Activation**: a fixed step at [`THRESHOLD`]; the unit fires
//!   ("cat") when the weighted sum reaches it.
//!
//! [`evaluate`] is pure and total: any weights, any flags, no errors.
//! [`DecisionTable`] scores all eight flag combinations at once so a
//! learner can see which of them cross the threshold.

mod engine;
mod table;
mod types;

pub use engine::{evaluate, is_cat, THRESHOLD};
pub use table::{decision_table, DecisionTable, TableRow};
pub use types::{
    Evaluation, Feature, FeatureSet, WeightSet, DEFAULT_EARS_WEIGHT, DEFAULT_EYES_WEIGHT,
    DEFAULT_TAIL_WEIGHT,
};
