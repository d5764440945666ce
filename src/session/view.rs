//! What a front end renders for the current state.

use serde::Serialize;

use super::state::ImageSelection;
use super::text;
use crate::decision::{evaluate, Evaluation, FeatureSet, WeightSet, THRESHOLD};

/// `true` when the learner is looking at a non-cat image but the unit
/// still predicts "cat".
pub fn confidently_wrong(image: ImageSelection, is_cat: bool) -> bool {
    image == ImageSelection::NotCat && is_cat
}

/// Tone of the prediction banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Rendered success-style.
    Cat,
    /// Rendered failure-style.
    NotCat,
}

impl Outcome {
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Cat => text::PREDICTION_CAT,
            Outcome::NotCat => text::PREDICTION_NOT_CAT,
        }
    }
}

/// A fully derived snapshot of one render.
///
/// Built fresh from state each time; holding one across state changes
/// shows stale values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub image: ImageSelection,
    pub features: FeatureSet,
    pub weights: WeightSet,
    pub evaluation: Evaluation,
    pub threshold: f64,
    /// Score with two decimals.
    pub score_text: String,
    pub outcome: Outcome,
    pub outcome_message: &'static str,
    /// Present only when the prediction is confidently wrong.
    pub warning: Option<&'static str>,
}

impl SessionView {
    pub fn derive(image: ImageSelection, features: FeatureSet, weights: WeightSet) -> Self {
        let evaluation = evaluate(&features, &weights);
        let outcome = if evaluation.is_cat {
            Outcome::Cat
        } else {
            Outcome::NotCat
        };
        let warning = confidently_wrong(image, evaluation.is_cat).then_some(text::CONFIDENTLY_WRONG);

        Self {
            image,
            features,
            weights,
            evaluation,
            threshold: THRESHOLD,
            score_text: evaluation.score_text(),
            outcome,
            outcome_message: outcome.message(),
            warning,
        }
    }

    pub fn shows_warning(&self) -> bool {
        self.warning.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Feature;
    use crate::session::SessionState;

    #[test]
    fn test_confidently_wrong_truth_table() {
        assert!(confidently_wrong(ImageSelection::NotCat, true));
        assert!(!confidently_wrong(ImageSelection::NotCat, false));
        assert!(!confidently_wrong(ImageSelection::Cat, true));
        assert!(!confidently_wrong(ImageSelection::Cat, false));
    }

    #[test]
    fn test_not_cat_image_with_strong_ears() {
        let mut state = SessionState::new();
        state.select_image(ImageSelection::NotCat);
        state.set_feature(Feature::PointedEars, true);
        state.set_weight(Feature::PointedEars, 1.0).unwrap();

        let view = state.view();
        assert_eq!(view.score_text, "1.00");
        assert_eq!(view.outcome, Outcome::Cat);
        assert_eq!(view.warning, Some(text::CONFIDENTLY_WRONG));
    }

    #[test]
    fn test_cat_image_never_warns() {
        let mut state = SessionState::new();
        for f in Feature::ALL {
            state.set_feature(f, true);
            state.set_weight(f, 1.0).unwrap();
        }
        let view = state.view();
        assert!(view.evaluation.is_cat);
        assert!(!view.shows_warning());
    }

    #[test]
    fn test_warning_tracks_every_render() {
        let mut state = SessionState::new();
        state.select_image(ImageSelection::NotCat);
        state.set_feature(Feature::PointedEars, true);
        state.set_feature(Feature::CatEyes, true);

        assert!(state.view().shows_warning());
        assert!(state.view().shows_warning());

        state.set_feature(Feature::CatEyes, false);
        assert!(!state.view().shows_warning());

        state.set_feature(Feature::CatEyes, true);
        assert!(state.view().shows_warning());
    }

    #[test]
    fn test_outcome_messages() {
        let view = SessionState::new().view();
        assert_eq!(view.outcome, Outcome::NotCat);
        assert_eq!(view.outcome_message, text::PREDICTION_NOT_CAT);
        assert_eq!(view.score_text, "0.00");
        assert!((view.threshold - 0.6).abs() < 1e-12);
    }
}
