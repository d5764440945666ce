//! Mutable session state and its setters.

use serde::{Deserialize, Serialize};

use super::view::SessionView;
use crate::decision::{evaluate, Evaluation, Feature, FeatureSet, WeightSet};
use crate::error::{DemoError, Result};

/// Lower end of a weight slider.
pub const WEIGHT_MIN: f64 = 0.0;
/// Upper end of a weight slider.
pub const WEIGHT_MAX: f64 = 1.0;

/// Which illustrative image the learner is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSelection {
    #[default]
    Cat,
    NotCat,
}

impl ImageSelection {
    pub const ALL: [ImageSelection; 2] = [ImageSelection::Cat, ImageSelection::NotCat];

    /// Label of the selector option.
    pub fn label(self) -> &'static str {
        match self {
            ImageSelection::Cat => "CAT",
            ImageSelection::NotCat => "NOT A CAT",
        }
    }

    /// The other option.
    pub fn toggled(self) -> Self {
        match self {
            ImageSelection::Cat => ImageSelection::NotCat,
            ImageSelection::NotCat => ImageSelection::Cat,
        }
    }
}

/// Everything the learner can change during one session.
///
/// Owned by the front end. Mutated only through the methods below;
/// derived values (score, prediction, notices) are never stored and are
/// recomputed by [`SessionState::view`] on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    image: ImageSelection,
    features: FeatureSet,
    weights: WeightSet,
}

impl SessionState {
    /// A fresh session with every control at its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> ImageSelection {
        self.image
    }

    pub fn features(&self) -> &FeatureSet {
        &self.features
    }

    pub fn weights(&self) -> &WeightSet {
        &self.weights
    }

    pub fn select_image(&mut self, image: ImageSelection) {
        log::debug!("image selection -> {}", image.label());
        self.image = image;
    }

    pub fn toggle_image(&mut self) -> ImageSelection {
        self.select_image(self.image.toggled());
        self.image
    }

    pub fn set_feature(&mut self, feature: Feature, observed: bool) {
        log::debug!("feature {} -> {observed}", feature.name());
        self.features.set(feature, observed);
    }

    /// Flips a feature flag and returns its new value.
    pub fn toggle_feature(&mut self, feature: Feature) -> bool {
        let observed = self.features.toggle(feature);
        log::debug!("feature {} -> {observed}", feature.name());
        observed
    }

    /// Moves a weight slider to `value`.
    ///
    /// Behaves like the slider control: the value is clamped into
    /// `[WEIGHT_MIN, WEIGHT_MAX]` and the applied value is returned.
    /// NaN and infinities are rejected and leave the weight unchanged.
    pub fn set_weight(&mut self, feature: Feature, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(DemoError::NonFiniteWeight { feature, value });
        }
        let applied = value.clamp(WEIGHT_MIN, WEIGHT_MAX);
        log::debug!("weight {} -> {applied}", feature.name());
        self.weights.set(feature, applied);
        Ok(applied)
    }

    /// Nudges a weight slider by `delta`, clamped like [`set_weight`].
    ///
    /// The result is snapped to a multiple of `delta` so repeated nudges
    /// do not accumulate floating-point drift.
    ///
    /// [`set_weight`]: SessionState::set_weight
    pub fn adjust_weight(&mut self, feature: Feature, delta: f64) -> Result<f64> {
        let mut target = self.weights.get(feature) + delta;
        if delta != 0.0 && delta.is_finite() {
            let step = delta.abs();
            target = (target / step).round() * step;
        }
        self.set_weight(feature, target)
    }

    /// Restores the image selection, all flags, and all weights to their
    /// defaults. Calling it again has no further effect.
    pub fn reset(&mut self) {
        log::debug!("session reset");
        *self = Self::default();
    }

    /// Scores the current flags under the current weights.
    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.features, &self.weights)
    }

    /// Everything a front end needs to render, derived from current state.
    pub fn view(&self) -> SessionView {
        SessionView::derive(self.image, self.features, self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::DEFAULT_TAIL_WEIGHT;

    fn scrambled() -> SessionState {
        let mut state = SessionState::new();
        state.select_image(ImageSelection::NotCat);
        state.set_feature(Feature::PointedEars, true);
        state.set_feature(Feature::LongTail, true);
        state.set_weight(Feature::CatEyes, 0.9).unwrap();
        state.set_weight(Feature::LongTail, 1.0).unwrap();
        state
    }

    #[test]
    fn test_new_session_defaults() {
        let state = SessionState::new();
        assert_eq!(state.image(), ImageSelection::Cat);
        assert_eq!(*state.features(), FeatureSet::default());
        assert_eq!(*state.weights(), WeightSet::default());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = scrambled();
        state.reset();
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = scrambled();
        once.reset();
        let mut twice = scrambled();
        twice.reset();
        twice.reset();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reset_then_evaluate_is_not_cat() {
        let mut state = scrambled();
        state.reset();
        let eval = state.evaluate();
        assert_eq!(eval.score, 0.0);
        assert!(!eval.is_cat);
    }

    #[test]
    fn test_set_weight_clamps() {
        let mut state = SessionState::new();
        assert_eq!(state.set_weight(Feature::CatEyes, 1.7).unwrap(), 1.0);
        assert_eq!(state.set_weight(Feature::CatEyes, -0.3).unwrap(), 0.0);
        assert_eq!(state.weights().eyes, 0.0);
    }

    #[test]
    fn test_set_weight_rejects_nan() {
        let mut state = SessionState::new();
        let err = state.set_weight(Feature::LongTail, f64::NAN);
        assert!(matches!(
            err,
            Err(DemoError::NonFiniteWeight {
                feature: Feature::LongTail,
                ..
            })
        ));
        assert!((state.weights().tail - DEFAULT_TAIL_WEIGHT).abs() < 1e-12);
    }

    #[test]
    fn test_adjust_weight_steps_without_drift() {
        let mut state = SessionState::new();
        for _ in 0..10 {
            state.adjust_weight(Feature::LongTail, 0.01).unwrap();
        }
        assert!((state.weights().tail - 0.3).abs() < 1e-12);

        for _ in 0..100 {
            state.adjust_weight(Feature::LongTail, -0.01).unwrap();
        }
        assert_eq!(state.weights().tail, 0.0);
    }

    #[test]
    fn test_toggle_image() {
        let mut state = SessionState::new();
        assert_eq!(state.toggle_image(), ImageSelection::NotCat);
        assert_eq!(state.toggle_image(), ImageSelection::Cat);
    }

    #[test]
    fn test_toggle_feature_changes_score() {
        let mut state = SessionState::new();
        state.toggle_feature(Feature::PointedEars);
        state.toggle_feature(Feature::CatEyes);
        assert!(state.evaluate().is_cat);
        state.toggle_feature(Feature::CatEyes);
        assert!(!state.evaluate().is_cat);
    }
}
