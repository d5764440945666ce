//! Feature flags, importance weights, and evaluation results.

use serde::{Deserialize, Serialize};

/// Default importance of pointed ears.
pub const DEFAULT_EARS_WEIGHT: f64 = 0.4;
/// Default importance of cat-like eyes.
pub const DEFAULT_EYES_WEIGHT: f64 = 0.4;
/// Default importance of a long tail.
pub const DEFAULT_TAIL_WEIGHT: f64 = 0.2;

/// A simulated visual trait the learner can mark as observed.
///
/// Variants are listed in scoring order: the ears term is always added
/// first, then eyes, then tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    PointedEars,
    CatEyes,
    LongTail,
}

impl Feature {
    /// All features in scoring order.
    pub const ALL: [Feature; 3] = [Feature::PointedEars, Feature::CatEyes, Feature::LongTail];

    /// Position of this feature in [`Feature::ALL`].
    pub fn index(self) -> usize {
        match self {
            Feature::PointedEars => 0,
            Feature::CatEyes => 1,
            Feature::LongTail => 2,
        }
    }

    /// Inverse of [`Feature::index`].
    pub fn from_index(index: usize) -> Option<Feature> {
        Feature::ALL.get(index).copied()
    }

    /// Short name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Feature::PointedEars => "ears",
            Feature::CatEyes => "eyes",
            Feature::LongTail => "tail",
        }
    }

    /// Label of the toggle control for this feature.
    pub fn label(self) -> &'static str {
        match self {
            Feature::PointedEars => "Pointed ears detected",
            Feature::CatEyes => "Cat-like eyes detected",
            Feature::LongTail => "Long tail detected",
        }
    }

    /// Label of the slider control for this feature's weight.
    pub fn weight_label(self) -> &'static str {
        match self {
            Feature::PointedEars => "Importance of ears",
            Feature::CatEyes => "Importance of eyes",
            Feature::LongTail => "Importance of tail",
        }
    }
}

/// Which traits were observed in the image.
///
/// Every one of the eight combinations is valid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureSet {
    pub has_pointed_ears: bool,
    pub has_cat_eyes: bool,
    pub has_long_tail: bool,
}

impl FeatureSet {
    /// Creates a feature set from the three flags.
    pub fn new(has_pointed_ears: bool, has_cat_eyes: bool, has_long_tail: bool) -> Self {
        Self {
            has_pointed_ears,
            has_cat_eyes,
            has_long_tail,
        }
    }

    /// Returns whether `feature` was observed.
    pub fn get(&self, feature: Feature) -> bool {
        match feature {
            Feature::PointedEars => self.has_pointed_ears,
            Feature::CatEyes => self.has_cat_eyes,
            Feature::LongTail => self.has_long_tail,
        }
    }

    /// Sets the flag for `feature`.
    pub fn set(&mut self, feature: Feature, observed: bool) {
        match feature {
            Feature::PointedEars => self.has_pointed_ears = observed,
            Feature::CatEyes => self.has_cat_eyes = observed,
            Feature::LongTail => self.has_long_tail = observed,
        }
    }

    /// Flips one flag and returns its new value.
    pub fn toggle(&mut self, feature: Feature) -> bool {
        let observed = !self.get(feature);
        self.set(feature, observed);
        observed
    }

    /// Number of flags currently set.
    pub fn active_count(&self) -> usize {
        Feature::ALL.iter().filter(|&&f| self.get(f)).count()
    }

    /// All eight flag combinations.
    ///
    /// Bit 0 of the position is the ears flag, bit 1 eyes, bit 2 tail,
    /// so the first entry has nothing observed and the last has everything.
    pub fn all_combinations() -> [FeatureSet; 8] {
        let mut out = [FeatureSet::default(); 8];
        for (i, set) in out.iter_mut().enumerate() {
            *set = FeatureSet::new(i & 1 != 0, i & 2 != 0, i & 4 != 0);
        }
        out
    }
}

/// How strongly each trait contributes to the score.
///
/// Each weight is meant to live in `[0.0, 1.0]`, but that range belongs
/// to the slider control; this type stores whatever it is given. The
/// three weights are independent and need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    pub ears: f64,
    pub eyes: f64,
    pub tail: f64,
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            ears: DEFAULT_EARS_WEIGHT,
            eyes: DEFAULT_EYES_WEIGHT,
            tail: DEFAULT_TAIL_WEIGHT,
        }
    }
}

impl WeightSet {
    /// Creates a weight set from the three weights.
    pub fn new(ears: f64, eyes: f64, tail: f64) -> Self {
        Self { ears, eyes, tail }
    }

    /// Returns the weight of `feature`.
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::PointedEars => self.ears,
            Feature::CatEyes => self.eyes,
            Feature::LongTail => self.tail,
        }
    }

    /// Stores `weight` as-is, without clamping.
    pub fn set(&mut self, feature: Feature, weight: f64) {
        match feature {
            Feature::PointedEars => self.ears = weight,
            Feature::CatEyes => self.eyes = weight,
            Feature::LongTail => self.tail = weight,
        }
    }

    /// Sets the weight of `feature`, builder style.
    pub fn with_weight(mut self, feature: Feature, weight: f64) -> Self {
        self.set(feature, weight);
        self
    }
}

/// Result of scoring one feature set.
///
/// Each `*_term` is the contribution of one feature (its weight when the
/// flag is set, zero otherwise). `score` is their sum in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub ears_term: f64,
    pub eyes_term: f64,
    pub tail_term: f64,
    pub score: f64,
    pub is_cat: bool,
}

impl Evaluation {
    /// Contribution of a single feature to the score.
    pub fn term(&self, feature: Feature) -> f64 {
        match feature {
            Feature::PointedEars => self.ears_term,
            Feature::CatEyes => self.eyes_term,
            Feature::LongTail => self.tail_term,
        }
    }

    /// Score rounded to two decimals for display.
    pub fn score_text(&self) -> String {
        format!("{:.2}", self.score)
    }
}
