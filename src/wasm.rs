//! Browser bindings.
//!
//! The host page owns a [`WasmSession`], forwards every control event to
//! it, and re-renders from [`WasmSession::view`] afterwards.
//!
//! ```js
//! const session = new WasmSession();
//! session.toggleFeature(0);          // pointed ears
//! session.setWeight(0, 1.0);
//! const view = session.view();       // { score_text: "1.00", outcome: "Cat", ... }
//! ```

use wasm_bindgen::prelude::*;

use crate::decision::{DecisionTable, Feature};
use crate::session::{ImageSelection, SessionState};

fn feature_at(index: usize) -> Result<Feature, JsValue> {
    Feature::from_index(index)
        .ok_or_else(|| JsValue::from_str(&format!("feature index out of range: {index}")))
}

/// One learner's session, owned by the JS page.
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmSession {
    state: SessionState,
}

#[wasm_bindgen]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` selects "NOT A CAT", `false` selects "CAT".
    #[wasm_bindgen(js_name = setImage)]
    pub fn set_image(&mut self, not_cat: bool) {
        let image = if not_cat {
            ImageSelection::NotCat
        } else {
            ImageSelection::Cat
        };
        self.state.select_image(image);
    }

    #[wasm_bindgen(js_name = setFeature)]
    pub fn set_feature(&mut self, index: usize, observed: bool) -> Result<(), JsValue> {
        self.state.set_feature(feature_at(index)?, observed);
        Ok(())
    }

    #[wasm_bindgen(js_name = toggleFeature)]
    pub fn toggle_feature(&mut self, index: usize) -> Result<bool, JsValue> {
        Ok(self.state.toggle_feature(feature_at(index)?))
    }

    /// Returns the clamped value actually applied.
    #[wasm_bindgen(js_name = setWeight)]
    pub fn set_weight(&mut self, index: usize, value: f64) -> Result<f64, JsValue> {
        self.state
            .set_weight(feature_at(index)?, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// The current [`SessionView`](crate::session::SessionView) as a JS object.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.state.view())?)
    }

    /// Every feature combination under the current weights, highest score first.
    #[wasm_bindgen(js_name = decisionTable)]
    pub fn decision_table(&self) -> Result<JsValue, JsValue> {
        let table = DecisionTable::build(self.state.weights());
        Ok(serde_wasm_bindgen::to_value(table.rows())?)
    }
}
