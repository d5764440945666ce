//! "You Are the Neural Network": an interactive demo of a single linear
//! classifier unit.
//!
//! The learner plays the network. They mark which traits they observe in
//! an image (pointed ears, cat-like eyes, long tail), set how important
//! each trait is, and watch the weighted score cross (or miss) a fixed
//! threshold of 0.6 that decides "cat" or "not cat".
//!
//! - **[`decision`]**: the pure scoring function and the table of all
//!   feature combinations.
//! - **[`session`]**: caller-owned session state, its setters and reset,
//!   and the derived view a front end renders (including the "confidently
//!   wrong" warning).
//! - **[`config`]**: presentation settings loaded from TOML.
//! - **`tui`** (feature `tui`, default): terminal front end used by the
//!   `cat-neuron` binary.
//! - **`wasm`** (feature `wasm`): bindings for a browser page.
//!
//! # Example
//!
//! ```
//! use cat_neuron::decision::Feature;
//! use cat_neuron::session::{ImageSelection, SessionState};
//!
//! let mut state = SessionState::new();
//! state.select_image(ImageSelection::NotCat);
//! state.set_feature(Feature::PointedEars, true);
//! state.set_weight(Feature::PointedEars, 1.0).unwrap();
//!
//! let view = state.view();
//! assert_eq!(view.score_text, "1.00");
//! assert!(view.evaluation.is_cat);
//! assert!(view.shows_warning());
//! ```

pub mod config;
pub mod decision;
pub mod error;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{DemoError, Result};
