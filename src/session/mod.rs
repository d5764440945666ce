//! Session state and presentation policy.
//!
//! [`SessionState`] is the explicit, caller-owned state of one learner's
//! session. Front ends mutate it through its setters or [`SessionState::reset`]
//! and call [`SessionState::view`] after every change; the returned
//! [`SessionView`] carries the score, the prediction banner, and the
//! "confidently wrong" warning, all derived on the spot.

mod state;
pub mod text;
mod view;

pub use state::{ImageSelection, SessionState, WEIGHT_MAX, WEIGHT_MIN};
pub use view::{confidently_wrong, Outcome, SessionView};
