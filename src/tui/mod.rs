//! Terminal front end.
//!
//! Event loop shape: draw, wait for one key, dispatch the mapped
//! [`Action`], repeat. The frame is always rebuilt from
//! [`App::view`], so what the learner sees cannot lag behind the
//! session state.

mod app;
mod event;
mod terminal;
mod view;

pub use app::{Action, App};
pub use event::{map_key, EventHandler};
pub use terminal::Tui;
pub use view::render;
