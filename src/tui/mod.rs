//! Terminal User Interface for usertable.
//!
//! Interactive table over the view model: search, status and date filters,
//! column sorting, pagination and in-place status edits.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use input::{KeyAction, handle_key};
pub use state::{AppState, InputMode, PopupState};
