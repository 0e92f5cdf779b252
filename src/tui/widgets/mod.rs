//! TUI widgets for usertable.

mod date_input;
mod filters;
mod footer;
mod header;
mod help;
mod quit_confirm;
mod status_editor;
mod users;

pub use date_input::render_date_input;
pub use filters::render_filters;
pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use quit_confirm::render_quit_confirm;
pub use status_editor::render_status_editor;
pub use users::render_users;
