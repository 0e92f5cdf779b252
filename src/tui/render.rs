//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::view::derive_view;
use crate::view::users::build_users_view;

use super::state::{AppState, PopupState};
use super::widgets::{
    render_date_input, render_filters, render_footer, render_header, render_help,
    render_quit_confirm, render_status_editor, render_users,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Filters
        Constraint::Min(5),    // Users table
        Constraint::Length(1), // Footer
    ])
    .split(area);

    let view = derive_view(&state.records, &state.view);
    let vm = build_users_view(&view, &state.view);

    render_header(frame, chunks[0], state, &view.counts);
    render_filters(frame, chunks[1], &state.view.filter);
    render_footer(frame, chunks[3], &view);
    render_users(frame, chunks[2], &vm, state);

    // Date input popup
    if state.input_mode.is_date() && !state.popup.is_open() {
        render_date_input(
            frame,
            area,
            state.input_mode,
            &state.date_input,
            state.date_error.as_deref(),
        );
    }

    // Popups are rendered last to overlay everything
    match &mut state.popup {
        PopupState::None => {}
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::StatusEditor { id, choice } => {
            let (id, choice) = (*id, *choice);
            if let Some(record) = state.records.iter().find(|r| r.id == id) {
                render_status_editor(frame, area, record, choice);
            }
        }
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::generate_seeded;
    use crate::model::Status;
    use crate::tui::state::InputMode;
    use crate::view::ViewState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(state: &mut AppState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_table_counts_and_footer() {
        let mut state = AppState::new(generate_seeded(100, Some(5)), ViewState::default());
        let screen = draw(&mut state);

        assert!(screen.contains("Total: 100"));
        assert!(screen.contains("Users 1-5 of 100"));
        assert!(screen.contains("Rows per page: 5"));
        assert!(screen.contains("Page 1/20"));
        assert!(screen.contains("Inactive Users:"));
        assert!(screen.contains("id▲"));
        assert!(screen.contains("User "));
    }

    #[test]
    fn renders_popups() {
        let mut state = AppState::new(generate_seeded(10, Some(5)), ViewState::default());

        state.popup = PopupState::QuitConfirm;
        assert!(draw(&mut state).contains("Exit usertable"));

        state.popup = PopupState::Help { scroll: 1000 };
        let screen = draw(&mut state);
        assert!(screen.contains("Help"));
        // Scroll is clamped to the content during render.
        assert!(matches!(state.popup, PopupState::Help { scroll } if scroll < 1000));

        state.popup = PopupState::StatusEditor {
            id: 1,
            choice: Status::Blocked,
        };
        assert!(draw(&mut state).contains("Status of User"));

        state.popup = PopupState::None;
        state.input_mode = InputMode::DateStart;
        state.date_error = Some("bad date".to_string());
        let screen = draw(&mut state);
        assert!(screen.contains("Created on or after"));
        assert!(screen.contains("Error: bad date"));
    }

    #[test]
    fn renders_empty_result() {
        let mut state = AppState::new(generate_seeded(10, Some(5)), ViewState::default());
        state.set_view(state.view.with_search("nobody here"));
        let screen = draw(&mut state);
        assert!(screen.contains("Users: no matches"));
        assert!(screen.contains("0 of 0"));
    }
}
