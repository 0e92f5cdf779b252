//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::model::Status;
use crate::util::parse_date;
use crate::view::SortField;

use super::state::{AppState, InputMode, PopupState};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match state.popup.clone() {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { scroll } => return handle_help(state, key, scroll),
        PopupState::StatusEditor { id, choice } => {
            return handle_status_editor(state, key, id, choice);
        }
        PopupState::None => {}
    }

    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key),
        InputMode::Search => handle_search_mode(state, key),
        InputMode::DateStart | InputMode::DateEnd => handle_date_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent, scroll: usize) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('h') => {
            state.popup = PopupState::None;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.popup = PopupState::Help {
                scroll: scroll.saturating_sub(1),
            };
        }
        KeyCode::Down | KeyCode::Char('j') => {
            // Clamped during render
            state.popup = PopupState::Help {
                scroll: scroll.saturating_add(1),
            };
        }
        KeyCode::PageUp => {
            state.popup = PopupState::Help {
                scroll: scroll.saturating_sub(10),
            };
        }
        KeyCode::PageDown => {
            state.popup = PopupState::Help {
                scroll: scroll.saturating_add(10),
            };
        }
        _ => {}
    }
    KeyAction::None
}

fn handle_status_editor(state: &mut AppState, key: KeyEvent, id: u32, choice: Status) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.popup = PopupState::None;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.popup = PopupState::StatusEditor {
                id,
                choice: choice.prev(),
            };
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.popup = PopupState::StatusEditor {
                id,
                choice: choice.next(),
            };
        }
        KeyCode::Char('a') => set_choice(state, id, Status::Active),
        KeyCode::Char('i') => set_choice(state, id, Status::Invited),
        KeyCode::Char('b') => set_choice(state, id, Status::Blocked),
        KeyCode::Enter => {
            state.popup = PopupState::None;
            if let Err(e) = state.apply_status(id, choice) {
                state.set_status_message(e.to_string());
            }
        }
        _ => {}
    }
    KeyAction::None
}

fn set_choice(state: &mut AppState, id: u32, choice: Status) {
    state.popup = PopupState::StatusEditor { id, choice };
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
        }

        // Help
        KeyCode::Char('?') | KeyCode::Char('h') => {
            state.popup = PopupState::Help { scroll: 0 };
        }

        // Filters
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
            state.search_input = state.view.filter.search.clone();
        }
        KeyCode::Char('s') => {
            let next = match state.view.filter.status {
                None => Some(Status::Active),
                Some(Status::Blocked) => None,
                Some(s) => Some(s.next()),
            };
            debug!(status = ?next, "status filter");
            state.set_view(state.view.with_status_filter(next));
        }
        KeyCode::Char('f') => {
            state.input_mode = InputMode::DateStart;
            state.date_input = date_to_input(state.view.filter.date_range.start);
            state.date_error = None;
        }
        KeyCode::Char('t') => {
            state.input_mode = InputMode::DateEnd;
            state.date_input = date_to_input(state.view.filter.date_range.end);
            state.date_error = None;
        }
        KeyCode::Char('x') => {
            state.search_input.clear();
            state.set_view(state.view.cleared_filters());
        }

        // Sorting
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            if let Some(field) = SortField::from_index(index) {
                sort_by(state, field);
            }
        }
        KeyCode::Left => {
            let index = state.column_cursor.index();
            let count = SortField::all().len();
            state.column_cursor =
                SortField::from_index((index + count - 1) % count).unwrap_or_default();
        }
        KeyCode::Right => {
            let index = state.column_cursor.index();
            let count = SortField::all().len();
            state.column_cursor = SortField::from_index((index + 1) % count).unwrap_or_default();
        }
        KeyCode::Char('o') => {
            let field = state.column_cursor;
            sort_by(state, field);
        }

        // Row navigation
        KeyCode::Up | KeyCode::Char('k') => state.select_up(),
        KeyCode::Down | KeyCode::Char('j') => state.select_down(),

        // Pages
        KeyCode::PageDown | KeyCode::Char('n') => {
            let len = state.filtered_len();
            state.set_view(state.view.next_page(len));
        }
        KeyCode::PageUp | KeyCode::Char('p') => {
            state.set_view(state.view.prev_page());
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.set_view(state.view.with_page(0));
        }
        KeyCode::End | KeyCode::Char('G') => {
            let len = state.filtered_len();
            state.set_view(state.view.last_page(len));
        }
        KeyCode::Char('r') => {
            state.set_view(state.view.with_next_rows_per_page());
        }

        // Status editor
        KeyCode::Enter | KeyCode::Char('e') => state.open_status_editor(),

        _ => {}
    }
    KeyAction::None
}

fn sort_by(state: &mut AppState, field: SortField) {
    state.column_cursor = field;
    let view = state.view.with_sort_toggled(field);
    debug!(field = %view.sort.field, direction = ?view.sort.direction, "sort");
    state.set_view(view);
}

/// Search box: the filter follows every keystroke.
fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            // Cancel search
            state.input_mode = InputMode::Normal;
            state.search_input.clear();
            state.set_view(state.view.with_search(""));
        }
        KeyCode::Enter => {
            // Already applied, just switch mode
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.set_view(state.view.with_search(state.search_input.clone()));
        }
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.set_view(state.view.with_search(state.search_input.clone()));
        }
        _ => {}
    }
    KeyAction::None
}

/// Date bound input: applied on Enter. Empty input clears the bound.
fn handle_date_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            state.input_mode = InputMode::Normal;
            state.date_input.clear();
            state.date_error = None;
        }
        KeyCode::Backspace => {
            state.date_input.pop();
        }
        KeyCode::Char(c) => {
            state.date_input.push(c);
        }
        KeyCode::Enter => apply_date_input(state),
        _ => {}
    }
    KeyAction::None
}

fn apply_date_input(state: &mut AppState) {
    let input = state.date_input.trim();
    let date = if input.is_empty() {
        None
    } else {
        match parse_date(input) {
            Ok(d) => Some(d),
            Err(e) => {
                state.date_error = Some(e.message);
                return;
            }
        }
    };

    let view = match state.input_mode {
        InputMode::DateStart => state.view.with_start_date(date),
        InputMode::DateEnd => state.view.with_end_date(date),
        InputMode::Normal | InputMode::Search => return,
    };
    state.set_view(view);
    state.input_mode = InputMode::Normal;
    state.date_input.clear();
    state.date_error = None;
}

fn date_to_input(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::generate_seeded;
    use crate::model::test_support::record;
    use crate::view::{SortDirection, SortState, ViewState};
    use chrono::NaiveDate;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            let _ = handle_key(state, key(KeyCode::Char(c)));
        }
    }

    fn state() -> AppState {
        AppState::new(generate_seeded(100, Some(21)), ViewState::default())
    }

    #[test]
    fn quit_requires_confirmation() {
        let mut s = state();
        assert_eq!(handle_key(&mut s, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(s.popup, PopupState::QuitConfirm);
        assert_eq!(handle_key(&mut s, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(s.popup, PopupState::None);

        let _ = handle_key(&mut s, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut s, key(KeyCode::Enter)), KeyAction::Quit);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut s = state();
        s.input_mode = InputMode::Search;
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handle_key(&mut s, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn search_filters_in_real_time() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('/')));
        assert_eq!(s.input_mode, InputMode::Search);

        type_str(&mut s, "USER 1");
        assert_eq!(s.view.filter.search, "USER 1");
        let expected = s
            .records
            .iter()
            .filter(|r| r.about.name.to_lowercase().contains("user 1"))
            .count();
        assert_eq!(s.filtered_len(), expected);

        let _ = handle_key(&mut s, key(KeyCode::Backspace));
        assert_eq!(s.view.filter.search, "USER ");

        let _ = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.input_mode, InputMode::Normal);
        assert_eq!(s.view.filter.search, "USER ");

        let _ = handle_key(&mut s, key(KeyCode::Char('/')));
        let _ = handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.view.filter.search, "");
        assert_eq!(s.filtered_len(), 100);
    }

    #[test]
    fn search_typing_does_not_trigger_normal_keys() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('/')));
        type_str(&mut s, "qs");
        assert_eq!(s.popup, PopupState::None);
        assert_eq!(s.view.filter.status, None);
        assert_eq!(s.view.filter.search, "qs");
    }

    #[test]
    fn status_filter_cycles() {
        let mut s = state();
        let mut seen = Vec::new();
        for _ in 0..4 {
            let _ = handle_key(&mut s, key(KeyCode::Char('s')));
            seen.push(s.view.filter.status);
        }
        assert_eq!(
            seen,
            vec![
                Some(Status::Active),
                Some(Status::Invited),
                Some(Status::Blocked),
                None
            ]
        );
    }

    #[test]
    fn number_keys_toggle_sort_and_filters_reset_it() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('2')));
        assert_eq!(s.view.sort, SortState::new(SortField::Name, SortDirection::Asc));
        let _ = handle_key(&mut s, key(KeyCode::Char('2')));
        assert_eq!(s.view.sort, SortState::new(SortField::Name, SortDirection::Desc));

        let _ = handle_key(&mut s, key(KeyCode::Char('s')));
        assert_eq!(s.view.sort, SortState::default());
    }

    #[test]
    fn column_cursor_sorts_selected_column() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Left));
        assert_eq!(s.column_cursor, SortField::InvitedBy);
        let _ = handle_key(&mut s, key(KeyCode::Right));
        let _ = handle_key(&mut s, key(KeyCode::Right));
        assert_eq!(s.column_cursor, SortField::Name);
        let _ = handle_key(&mut s, key(KeyCode::Char('o')));
        assert_eq!(s.view.sort.field, SortField::Name);
    }

    #[test]
    fn paging_keys() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::PageDown));
        assert_eq!(s.view.pagination.page, 1);
        let _ = handle_key(&mut s, key(KeyCode::End));
        assert_eq!(s.view.pagination.page, 19);
        let _ = handle_key(&mut s, key(KeyCode::Char('n')));
        assert_eq!(s.view.pagination.page, 19);
        let _ = handle_key(&mut s, key(KeyCode::Char('p')));
        assert_eq!(s.view.pagination.page, 18);

        // Rows-per-page change returns to the first page.
        let _ = handle_key(&mut s, key(KeyCode::Char('r')));
        assert_eq!(s.view.pagination.page, 0);
        assert_eq!(s.view.pagination.rows_per_page, 10);
        let _ = handle_key(&mut s, key(KeyCode::End));
        assert_eq!(s.view.pagination.page, 9);
        let _ = handle_key(&mut s, key(KeyCode::Home));
        assert_eq!(s.view.pagination.page, 0);
    }

    #[test]
    fn date_bounds_from_popup_input() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('f')));
        assert_eq!(s.input_mode, InputMode::DateStart);
        type_str(&mut s, "2010-01-01");
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.input_mode, InputMode::Normal);
        assert_eq!(
            s.view.filter.date_range.start,
            NaiveDate::from_ymd_opt(2010, 1, 1)
        );

        // Invalid input keeps the popup open with an error.
        let _ = handle_key(&mut s, key(KeyCode::Char('t')));
        type_str(&mut s, "someday");
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.input_mode, InputMode::DateEnd);
        assert!(s.date_error.is_some());
        assert_eq!(s.view.filter.date_range.end, None);
        let _ = handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.input_mode, InputMode::Normal);

        // Empty input clears the bound; the popup is prefilled with the current value.
        let _ = handle_key(&mut s, key(KeyCode::Char('f')));
        assert_eq!(s.date_input, "2010-01-01");
        for _ in 0..10 {
            let _ = handle_key(&mut s, key(KeyCode::Backspace));
        }
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.view.filter.date_range.start, None);
    }

    #[test]
    fn clear_filters_key() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('s')));
        let _ = handle_key(&mut s, key(KeyCode::Char('/')));
        type_str(&mut s, "9");
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        let _ = handle_key(&mut s, key(KeyCode::Char('x')));
        assert!(s.view.filter.is_empty());
        assert!(s.search_input.is_empty());
    }

    #[test]
    fn status_editor_applies_choice() {
        let records = vec![
            record(1, "User 1", Status::Active, (2010, 1, 1)),
            record(2, "User 2", Status::Invited, (2011, 1, 1)),
        ];
        let mut s = AppState::new(records, ViewState::default());
        let _ = handle_key(&mut s, key(KeyCode::Down));
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(
            s.popup,
            PopupState::StatusEditor {
                id: 2,
                choice: Status::Invited
            }
        );

        let _ = handle_key(&mut s, key(KeyCode::Down));
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.popup, PopupState::None);
        assert_eq!(s.record(2).unwrap().status(), Status::Blocked);
        assert_eq!(s.record(1).unwrap().status(), Status::Active);
    }

    #[test]
    fn status_editor_cancel_keeps_status() {
        let mut s = state();
        let id = s.selected_id().unwrap();
        let before = s.record(id).unwrap().status();
        let _ = handle_key(&mut s, key(KeyCode::Char('e')));
        let _ = handle_key(&mut s, key(KeyCode::Char('b')));
        let _ = handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.popup, PopupState::None);
        assert_eq!(s.record(id).unwrap().status(), before);
    }

    #[test]
    fn status_editor_on_empty_page_sets_message() {
        let mut s = state();
        s.set_view(s.view.with_search("no such name"));
        let _ = handle_key(&mut s, key(KeyCode::Enter));
        assert_eq!(s.popup, PopupState::None);
        assert!(s.status_message.is_some());
    }

    #[test]
    fn help_popup_scrolls_and_closes() {
        let mut s = state();
        let _ = handle_key(&mut s, key(KeyCode::Char('?')));
        let _ = handle_key(&mut s, key(KeyCode::Down));
        let _ = handle_key(&mut s, key(KeyCode::Down));
        assert_eq!(s.popup, PopupState::Help { scroll: 2 });
        let _ = handle_key(&mut s, key(KeyCode::Esc));
        assert_eq!(s.popup, PopupState::None);
    }
}
