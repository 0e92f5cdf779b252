//! Application state management.

use ratatui::widgets::TableState as RatatuiTableState;
use tracing::{info, warn};

use crate::model::{Record, Status};
use crate::view::{SortField, ViewError, ViewState, derive_view, update_status};

/// Number of ticks a status message stays visible.
const STATUS_MESSAGE_TICKS: u8 = 12;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the name search box.
    Search,
    /// Typing the start date bound.
    DateStart,
    /// Typing the end date bound.
    DateEnd,
}

impl InputMode {
    pub fn is_date(&self) -> bool {
        matches!(self, InputMode::DateStart | InputMode::DateEnd)
    }
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Status editor for one record with the highlighted choice.
    StatusEditor { id: u32, choice: Status },
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Full record set. Only status edits change it.
    pub records: Vec<Record>,
    /// Filter, sort and pagination settings.
    pub view: ViewState,
    /// Input mode.
    pub input_mode: InputMode,
    /// Search box buffer.
    pub search_input: String,
    /// Date bound input buffer (`f` / `t`).
    pub date_input: String,
    /// Last date parse error to display in the popup.
    pub date_error: Option<String>,
    /// Selected row index within the current page.
    pub selected: usize,
    /// Column cursor for keyboard sorting (`←`/`→`, `o`).
    pub column_cursor: SortField,
    /// Active popup state.
    pub popup: PopupState,
    /// Temporary status message shown in the header.
    pub status_message: Option<String>,
    /// Ticks left before `status_message` is cleared.
    status_ticks: u8,
    /// Ratatui table state (selection highlight).
    pub ratatui_state: RatatuiTableState,
}

impl AppState {
    pub fn new(records: Vec<Record>, view: ViewState) -> Self {
        let search_input = view.filter.search.clone();
        let mut state = Self {
            records,
            view,
            input_mode: InputMode::Normal,
            search_input,
            date_input: String::new(),
            date_error: None,
            selected: 0,
            column_cursor: SortField::Id,
            popup: PopupState::None,
            status_message: None,
            status_ticks: 0,
            ratatui_state: RatatuiTableState::default(),
        };
        state.column_cursor = state.view.sort.field;
        state.refresh();
        state
    }

    /// Replaces the view state. A different view starts at the top of the page.
    pub fn set_view(&mut self, view: ViewState) {
        if view != self.view {
            self.view = view;
            self.selected = 0;
        }
        self.refresh();
    }

    /// Number of records passing the current filter.
    pub fn filtered_len(&self) -> usize {
        derive_view(&self.records, &self.view).filtered_len
    }

    /// Ids of the rows on the current page, in display order.
    pub fn page_ids(&self) -> Vec<u32> {
        derive_view(&self.records, &self.view)
            .rows
            .iter()
            .map(|r| r.id)
            .collect()
    }

    /// Id of the selected row, if the page is not empty.
    pub fn selected_id(&self) -> Option<u32> {
        self.page_ids().get(self.selected).copied()
    }

    pub fn record(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Clamps the page to the filtered list and the selection to the page,
    /// and syncs the ratatui table state.
    pub fn refresh(&mut self) {
        let view = derive_view(&self.records, &self.view);
        let clamped = view.pagination;
        let rows = view.rows.len();
        if clamped != self.view.pagination {
            self.view = self.view.with_page(clamped.page);
        }

        if rows == 0 {
            self.selected = 0;
            self.ratatui_state.select(None);
        } else {
            self.selected = self.selected.min(rows - 1);
            self.ratatui_state.select(Some(self.selected));
        }
    }

    /// Sets record `id` to `status`.
    pub fn apply_status(&mut self, id: u32, status: Status) -> Result<(), ViewError> {
        let records = update_status(&self.records, id, status)?;
        self.records = records;
        info!(id, status = %status, "status changed");
        self.refresh();
        Ok(())
    }

    /// Opens the status editor on the selected row.
    pub fn open_status_editor(&mut self) {
        let Some(id) = self.selected_id() else {
            self.set_status_message("No row selected");
            return;
        };
        if let Some(record) = self.record(id) {
            self.popup = PopupState::StatusEditor {
                id,
                choice: record.status(),
            };
        }
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "action rejected");
        self.status_message = Some(message);
        self.status_ticks = STATUS_MESSAGE_TICKS;
    }

    /// Advances timers on each event-loop tick.
    pub fn on_tick(&mut self) {
        if self.status_message.is_some() {
            self.status_ticks = self.status_ticks.saturating_sub(1);
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.refresh();
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
        self.refresh();
    }
}
