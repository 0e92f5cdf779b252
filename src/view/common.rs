//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a specific
//! rendering framework. The TUI maps them to ratatui styles.

use serde::Serialize;

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Positive state (TUI: green). ACTIVE users.
    Active,
    /// Warning level (TUI: yellow). INVITED users.
    Warning,
    /// Critical level (TUI: red). BLOCKED users.
    Critical,
    /// Dimmed (TUI: dark gray). Secondary columns.
    Dimmed,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone, Serialize)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone, Serialize)]
pub struct TableViewModel<Id> {
    pub title: String,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow<Id>>,
    pub sort_column: usize,
    pub sort_ascending: bool,
}
