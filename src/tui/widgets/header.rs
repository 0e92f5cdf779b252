//! Header widget showing status counts and the input line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;
use crate::view::StatusCounts;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, counts: &StatusCounts) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // Title
        Constraint::Min(40),    // Counts
        Constraint::Length(36), // Search input or status message
    ])
    .split(area);

    frame.render_widget(Paragraph::new(" usertable ").style(Styles::header()), chunks[0]);

    let counts_line = Line::from(vec![
        Span::styled(" Total: ", Styles::header()),
        Span::styled(counts.total.to_string(), Styles::header()),
        Span::styled("  Active: ", Styles::header()),
        Span::styled(counts.active.to_string(), Styles::header()),
        Span::styled("  Inactive: ", Styles::header()),
        Span::styled(counts.inactive.to_string(), Styles::header()),
        Span::styled("  Blocked: ", Styles::header()),
        Span::styled(counts.blocked.to_string(), Styles::header()),
    ]);
    frame.render_widget(Paragraph::new(counts_line).style(Styles::header()), chunks[1]);

    let (right_content, right_style) = if let Some(msg) = &state.status_message {
        (msg.clone(), Styles::modified_item())
    } else {
        match state.input_mode {
            InputMode::Search => (
                format!("Search: {}█", state.search_input),
                Styles::filter_input(),
            ),
            InputMode::Normal | InputMode::DateStart | InputMode::DateEnd => {
                (String::new(), Styles::header())
            }
        }
    };
    frame.render_widget(Paragraph::new(right_content).style(right_style), chunks[2]);
}
