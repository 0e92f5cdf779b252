//! Pagination footer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;
use crate::view::DerivedView;

/// Renders rows per page, the visible range, page number and the inactive share.
pub fn render_footer(frame: &mut Frame, area: Rect, view: &DerivedView<'_>) {
    let chunks = Layout::horizontal([Constraint::Min(40), Constraint::Length(44)]).split(area);

    let window = view.window();
    let range = if view.filtered_len == 0 {
        "0 of 0".to_string()
    } else {
        format!("{}-{} of {}", window.start + 1, window.end, view.filtered_len)
    };

    let left = Line::from(vec![
        Span::styled(" r", Styles::help_key()),
        Span::styled(" Rows per page: ", Styles::dim()),
        Span::raw(view.pagination.rows_per_page.to_string()),
        Span::styled("  ", Styles::dim()),
        Span::raw(range),
        Span::styled("  Page ", Styles::dim()),
        Span::raw(format!("{}/{}", view.pagination.page + 1, view.page_count)),
    ]);
    frame.render_widget(Paragraph::new(left).style(Styles::default()), chunks[0]);

    let right = Line::from(vec![
        Span::styled("Inactive Users: ", Styles::dim()),
        Span::styled(
            format!("{:.2}%", view.counts.inactive_percentage()),
            Styles::modified_item(),
        ),
        Span::styled("  ?", Styles::help_key()),
        Span::styled(" help ", Styles::dim()),
        Span::styled("q", Styles::help_key()),
        Span::styled(" quit ", Styles::dim()),
    ]);
    frame.render_widget(
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .style(Styles::default()),
        chunks[1],
    );
}
