//! Filter bar: current status, search and date bounds.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;
use crate::view::FilterState;

fn value_span(value: Option<String>) -> Span<'static> {
    match value {
        Some(v) => Span::styled(v, Styles::accent()),
        None => Span::styled("-", Styles::dim()),
    }
}

pub fn render_filters(frame: &mut Frame, area: Rect, filter: &FilterState) {
    let search = (!filter.search.is_empty()).then(|| format!("\"{}\"", filter.search));
    let fmt_date = |d: Option<chrono::NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string());

    let line = Line::from(vec![
        Span::styled(" s", Styles::help_key()),
        Span::styled(" Status: ", Styles::dim()),
        match filter.status {
            Some(s) => Span::styled(s.as_str(), Styles::accent()),
            None => Span::styled("ALL", Styles::dim()),
        },
        Span::styled("  /", Styles::help_key()),
        Span::styled(" Search: ", Styles::dim()),
        value_span(search),
        Span::styled("  f", Styles::help_key()),
        Span::styled(" From: ", Styles::dim()),
        value_span(fmt_date(filter.date_range.start)),
        Span::styled("  t", Styles::help_key()),
        Span::styled(" To: ", Styles::dim()),
        value_span(fmt_date(filter.date_range.end)),
    ]);

    frame.render_widget(Paragraph::new(line).style(Styles::default()), area);
}
