//! Status editor popup.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::{Record, Status};
use crate::tui::style::Styles;
use crate::view::users::status_style;

/// Renders the status choices for `record` with `choice` highlighted.
pub fn render_status_editor(frame: &mut Frame, area: Rect, record: &Record, choice: Status) {
    let popup_width = (area.width * 50 / 100).clamp(36, 50).min(area.width);
    let popup_height = 11u16.min(area.height);

    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" Status of {} ", record.about.name))
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = vec![
        Line::from(Span::styled(record.about.email.clone(), Styles::dim())),
        Line::from(""),
    ];
    for &status in Status::all() {
        let marker = if status == record.status() { "•" } else { " " };
        let text = format!("{} {:<8}", marker, status.as_str());
        let style = if status == choice {
            Styles::selected().patch(Styles::from_class(status_style(status)))
        } else {
            Styles::from_class(status_style(status))
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("↑/↓", Styles::help_key()),
        Span::styled(" choose  ", Styles::dim()),
        Span::styled("Enter", Styles::help_key()),
        Span::styled(" apply  ", Styles::dim()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" cancel", Styles::dim()),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, inner);
}
