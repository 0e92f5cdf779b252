//! Date bound input popup (`f` / `t`).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::state::InputMode;
use crate::tui::style::Styles;

/// Renders a centered date input popup for the bound selected by `mode`.
pub fn render_date_input(
    frame: &mut Frame,
    area: Rect,
    mode: InputMode,
    input: &str,
    error: Option<&str>,
) {
    let popup_width = (area.width * 70 / 100).clamp(50, 80).min(area.width);
    let popup_height = area.height.clamp(9, 14).min(area.height);

    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let title = match mode {
        InputMode::DateEnd => " Created on or before (UTC) ",
        _ => " Created on or after (UTC) ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Input: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{input}█"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Examples:", Styles::dim())),
        Line::from(Span::styled("  2015-06-01", Styles::dim())),
        Line::from(Span::styled("  2015-06-01T12:00:00Z", Styles::dim())),
        Line::from(Span::styled("  today, -30d, -2w, -6m, -1y", Styles::dim())),
        Line::from(Span::styled("  (empty clears the bound)", Styles::dim())),
    ];

    if let Some(err) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Styles::help_key()),
        Span::styled(" → apply", Styles::dim()),
        Span::styled("   Esc", Styles::help_key()),
        Span::styled(" → cancel", Styles::dim()),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, inner);
}
