//! Help popup widget with the key reference.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 80).min(area.width);
    let popup_height = (area.height * 80 / 100).clamp(10, 30).min(area.height);

    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::popup_border());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;

    // Clamp scroll to valid range
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Styles::dim()),
        Span::styled("?", Styles::help_key()),
        Span::styled(" or ", Styles::dim()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" to close", Styles::dim()),
        Span::styled(", ", Styles::dim()),
        Span::styled("↑↓", Styles::help_key()),
        Span::styled(" to scroll", Styles::dim()),
        Span::styled(scroll_info, Styles::dim()),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().fg(Color::Yellow)))
}

fn binding(keys: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", keys), Style::default().fg(Color::Cyan)),
        Span::raw(text),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Filters"),
        binding("/", "search by name (applied while typing)"),
        binding("s", "cycle status: all, ACTIVE, INVITED, BLOCKED"),
        binding("f / t", "set created-from / created-to date"),
        binding("x", "clear all filters"),
        Line::from(Span::styled(
            "  Changing a filter resets sorting to id ascending and returns to page 1.",
            Styles::dim(),
        )),
        Line::from(""),
        section("Sorting"),
        binding("1-6", "sort by id, name, status, email, date, invitedBy"),
        binding("← / →", "move the column cursor"),
        binding("o", "sort by the column under the cursor"),
        Line::from(Span::styled(
            "  Sorting the same column again flips the direction.",
            Styles::dim(),
        )),
        Line::from(""),
        section("Pages"),
        binding("PgDn / n", "next page"),
        binding("PgUp / p", "previous page"),
        binding("Home / g", "first page"),
        binding("End / G", "last page"),
        binding("r", "toggle rows per page (5 / 10)"),
        Line::from(""),
        section("Rows"),
        binding("↑ / k", "select previous row"),
        binding("↓ / j", "select next row"),
        binding("Enter / e", "edit status of the selected user"),
        Line::from(""),
        section("General"),
        binding("? / h", "toggle this help"),
        binding("q", "quit (with confirmation)"),
        binding("Ctrl-C", "quit immediately"),
    ]
}
