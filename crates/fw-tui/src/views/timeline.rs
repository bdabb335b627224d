use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::views::step_color;

/// Dashboard tab 3: the investigation protocol timeline.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for entry in &app.timeline {
        let color = step_color(entry.status);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", entry.status.glyph()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                entry.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  [{}]", entry.status.label()), Style::default().fg(color)),
            Span::styled(
                format!("  {}", entry.timestamp_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", entry.description),
            Style::default().fg(Color::Gray),
        )));
        for detail in &entry.details {
            lines.push(Line::from(Span::raw(format!("      - {}", detail))));
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Response Protocol Progress ");
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
