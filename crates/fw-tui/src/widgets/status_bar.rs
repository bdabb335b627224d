use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use fw_core::router::View;

use crate::app::App;

/// Render the bottom status bar: key hints for the active view on the
/// left, wall clock on the right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = if app.input_mode {
        &[("[Esc]", "Done editing"), ("[Backspace]", "Delete")]
    } else if app.playback.is_running() {
        &[("[Esc]", "Cancel analysis")]
    } else {
        match app.router.view() {
            View::Simulation => &[
                ("[j/k]", "Cards"),
                ("[Enter]", "Select"),
                ("[c]", "Copy"),
                ("[i]", "Edit"),
                ("[r]", "Run"),
                ("[?]", "Help"),
                ("[q]", "Quit"),
            ],
            View::Results => &[
                ("[b]", "Back"),
                ("[d]", "Dashboard"),
                ("[?]", "Help"),
                ("[q]", "Quit"),
            ],
            View::Dashboard => &[
                ("[1-3]", "Tabs"),
                ("[j/k]", "Agents"),
                ("[b]", "Back"),
                ("[?]", "Help"),
                ("[q]", "Quit"),
            ],
        }
    };

    let mut spans = Vec::with_capacity(hints.len() * 2 + 2);
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!(" {}  ", label)));
    }

    let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
    let right_text = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let total_width = area.width as usize;
    let padding = total_width.saturating_sub(left_width + right_text.width()).max(1);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(right_text, Style::default().fg(Color::Gray)));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}
