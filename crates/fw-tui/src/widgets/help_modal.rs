use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::widgets::centered_rect;

/// Render a centered help modal overlay.
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "  Keybindings",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Simulation",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        help_line("j / k", "Move between scenario cards"),
        help_line("Enter / Space", "Select or deselect a card"),
        help_line("c", "Copy the card's prompt to the clipboard"),
        help_line("i", "Edit the custom scenario (Esc to finish)"),
        help_line("r", "Run the risk analysis"),
        help_line("Esc", "Cancel a running analysis"),
        Line::from(""),
        Line::from(Span::styled(
            "  Results / Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        help_line("b", "Back to the previous screen"),
        help_line("d", "Open the investigation dashboard"),
        help_line("1-3 / Tab", "Switch dashboard tabs"),
        help_line("j / k", "Move the agent selection"),
        Line::from(""),
        help_line("?", "Toggle this help"),
        help_line("q / Ctrl-c", "Quit"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn help_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<14}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(description.to_string()),
    ])
}
