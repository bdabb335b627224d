use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use fw_core::playback::PlaybackPhase;

use crate::app::App;
use crate::views::{category_color, risk_color};
use crate::widgets::centered_rect;

/// Simulation screen: canned scenario cards, the custom scenario input, and
/// the run panel.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // intro
            Constraint::Length(10), // scenario cards
            Constraint::Length(6),  // custom input
            Constraint::Min(0),     // run panel
        ])
        .split(area);

    render_intro(frame, chunks[0]);
    render_scenario_cards(frame, app, chunks[1]);
    render_custom_input(frame, app, chunks[2]);
    render_run_panel(frame, app, chunks[3]);
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Fraud Detection Simulation",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(
            "Test the fraud detection console with realistic scenarios. Watch the agent team \
             collaborate to investigate suspicious activity.",
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_scenario_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (i, scenario) in app.scenarios.iter().enumerate().take(cols.len()) {
        let under_cursor = app.scenario_cursor == i;
        let selected = app.selected_scenario == Some(i);

        let border_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if under_cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if selected {
            "[x] "
        } else if under_cursor {
            "> "
        } else {
            ""
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {}{} ", marker, scenario.title))
            .border_style(border_style);

        let lines = vec![
            Line::from(Span::styled(
                format!("{} RISK", scenario.risk.label()),
                Style::default()
                    .fg(risk_color(scenario.risk))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::raw(scenario.description.as_str())),
        ];

        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, cols[i]);
    }
}

fn render_custom_input(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.input_mode {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Custom Scenario ")
        .border_style(border_style);

    let text: Line = if app.custom_input.is_empty() && !app.input_mode {
        Line::from(Span::styled(
            "Describe a suspicious activity pattern, unusual transactions, or potential fraud \
             scenario... (press i to edit)",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(app.custom_input.as_str())];
        if app.input_mode {
            spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_run_panel(frame: &mut Frame, app: &App, area: Rect) {
    let selection_line = match app.selected_scenario.and_then(|i| app.scenarios.get(i)) {
        Some(scenario) => Line::from(vec![
            Span::raw("Selected: "),
            Span::styled(
                scenario.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        None if !app.custom_input.trim().is_empty() => {
            Line::from(Span::raw("Using the custom scenario text."))
        }
        None => Line::from(Span::styled(
            "Nothing selected yet.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let lines = vec![
        Line::from(Span::styled(
            "Ready to Run Analysis?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(
            "Press r to activate the agent team and watch them collaborate.",
        )),
        selection_line,
    ];

    let block = Block::default().borders(Borders::ALL).title(" Analysis ");
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

/// Overlay shown while the scripted conversation is playing.
pub fn render_playback_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(72, 80, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = Vec::new();
    for message in app.playback.revealed_messages() {
        lines.push(Line::from(vec![
            Span::styled(
                message.speaker.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" [{}]", message.category.label()),
                Style::default().fg(category_color(message.category)),
            ),
            Span::styled(
                format!("  {}", message.timestamp_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::raw(format!("  {}", message.body))));
        lines.push(Line::from(""));
    }

    match app.playback.phase() {
        PlaybackPhase::Revealing => lines.push(Line::from(Span::styled(
            "o o o  Agents are analyzing...",
            Style::default().fg(Color::DarkGray),
        ))),
        _ => lines.push(Line::from(Span::styled(
            "Analysis complete. Preparing results...",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" AI Agents Collaborating ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
