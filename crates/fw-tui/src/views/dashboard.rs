use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::app::{App, DASHBOARD_TABS};
use crate::views::{self, format_usd};

/// Dashboard screen: live alert header, key metrics, and the three inner
/// tabs (accounts, agents, timeline).
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // alert banner
            Constraint::Length(5), // KPI cards
            Constraint::Length(3), // inner tab bar
            Constraint::Min(0),    // tab body
        ])
        .split(area);

    render_alert_banner(frame, app, chunks[0]);
    render_kpi_cards(frame, app, chunks[1]);
    render_tab_bar(frame, app, chunks[2]);

    match app.dashboard_tab {
        0 => views::accounts::render(frame, app, chunks[3]),
        1 => views::agents::render(frame, app, chunks[3]),
        2 => views::timeline::render(frame, app, chunks[3]),
        _ => {}
    }
}

fn render_alert_banner(frame: &mut Frame, app: &App, area: Rect) {
    let alert = &app.alert;
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "FRAUD ALERT ACTIVATED",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", alert.alert_level),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(Span::raw(format!(
            "Multiple suspicious cash withdrawals detected across {} business accounts totaling {}",
            alert.affected_accounts,
            format_usd(alert.total_suspicious_usd),
        ))),
        Line::from(Span::styled(
            format!(
                "Alert {}   Detected {}   Pattern: {}",
                alert.id, alert.detection_time_label, alert.pattern_type
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

fn render_kpi_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let alert = &app.alert;
    let cards: Vec<(&str, String, Color)> = vec![
        ("Total Exposure", format_usd(alert.total_suspicious_usd), Color::Red),
        ("Affected Accounts", alert.affected_accounts.to_string(), Color::Yellow),
        ("Detection Time", alert.detection_time_label.clone(), Color::Cyan),
        ("Response Status", "ACTIVE".to_string(), Color::Green),
    ];

    for (i, (title, value, color)) in cards.iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(*color));
        let text = Paragraph::new(Line::from(Span::styled(
            value.clone(),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        )))
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(text, cols[i]);
    }
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = DASHBOARD_TABS
        .iter()
        .enumerate()
        .map(|(i, t)| {
            Line::from(vec![
                Span::styled(
                    format!("{}", i + 1),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(":"),
                Span::raw(*t),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(app.dashboard_tab)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw(" | "));

    frame.render_widget(tabs, area);
}
