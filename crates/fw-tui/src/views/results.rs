use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::views::{format_usd, risk_color, step_color};

/// Results screen: investigation banner, key metrics, threat intelligence,
/// affected accounts, and the response-action timeline.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // banner
            Constraint::Length(5),  // KPI cards
            Constraint::Min(8),     // threat intel + accounts
            Constraint::Length(10), // response actions
        ])
        .split(area);

    render_banner(frame, app, chunks[0]);
    render_kpi_cards(frame, app, chunks[1]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_threat_intel(frame, app, middle[0]);
    render_affected_accounts(frame, app, middle[1]);

    render_response_actions(frame, app, chunks[3]);
}

fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    let summary = &app.summary;
    let scenario = app.router.scenario();
    let excerpt: String = scenario.chars().take(110).collect();

    let lines = vec![
        Line::from(Span::styled(
            "FRAUD INVESTIGATION RESULTS",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Status: "),
            Span::styled(
                summary.status.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "   Confidence: {}%   Response Time: {}   Recovery: {}%",
                summary.confidence_pct, summary.response_time, summary.recovery_probability_pct
            )),
        ]),
        Line::from(vec![
            Span::styled("Scenario: ", Style::default().fg(Color::DarkGray)),
            Span::styled(excerpt, Style::default().fg(Color::Gray)),
        ]),
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

    let summary = &app.summary;
    let cards: Vec<(&str, String, Color)> = vec![
        ("Total Fraud Amount", format_usd(summary.total_amount_usd), Color::Red),
        ("Accounts Compromised", summary.affected_accounts.to_string(), Color::Yellow),
        ("Detection Confidence", format!("{}%", summary.confidence_pct), Color::Cyan),
        ("Recovery Rate", format!("{}%", summary.recovery_probability_pct), Color::Green),
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

fn render_threat_intel(frame: &mut Frame, app: &App, area: Rect) {
    let threat = &app.threat;
    let rows = [
        ("Attack Source", threat.source.as_str()),
        ("Method", threat.method.as_str()),
        ("Sophistication", threat.sophistication.as_str()),
        ("Geographic Scope", threat.geographic_scope.as_str()),
        ("Planning Timeline", threat.planning_timeline.as_str()),
    ];

    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{:<20}", label), Style::default().fg(Color::Gray)),
                Span::styled(*value, Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Threat Intelligence ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_affected_accounts(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .accounts
        .iter()
        .map(|account| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<26}", account.business_name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<10}", format_usd(account.total_suspicious_usd)),
                    Style::default().fg(Color::Red),
                ),
                Span::styled(
                    format!("{:<10}", account.risk.label()),
                    Style::default().fg(risk_color(account.risk)),
                ),
                Span::styled("Secured", Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Affected Accounts "),
    );
    frame.render_widget(list, area);
}

fn render_response_actions(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, app.response_actions.len().max(1) as u32);
            app.response_actions.len().max(1)
        ])
        .split(area);

    for (i, group) in app.response_actions.iter().enumerate().take(cols.len()) {
        let mut lines = vec![Line::from(vec![
            Span::styled(
                group.status.label(),
                Style::default()
                    .fg(step_color(group.status))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", group.timestamp_label),
                Style::default().fg(Color::DarkGray),
            ),
        ])];
        for action in &group.actions {
            lines.push(Line::from(Span::raw(format!("- {}", action))));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", group.category));
        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            cols[i],
        );
    }
}
