use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::views::activity_color;

/// Dashboard tab 2: the response team table plus a detail pane for the
/// selected specialist.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_team_table(frame, app, chunks[0]);
    render_detail(frame, app, chunks[1]);
}

fn render_team_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("St"),
        Cell::from("Name"),
        Cell::from("Role"),
        Cell::from("Status"),
        Cell::from("Updated"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .reports
        .iter()
        .enumerate()
        .map(|(i, report)| {
            let color = activity_color(report.activity);
            let row = Row::new(vec![
                Cell::from(report.activity.glyph())
                    .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Cell::from(report.name.as_str()),
                Cell::from(report.role.as_str()),
                Cell::from(report.activity.label()).style(Style::default().fg(color)),
                Cell::from(report.timestamp_label.as_str()),
            ]);
            if i == app.report_index {
                row.style(Style::default().bg(Color::DarkGray))
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Min(22),
        Constraint::Length(14),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Fraud Response Team [{}] ", app.reports.len())),
    );
    frame.render_widget(table, area);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(report) = app.reports.get(app.report_index) else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            report.activity.label(),
            Style::default()
                .fg(activity_color(report.activity))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw(report.summary.as_str())),
        Line::from(""),
        Line::from(Span::styled(
            "Key Findings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for finding in &report.key_findings {
        lines.push(Line::from(Span::raw(format!("- {}", finding))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Next Actions",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for action in &report.next_actions {
        lines.push(Line::from(Span::raw(format!("- {}", action))));
    }
    lines.push(Line::from(Span::styled(
        format!("Updated: {}", report.timestamp_label),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", report.name, report.role));
    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
