use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use fw_core::types::SuspiciousAccount;

use crate::app::App;
use crate::views::{format_usd, risk_color};

/// Dashboard tab 1: a card per affected business account.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (i, account) in app.accounts.iter().enumerate().take(4) {
        let row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[i / 2]);
        render_account_card(frame, account, row[i % 2]);
    }
}

fn render_account_card(frame: &mut Frame, account: &SuspiciousAccount, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                account.account_number.as_str(),
                Style::default().fg(Color::Gray),
            ),
            Span::raw(format!(
                "   Customer since {} years   Avg balance {}",
                account.customer_since_years,
                format_usd(account.avg_monthly_balance_usd),
            )),
        ]),
        Line::from(Span::raw(format!(
            "Normal withdrawals: {}",
            account.normal_withdrawal_range
        ))),
        Line::from(Span::styled(
            "Suspicious transactions:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    for tx in &account.transactions {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<9}", format_usd(tx.amount_usd)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{:<22}", tx.location)),
            Span::styled(
                format!("{:<10}", tx.time_label),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("({})", tx.distance_label),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    lines.push(Line::from(vec![
        Span::raw("Total suspicious: "),
        Span::styled(
            format_usd(account.total_suspicious_usd),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " {} [{}] ",
            account.business_name,
            account.risk.label()
        ))
        .border_style(Style::default().fg(risk_color(account.risk)));

    frame.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
