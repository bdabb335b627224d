use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use fw_core::router::View;

use crate::app::App;
use crate::views;
use crate::widgets::{help_modal, status_bar};

/// Master render function: title bar, active view, status bar, overlays.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title bar
            Constraint::Min(0),    // content
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);

    match app.router.view() {
        View::Simulation => views::simulation::render(frame, app, chunks[1]),
        View::Results => views::results::render(frame, app, chunks[1]),
        View::Dashboard => views::dashboard::render(frame, app, chunks[1]),
    }

    status_bar::render(frame, app, chunks[2]);

    if app.playback.is_running() {
        views::simulation::render_playback_dialog(frame, app);
    }
    app.toasts.render(frame, frame.area());
    if app.show_help {
        help_modal::render(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let breadcrumb = match app.router.view() {
        View::Simulation => "Simulation",
        View::Results => "Simulation > Results",
        View::Dashboard => "Simulation > Results > Dashboard",
    };

    let line = Line::from(vec![
        Span::styled(
            breadcrumb,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" fraudwatch ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(Paragraph::new(line).block(block), area);
}
