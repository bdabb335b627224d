mod app;
mod command;
mod logging;
mod ui;
mod views;
mod widgets;

use std::io::{self, BufRead, Write as _};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use fw_core::config::Config;
use fw_core::router::View;

use crate::app::App;

fn main() -> Result<()> {
    // Parse CLI args (simple, no clap dependency).
    let args: Vec<String> = std::env::args().collect();
    let headless = args.iter().any(|a| a == "--headless");
    let config = match args.iter().position(|a| a == "--config").and_then(|i| args.get(i + 1)) {
        Some(path) => Config::load_from(path).context("loading config")?,
        None => Config::load().context("loading config")?,
    };

    logging::init_logging("warn");

    if headless {
        return run_headless(config);
    }

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(config);

    restore_terminal()?;
    result
}

/// Run the interactive console with the standard crossterm backend.
fn run(config: Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let poll_interval = Duration::from_millis(config.ui.poll_interval_ms);
    let mut app = App::new(config);

    loop {
        app.advance(Instant::now());

        terminal.draw(|frame| {
            ui::render(frame, &app);
        })?;

        if ct_event::poll(poll_interval)? {
            if let Event::Key(key) = ct_event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Headless mode: reads commands from stdin, outputs JSON to stdout.
/// No terminal rendering -- a pure state machine for scripted drivers.
///
/// Usage: `echo ':submit test fraud scenario' | fw-tui --headless`
fn run_headless(config: Config) -> Result<()> {
    let mut app = App::new(config);

    emit_event(&serde_json::json!({
        "event": "started",
        "view": view_name(app.router.view()),
        "scenarios": app.scenarios.len(),
    }));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        // Try JSON command first, then text command.
        let cmd = command::parse_json_command(&line).or_else(|| command::parse_command(&line));

        match cmd {
            Some(cmd) => {
                let prev_view = app.router.view();
                let result = command::execute_command(&mut app, cmd);

                if app.router.view() != prev_view {
                    emit_event(&serde_json::json!({
                        "event": "view_changed",
                        "view": view_name(app.router.view()),
                    }));
                }

                match result {
                    Some(json_str) => {
                        // Already JSON, print directly.
                        println!("{}", json_str);
                        let _ = io::stdout().flush();
                    }
                    None => emit_event(&serde_json::json!({"event": "ok"})),
                }
            }
            None => {
                emit_event(&serde_json::json!({
                    "event": "error",
                    "message": format!("unknown command: {}", line),
                }));
            }
        }

        if app.should_quit {
            emit_event(&serde_json::json!({"event": "quit"}));
            break;
        }
    }

    Ok(())
}

fn view_name(view: View) -> &'static str {
    match view {
        View::Simulation => "simulation",
        View::Results => "results",
        View::Dashboard => "dashboard",
    }
}

fn emit_event(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string(value) {
        println!("{}", s);
        let _ = io::stdout().flush();
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
