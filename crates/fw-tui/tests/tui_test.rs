use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use fw_core::config::Config;
use fw_core::router::View;

// We reference types from the binary crate by including modules directly.
#[path = "../src/app.rs"]
mod app;
#[path = "../src/command.rs"]
mod command;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/views/mod.rs"]
mod views;
#[path = "../src/widgets/mod.rs"]
mod widgets;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn demo_app() -> app::App {
    app::App::new(Config::default())
}

fn type_text(app: &mut app::App, text: &str) {
    for c in text.chars() {
        app.on_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn new_app_starts_on_simulation() {
    let app = demo_app();
    assert_eq!(app.router.view(), View::Simulation);
    assert!(!app.should_quit);
    assert!(!app.show_help);
    assert!(!app.playback.is_running());
    assert_eq!(app.scenarios.len(), 3);
    assert_eq!(app.reports.len(), 5);
    assert_eq!(app.accounts.len(), 4);
    assert_eq!(app.conversation.len(), 6);
}

#[test]
fn scenario_cursor_moves_and_clamps() {
    let mut app = demo_app();
    assert_eq!(app.scenario_cursor, 0);

    for _ in 0..5 {
        app.on_key(key(KeyCode::Char('j')));
    }
    assert_eq!(app.scenario_cursor, app.scenarios.len() - 1);

    app.on_key(key(KeyCode::Char('k')));
    assert_eq!(app.scenario_cursor, 1);
    for _ in 0..5 {
        app.on_key(key(KeyCode::Up));
    }
    assert_eq!(app.scenario_cursor, 0);
}

#[test]
fn enter_toggles_card_selection() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('j')));
    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.selected_scenario, Some(1));

    app.on_key(key(KeyCode::Enter));
    assert_eq!(app.selected_scenario, None);
}

#[test]
fn run_without_scenario_shows_error_and_stays() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('r')));

    assert_eq!(app.router.view(), View::Simulation);
    assert!(!app.playback.is_running());
    assert_eq!(app.toasts.len(), 1);
    assert_eq!(app.toasts.iter().next().unwrap().title, "No scenario selected");
}

#[test]
fn insert_mode_edits_custom_scenario() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('i')));
    assert!(app.input_mode);

    type_text(&mut app, "wire?");
    app.on_key(key(KeyCode::Backspace));
    assert_eq!(app.custom_input, "wire");

    // 'q' types rather than quits while editing
    type_text(&mut app, "q");
    assert!(!app.should_quit);
    app.on_key(key(KeyCode::Backspace));

    app.on_key(key(KeyCode::Esc));
    assert!(!app.input_mode);
    assert_eq!(app.custom_input, "wire");
}

#[test]
fn custom_scenario_runs_to_results() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('i')));
    type_text(&mut app, "test fraud scenario");
    app.on_key(key(KeyCode::Esc));
    app.on_key(key(KeyCode::Char('r')));

    assert!(app.playback.is_running());
    assert_eq!(app.playback.revealed(), 1);
    assert_eq!(app.router.view(), View::Simulation);

    // Fast-forward past every reveal and the settle delay.
    app.advance(Instant::now() + Duration::from_secs(20));
    assert!(app.playback.is_complete());
    assert_eq!(app.playback.revealed(), app.conversation.len());
    assert_eq!(app.router.view(), View::Results);
    assert_eq!(app.router.scenario(), "test fraud scenario");
}

#[test]
fn selected_card_runs_with_its_prompt() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Char('r')));
    app.advance(Instant::now() + Duration::from_secs(20));

    assert_eq!(app.router.view(), View::Results);
    assert_eq!(app.router.scenario(), app.scenarios[0].prompt.trim());
}

#[test]
fn esc_cancels_playback_and_freezes_progress() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Char('r')));

    // One reveal interval (1200ms default) elapses.
    app.advance(Instant::now() + Duration::from_millis(1300));
    assert_eq!(app.playback.revealed(), 2);

    app.on_key(key(KeyCode::Esc));
    assert!(!app.playback.is_running());

    app.advance(Instant::now() + Duration::from_secs(120));
    assert_eq!(app.playback.revealed(), 2);
    assert_eq!(app.router.view(), View::Simulation);
}

#[test]
fn navigation_keys_wait_for_playback() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Enter));
    app.on_key(key(KeyCode::Char('r')));
    assert!(app.playback.is_running());

    app.on_key(key(KeyCode::Char('b')));
    app.on_key(key(KeyCode::Char('d')));
    app.on_key(key(KeyCode::Char('r')));
    assert_eq!(app.router.view(), View::Simulation);
    assert!(app.playback.is_running());
    assert_eq!(app.playback.revealed(), 1);
}

#[test]
fn results_keys_navigate_back_and_to_dashboard() {
    let mut app = demo_app();
    command::execute_command(&mut app, command::AppCommand::Submit("card ring".into()));
    assert_eq!(app.router.view(), View::Results);

    app.on_key(key(KeyCode::Char('d')));
    assert_eq!(app.router.view(), View::Dashboard);

    app.on_key(key(KeyCode::Char('b')));
    assert_eq!(app.router.view(), View::Results);

    app.on_key(key(KeyCode::Char('b')));
    assert_eq!(app.router.view(), View::Simulation);
    assert_eq!(app.router.scenario(), "");
}

#[test]
fn dashboard_tab_keys() {
    let mut app = demo_app();
    command::execute_command(&mut app, command::AppCommand::Submit("card ring".into()));
    app.on_key(key(KeyCode::Char('d')));

    app.on_key(key(KeyCode::Char('2')));
    assert_eq!(app.dashboard_tab, 1);

    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.dashboard_tab, 2);
    app.on_key(key(KeyCode::Tab));
    assert_eq!(app.dashboard_tab, 0);
    app.on_key(key(KeyCode::BackTab));
    assert_eq!(app.dashboard_tab, 2);
}

#[test]
fn dashboard_agent_selection_moves_on_agents_tab() {
    let mut app = demo_app();
    command::execute_command(&mut app, command::AppCommand::Submit("card ring".into()));
    app.on_key(key(KeyCode::Char('d')));
    app.on_key(key(KeyCode::Char('2')));

    app.on_key(key(KeyCode::Char('j')));
    app.on_key(key(KeyCode::Char('j')));
    assert_eq!(app.report_index, 2);
    app.on_key(key(KeyCode::Char('k')));
    assert_eq!(app.report_index, 1);

    // Selection only answers to j/k on the agents tab.
    app.on_key(key(KeyCode::Char('1')));
    app.on_key(key(KeyCode::Char('j')));
    assert_eq!(app.report_index, 1);
}

#[test]
fn help_modal_toggles() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('?')));
    assert!(app.show_help);
    // Keys are swallowed while help is open.
    app.on_key(key(KeyCode::Char('r')));
    assert!(!app.playback.is_running());
    app.on_key(key(KeyCode::Esc));
    assert!(!app.show_help);
}

#[test]
fn quit_keys() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);

    let mut app = demo_app();
    app.on_key(ctrl('c'));
    assert!(app.should_quit);
}
