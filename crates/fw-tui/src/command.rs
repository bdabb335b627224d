//! Command system for driving the console without a terminal.
//!
//! Two interfaces, both consumed by the headless stdin loop:
//! - **Text commands**: `:` prefixed, e.g. `:submit wire fraud`, `:back`.
//! - **JSON commands**: `{"cmd":"submit","args":["wire fraud"]}`.
//!
//! Query commands return serialized state as JSON strings so callers can
//! inspect the console without struct access. `run` and `submit` drive the
//! playback to completion synchronously: the reveal cadence is presentation
//! tuning, not part of the navigation contract.

use serde_json;

use crate::app::{App, DASHBOARD_TABS};

// ---------------------------------------------------------------------------
// AppCommand enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Scenario selection
    SelectScenario(usize),
    SetCustom(String),

    // Analysis
    Run,
    Submit(String),
    Cancel,

    // Navigation
    Back,
    OpenDashboard,
    Tab(usize),
    Up,
    Down,

    // Queries
    QueryState,
    QueryView,
    QueryScenario,

    // System
    Quit,
    Help,
}

// ---------------------------------------------------------------------------
// Text command parser  (`:` prefixed)
// ---------------------------------------------------------------------------

/// Parse a `:` prefixed command string.
///
/// Examples: `:scenario 1`, `:submit wire fraud`, `:query state`, `:back`.
pub fn parse_command(input: &str) -> Option<AppCommand> {
    let input = input.trim();
    let input = input.strip_prefix(':')?;
    let mut parts = input.splitn(2, ' ');
    let verb = parts.next()?.trim();
    let arg = parts.next().map(|s| s.trim());

    match verb {
        "scenario" | "sel" => {
            let idx: usize = arg?.parse().ok()?;
            Some(AppCommand::SelectScenario(idx))
        }
        "custom" => Some(AppCommand::SetCustom(arg.unwrap_or("").to_string())),
        "run" => Some(AppCommand::Run),
        "submit" => Some(AppCommand::Submit(arg.unwrap_or("").to_string())),
        "cancel" => Some(AppCommand::Cancel),
        "back" | "b" => Some(AppCommand::Back),
        "dashboard" | "dash" => Some(AppCommand::OpenDashboard),
        "tab" => {
            let idx: usize = arg?.parse().ok()?;
            Some(AppCommand::Tab(idx))
        }
        "up" | "k" => Some(AppCommand::Up),
        "down" | "j" => Some(AppCommand::Down),
        "query" => match arg? {
            "state" => Some(AppCommand::QueryState),
            "view" => Some(AppCommand::QueryView),
            "scenario" => Some(AppCommand::QueryScenario),
            _ => None,
        },
        "quit" | "q" => Some(AppCommand::Quit),
        "help" | "?" => Some(AppCommand::Help),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// JSON command parser
// ---------------------------------------------------------------------------

/// Parse a JSON command from the stdin pipe.
///
/// Expected format: `{"cmd":"tab","args":[1]}` or `{"cmd":"query_state"}`.
pub fn parse_json_command(json: &str) -> Option<AppCommand> {
    let v: serde_json::Value = serde_json::from_str(json).ok()?;
    let cmd = v.get("cmd")?.as_str()?;
    let args = v.get("args");

    let arg_usize =
        |idx: usize| -> Option<usize> { args?.as_array()?.get(idx)?.as_u64().map(|n| n as usize) };
    let arg_str = |idx: usize| -> Option<&str> { args?.as_array()?.get(idx)?.as_str() };

    match cmd {
        "scenario" => Some(AppCommand::SelectScenario(arg_usize(0)?)),
        "custom" => Some(AppCommand::SetCustom(arg_str(0)?.to_string())),
        "run" => Some(AppCommand::Run),
        "submit" => Some(AppCommand::Submit(arg_str(0)?.to_string())),
        "cancel" => Some(AppCommand::Cancel),
        "back" => Some(AppCommand::Back),
        "dashboard" => Some(AppCommand::OpenDashboard),
        "tab" => Some(AppCommand::Tab(arg_usize(0)?)),
        "up" => Some(AppCommand::Up),
        "down" => Some(AppCommand::Down),
        "query_state" => Some(AppCommand::QueryState),
        "query_view" => Some(AppCommand::QueryView),
        "query_scenario" => Some(AppCommand::QueryScenario),
        "quit" => Some(AppCommand::Quit),
        "help" => Some(AppCommand::Help),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Command execution
// ---------------------------------------------------------------------------

/// Execute a command against the application state.
///
/// Returns `Some(json_string)` for queries and reported errors, `None` for
/// everything else.
pub fn execute_command(app: &mut App, cmd: AppCommand) -> Option<String> {
    match cmd {
        // -- Scenario selection ----------------------------------------------
        AppCommand::SelectScenario(idx) => {
            if idx < app.scenarios.len() {
                app.selected_scenario = Some(idx);
                app.scenario_cursor = idx;
                None
            } else {
                Some(error_event(format!("no scenario at index {idx}")))
            }
        }
        AppCommand::SetCustom(text) => {
            app.custom_input = text;
            app.selected_scenario = None;
            None
        }

        // -- Analysis ---------------------------------------------------------
        AppCommand::Run => match app.run_scripted() {
            Ok(()) => None,
            Err(err) => Some(error_event(err.to_string())),
        },
        AppCommand::Submit(text) => {
            app.custom_input = text;
            app.selected_scenario = None;
            match app.run_scripted() {
                Ok(()) => None,
                Err(err) => Some(error_event(err.to_string())),
            }
        }
        AppCommand::Cancel => {
            app.cancel_analysis();
            None
        }

        // -- Navigation -------------------------------------------------------
        AppCommand::Back => {
            app.router.back();
            None
        }
        AppCommand::OpenDashboard => {
            app.router.open_dashboard();
            None
        }
        AppCommand::Tab(idx) => {
            if idx < DASHBOARD_TABS.len() {
                app.dashboard_tab = idx;
            }
            None
        }
        AppCommand::Up => {
            app.report_index = app.report_index.saturating_sub(1);
            None
        }
        AppCommand::Down => {
            if app.report_index + 1 < app.reports.len() {
                app.report_index += 1;
            }
            None
        }

        // -- Queries ----------------------------------------------------------
        AppCommand::QueryState => {
            let state = serde_json::json!({
                "view": app.router.view(),
                "scenario": app.router.scenario(),
                "dashboard_tab": DASHBOARD_TABS.get(app.dashboard_tab),
                "playback": {
                    "revealed": app.playback.revealed(),
                    "total": app.playback.messages().len(),
                    "running": app.playback.is_running(),
                    "complete": app.playback.is_complete(),
                },
                "counts": {
                    "scenarios": app.scenarios.len(),
                    "accounts": app.accounts.len(),
                    "reports": app.reports.len(),
                    "timeline": app.timeline.len(),
                }
            });
            serde_json::to_string(&state).ok()
        }
        AppCommand::QueryView => {
            serde_json::to_string(&serde_json::json!({"view": app.router.view()})).ok()
        }
        AppCommand::QueryScenario => {
            serde_json::to_string(&serde_json::json!({"scenario": app.router.scenario()})).ok()
        }

        // -- System -----------------------------------------------------------
        AppCommand::Quit => {
            app.should_quit = true;
            None
        }
        AppCommand::Help => {
            app.show_help = true;
            None
        }
    }
}

fn error_event(message: String) -> String {
    serde_json::json!({"event": "error", "message": message}).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use fw_core::config::Config;
    use fw_core::router::View;

    fn test_app() -> App {
        App::new(Config::default())
    }

    // -- parse_command ------------------------------------------------------

    #[test]
    fn parse_scenario_command() {
        assert_eq!(parse_command(":scenario 1"), Some(AppCommand::SelectScenario(1)));
        assert_eq!(parse_command(":sel 0"), Some(AppCommand::SelectScenario(0)));
        assert_eq!(parse_command(":scenario"), None);
        assert_eq!(parse_command(":scenario abc"), None);
    }

    #[test]
    fn parse_custom_and_submit() {
        assert_eq!(
            parse_command(":custom odd wire transfers"),
            Some(AppCommand::SetCustom("odd wire transfers".into()))
        );
        assert_eq!(
            parse_command(":submit test fraud scenario"),
            Some(AppCommand::Submit("test fraud scenario".into()))
        );
        // Empty payloads stay parseable; validation happens at execution.
        assert_eq!(parse_command(":submit"), Some(AppCommand::Submit(String::new())));
    }

    #[test]
    fn parse_navigation_commands() {
        assert_eq!(parse_command(":back"), Some(AppCommand::Back));
        assert_eq!(parse_command(":b"), Some(AppCommand::Back));
        assert_eq!(parse_command(":dashboard"), Some(AppCommand::OpenDashboard));
        assert_eq!(parse_command(":dash"), Some(AppCommand::OpenDashboard));
        assert_eq!(parse_command(":tab 2"), Some(AppCommand::Tab(2)));
        assert_eq!(parse_command(":up"), Some(AppCommand::Up));
        assert_eq!(parse_command(":down"), Some(AppCommand::Down));
        assert_eq!(parse_command(":k"), Some(AppCommand::Up));
        assert_eq!(parse_command(":j"), Some(AppCommand::Down));
    }

    #[test]
    fn parse_query_commands() {
        assert_eq!(parse_command(":query state"), Some(AppCommand::QueryState));
        assert_eq!(parse_command(":query view"), Some(AppCommand::QueryView));
        assert_eq!(parse_command(":query scenario"), Some(AppCommand::QueryScenario));
        assert_eq!(parse_command(":query invalid"), None);
    }

    #[test]
    fn parse_system_commands() {
        assert_eq!(parse_command(":quit"), Some(AppCommand::Quit));
        assert_eq!(parse_command(":q"), Some(AppCommand::Quit));
        assert_eq!(parse_command(":help"), Some(AppCommand::Help));
        assert_eq!(parse_command(":?"), Some(AppCommand::Help));
    }

    #[test]
    fn parse_rejects_unprefixed_and_unknown() {
        assert_eq!(parse_command("back"), None);
        assert_eq!(parse_command(":frobnicate"), None);
    }

    #[test]
    fn parse_whitespace_handling() {
        assert_eq!(parse_command("  :back  "), Some(AppCommand::Back));
    }

    // -- parse_json_command -------------------------------------------------

    #[test]
    fn parse_json_commands() {
        assert_eq!(
            parse_json_command(r#"{"cmd":"scenario","args":[2]}"#),
            Some(AppCommand::SelectScenario(2))
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"submit","args":["card ring"]}"#),
            Some(AppCommand::Submit("card ring".into()))
        );
        assert_eq!(parse_json_command(r#"{"cmd":"run"}"#), Some(AppCommand::Run));
        assert_eq!(parse_json_command(r#"{"cmd":"back"}"#), Some(AppCommand::Back));
        assert_eq!(
            parse_json_command(r#"{"cmd":"tab","args":[1]}"#),
            Some(AppCommand::Tab(1))
        );
        assert_eq!(
            parse_json_command(r#"{"cmd":"query_state"}"#),
            Some(AppCommand::QueryState)
        );
    }

    #[test]
    fn parse_json_invalid() {
        assert_eq!(parse_json_command("not json"), None);
        assert_eq!(parse_json_command(r#"{"cmd":"unknown"}"#), None);
        assert_eq!(parse_json_command(r#"{"no_cmd":true}"#), None);
        assert_eq!(parse_json_command(r#"{"cmd":"scenario"}"#), None);
    }

    // -- execute_command ------------------------------------------------------

    #[test]
    fn execute_submit_enters_results() {
        let mut app = test_app();
        let result = execute_command(&mut app, AppCommand::Submit("test fraud scenario".into()));
        assert!(result.is_none());
        assert_eq!(app.router.view(), View::Results);
        assert_eq!(app.router.scenario(), "test fraud scenario");
        assert!(app.playback.is_complete());
        assert_eq!(app.playback.revealed(), app.conversation.len());
    }

    #[test]
    fn execute_submit_empty_reports_error() {
        let mut app = test_app();
        let result = execute_command(&mut app, AppCommand::Submit("   ".into()));
        let json: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(json["event"], "error");
        assert_eq!(app.router.view(), View::Simulation);
    }

    #[test]
    fn execute_run_uses_selected_scenario() {
        let mut app = test_app();
        execute_command(&mut app, AppCommand::SelectScenario(1));
        let result = execute_command(&mut app, AppCommand::Run);
        assert!(result.is_none());
        assert_eq!(app.router.view(), View::Results);
        assert_eq!(app.router.scenario(), app.scenarios[1].prompt.trim());
    }

    #[test]
    fn execute_run_with_nothing_selected_reports_error() {
        let mut app = test_app();
        let result = execute_command(&mut app, AppCommand::Run);
        assert!(result.is_some());
        assert_eq!(app.router.view(), View::Simulation);
    }

    #[test]
    fn execute_select_out_of_bounds_reports_error() {
        let mut app = test_app();
        let result = execute_command(&mut app, AppCommand::SelectScenario(99));
        assert!(result.is_some());
        assert_eq!(app.selected_scenario, None);
    }

    #[test]
    fn execute_navigation_cycle() {
        let mut app = test_app();
        execute_command(&mut app, AppCommand::Submit("card ring".into()));
        execute_command(&mut app, AppCommand::OpenDashboard);
        assert_eq!(app.router.view(), View::Dashboard);

        execute_command(&mut app, AppCommand::Tab(2));
        assert_eq!(app.dashboard_tab, 2);
        execute_command(&mut app, AppCommand::Tab(99));
        assert_eq!(app.dashboard_tab, 2);

        execute_command(&mut app, AppCommand::Back);
        assert_eq!(app.router.view(), View::Results);
        execute_command(&mut app, AppCommand::Back);
        assert_eq!(app.router.view(), View::Simulation);
        assert_eq!(app.router.scenario(), "");
    }

    #[test]
    fn execute_up_down_bounds() {
        let mut app = test_app();
        execute_command(&mut app, AppCommand::Up);
        assert_eq!(app.report_index, 0);

        for _ in 0..20 {
            execute_command(&mut app, AppCommand::Down);
        }
        assert_eq!(app.report_index, app.reports.len() - 1);
    }

    #[test]
    fn execute_query_state() {
        let mut app = test_app();
        let result = execute_command(&mut app, AppCommand::QueryState);
        let json: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(json["view"], "simulation");
        assert_eq!(json["counts"]["scenarios"], 3);
        assert_eq!(json["counts"]["reports"], 5);
        assert_eq!(json["playback"]["running"], false);
    }

    #[test]
    fn execute_query_view_after_submit() {
        let mut app = test_app();
        execute_command(&mut app, AppCommand::Submit("test fraud scenario".into()));
        let result = execute_command(&mut app, AppCommand::QueryView);
        let json: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(json["view"], "results");

        let result = execute_command(&mut app, AppCommand::QueryScenario);
        let json: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(json["scenario"], "test fraud scenario");
    }

    #[test]
    fn execute_cancel_freezes_playback() {
        let mut app = test_app();
        app.custom_input = "structured withdrawals".into();
        app.run_analysis(std::time::Instant::now());
        assert!(app.playback.is_running());

        execute_command(&mut app, AppCommand::Cancel);
        assert!(!app.playback.is_running());
        assert_eq!(app.playback.revealed(), 1);
        assert_eq!(app.router.view(), View::Simulation);
    }

    #[test]
    fn execute_quit_and_help() {
        let mut app = test_app();
        execute_command(&mut app, AppCommand::Help);
        assert!(app.show_help);
        execute_command(&mut app, AppCommand::Quit);
        assert!(app.should_quit);
    }

    // -- round-trip: parse then execute -------------------------------------

    #[test]
    fn roundtrip_text_submit() {
        let mut app = test_app();
        let cmd = parse_command(":submit test fraud scenario").unwrap();
        execute_command(&mut app, cmd);
        assert_eq!(app.router.view(), View::Results);
    }

    #[test]
    fn roundtrip_json_query() {
        let mut app = test_app();
        let cmd = parse_json_command(r#"{"cmd":"query_state"}"#).unwrap();
        assert!(execute_command(&mut app, cmd).is_some());
    }
}
