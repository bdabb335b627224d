use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use fw_core::catalog;
use fw_core::config::Config;
use fw_core::playback::{PlaybackController, PlaybackError, PlaybackEvent};
use fw_core::router::{View, ViewRouter};
use fw_core::types::{
    AgentMessage, AgentReport, AlertInfo, InvestigationSummary, ResponseActionGroup,
    ScenarioRecord, SuspiciousAccount, ThreatIntelligence, TimelineEntry,
};

use crate::widgets::toast::{Toast, ToastManager};

/// Inner tabs of the dashboard view.
pub const DASHBOARD_TABS: &[&str] = &["Accounts", "Agents", "Timeline"];

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub router: ViewRouter,
    pub playback: PlaybackController,

    // Catalog data, fixed at build time.
    pub scenarios: Vec<ScenarioRecord>,
    pub conversation: Vec<AgentMessage>,
    pub accounts: Vec<SuspiciousAccount>,
    pub reports: Vec<AgentReport>,
    pub timeline: Vec<TimelineEntry>,
    pub alert: AlertInfo,
    pub summary: InvestigationSummary,
    pub threat: ThreatIntelligence,
    pub response_actions: Vec<ResponseActionGroup>,

    // Simulation screen.
    pub scenario_cursor: usize,
    pub selected_scenario: Option<usize>,
    pub custom_input: String,
    pub input_mode: bool,

    // Dashboard screen.
    pub dashboard_tab: usize,
    pub report_index: usize,

    pub show_help: bool,
    pub should_quit: bool,
    pub toasts: ToastManager,

    /// Scenario text of the run in flight; handed to the router when the
    /// playback completes.
    active_scenario: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            router: ViewRouter::new(),
            playback: PlaybackController::new(config.playback.timing()),
            scenarios: catalog::sample_scenarios(),
            conversation: catalog::agent_conversation(),
            accounts: catalog::suspicious_accounts(),
            reports: catalog::agent_reports(),
            timeline: catalog::investigation_timeline(),
            alert: catalog::alert_info(),
            summary: catalog::investigation_summary(),
            threat: catalog::threat_intelligence(),
            response_actions: catalog::response_actions(),
            scenario_cursor: 0,
            selected_scenario: None,
            custom_input: String::new(),
            input_mode: false,
            dashboard_tab: 0,
            report_index: 0,
            show_help: false,
            should_quit: false,
            toasts: ToastManager::new(Duration::from_secs(config.ui.toast_duration_secs)),
            active_scenario: None,
        }
    }

    /// Single timer funnel, called once per frame (or with synthetic
    /// instants from tests): drives the playback deadlines, expires toasts,
    /// and hands a completed run over to the router.
    pub fn advance(&mut self, now: Instant) {
        for event in self.playback.poll(now) {
            match event {
                PlaybackEvent::Revealed(count) => {
                    tracing::debug!(revealed = count, "agent message revealed");
                }
                PlaybackEvent::Completed => {
                    if let Some(text) = self.active_scenario.take() {
                        // Non-empty since the playback start accepted it.
                        if self.router.submit(&text).is_ok() {
                            tracing::info!("analysis complete, entering results");
                        }
                    }
                }
            }
        }
        self.toasts.tick();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Help modal intercepts everything.
        if self.show_help {
            match key.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => self.show_help = false,
                _ => {}
            }
            return;
        }

        // Insert mode for the custom scenario owns the keyboard.
        if self.input_mode {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Esc | KeyCode::Enter => self.input_mode = false,
                KeyCode::Backspace => {
                    self.custom_input.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.custom_input.push(c);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            _ => {}
        }

        // While the agent conversation is playing, only cancellation gets
        // through; everything else waits for the hand-off.
        if self.playback.is_running() {
            if key.code == KeyCode::Esc {
                self.playback.cancel();
                self.active_scenario = None;
                tracing::info!("playback cancelled");
            }
            return;
        }

        match self.router.view() {
            View::Simulation => self.on_simulation_key(key),
            View::Results => self.on_results_key(key),
            View::Dashboard => self.on_dashboard_key(key),
        }
    }

    fn on_simulation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.scenario_cursor + 1 < self.scenarios.len() {
                    self.scenario_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scenario_cursor = self.scenario_cursor.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.selected_scenario = if self.selected_scenario == Some(self.scenario_cursor) {
                    None
                } else {
                    Some(self.scenario_cursor)
                };
            }
            KeyCode::Char('c') => self.copy_prompt(),
            KeyCode::Char('i') => self.input_mode = true,
            KeyCode::Char('r') => self.run_analysis(Instant::now()),
            _ => {}
        }
    }

    fn on_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('b') => self.router.back(),
            KeyCode::Char('d') => self.router.open_dashboard(),
            _ => {}
        }
    }

    fn on_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                self.dashboard_tab = (c as usize) - ('1' as usize);
            }
            KeyCode::Tab => {
                self.dashboard_tab = (self.dashboard_tab + 1) % DASHBOARD_TABS.len();
            }
            KeyCode::BackTab => {
                self.dashboard_tab = if self.dashboard_tab == 0 {
                    DASHBOARD_TABS.len() - 1
                } else {
                    self.dashboard_tab - 1
                };
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if self.dashboard_tab == 1 && self.report_index + 1 < self.reports.len() {
                    self.report_index += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if self.dashboard_tab == 1 {
                    self.report_index = self.report_index.saturating_sub(1);
                }
            }
            KeyCode::Char('b') => self.router.back(),
            _ => {}
        }
    }

    /// The text a run would use: the selected sample's prompt, otherwise the
    /// custom input (possibly empty -- validation happens at start).
    pub fn pending_scenario(&self) -> String {
        match self.selected_scenario.and_then(|i| self.scenarios.get(i)) {
            Some(scenario) => scenario.prompt.clone(),
            None => self.custom_input.trim().to_string(),
        }
    }

    /// Kick off the timed playback of the agent conversation.
    pub fn run_analysis(&mut self, now: Instant) {
        let text = self.pending_scenario();
        match self.playback.start(&text, self.conversation.clone(), now) {
            Ok(()) => {
                self.active_scenario = Some(text);
                tracing::info!("analysis started");
            }
            Err(PlaybackError::EmptyScenario) => {
                self.toasts.push(Toast::error(
                    "No scenario selected",
                    "Please select a scenario or enter a custom one.",
                ));
            }
        }
    }

    /// Run the playback to completion without waiting out the presentation
    /// delays. Used by the headless command mode, where the cadence is not
    /// part of the contract.
    pub fn run_scripted(&mut self) -> Result<(), PlaybackError> {
        let text = self.pending_scenario();
        let now = Instant::now();
        self.playback.start(&text, self.conversation.clone(), now)?;
        self.active_scenario = Some(text);
        let total = self.playback.timing().total_for(self.conversation.len());
        self.advance(now + total);
        Ok(())
    }

    /// Cancel an in-flight run (headless counterpart of Esc).
    pub fn cancel_analysis(&mut self) {
        self.playback.cancel();
        self.active_scenario = None;
    }

    /// Copy the prompt of the scenario under the cursor to the system
    /// clipboard. Best effort: failures are logged, never surfaced as
    /// errors.
    fn copy_prompt(&mut self) {
        let Some(scenario) = self.scenarios.get(self.scenario_cursor) else {
            return;
        };
        let prompt = scenario.prompt.clone();
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(prompt)) {
            Ok(()) => {
                self.toasts.push(Toast::success(
                    "Copied to clipboard",
                    "Scenario prompt has been copied to your clipboard.",
                ));
            }
            Err(err) => {
                tracing::warn!(%err, "clipboard unavailable");
            }
        }
    }
}
