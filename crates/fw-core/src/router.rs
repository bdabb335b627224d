//! Top-level view routing.
//!
//! Exactly one of three screens is active at a time. Transitions are total
//! over (view, action): actions that do not apply to the current view leave
//! the router untouched. The scenario text submitted on the simulation
//! screen rides along into the results screen and is cleared on the way
//! back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Simulation,
    Results,
    Dashboard,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Simulation => "Simulation",
            View::Results => "Results",
            View::Dashboard => "Dashboard",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("scenario text is empty")]
    EmptyScenario,
}

#[derive(Debug)]
pub struct ViewRouter {
    view: View,
    scenario: String,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            view: View::Simulation,
            scenario: String::new(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The scenario text carried from the last successful submission.
    pub fn scenario(&self) -> &str {
        &self.scenario
    }

    /// Submit a scenario from the simulation screen.
    ///
    /// Empty or whitespace-only text is rejected and nothing changes.
    /// Non-empty text enters `Results` carrying the trimmed text. From any
    /// other view this is a no-op.
    pub fn submit(&mut self, text: &str) -> Result<(), SubmitError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyScenario);
        }
        if self.view == View::Simulation {
            self.scenario = text.to_string();
            self.view = View::Results;
            tracing::info!("entering results view");
        }
        Ok(())
    }

    /// Step back one screen: `Results` returns to `Simulation` and drops the
    /// carried scenario text; `Dashboard` returns to `Results`.
    pub fn back(&mut self) {
        match self.view {
            View::Results => {
                self.view = View::Simulation;
                self.scenario.clear();
            }
            View::Dashboard => self.view = View::Results,
            View::Simulation => {}
        }
    }

    /// Open the investigation dashboard from the results screen.
    pub fn open_dashboard(&mut self) {
        if self.view == View::Results {
            self.view = View::Dashboard;
        }
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
