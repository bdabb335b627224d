//! Scripted playback of the agent conversation.
//!
//! The controller reveals a fixed, ordered message sequence one entry at a
//! time on a constant cadence, waits out a settle delay after the last
//! reveal, then reports completion exactly once. It owns no timer thread:
//! the UI loop (or a test) passes `Instant`s into [`PlaybackController::poll`]
//! and the controller compares them against a single armed deadline, so
//! overlapping runs cannot double-fire; starting a new run re-arms the
//! same slot.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::types::AgentMessage;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Cadence constants for one run. Presentation tuning, not contract: any
/// positive durations are valid as long as they stay constant for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTiming {
    /// Delay between consecutive message reveals.
    pub reveal_interval: Duration,
    /// Pause between the final reveal and the completion signal.
    pub settle_delay: Duration,
}

impl PlaybackTiming {
    pub fn new(reveal_interval: Duration, settle_delay: Duration) -> Self {
        Self { reveal_interval, settle_delay }
    }

    /// Wall time from `start` until the completion signal for a sequence of
    /// `message_count` entries. The first message shows at start, so only
    /// `message_count - 1` reveal intervals elapse.
    pub fn total_for(&self, message_count: usize) -> Duration {
        self.reveal_interval * (message_count.saturating_sub(1) as u32) + self.settle_delay
    }
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            reveal_interval: Duration::from_millis(1200),
            settle_delay: Duration::from_millis(1500),
        }
    }
}

// ---------------------------------------------------------------------------
// Events and errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A message became visible; the payload is the new revealed count.
    Revealed(usize),
    /// The settle delay elapsed after the final reveal. Fires once per run.
    Completed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("scenario text is empty")]
    EmptyScenario,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Revealing,
    Settling,
    Complete,
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct PlaybackController {
    timing: PlaybackTiming,
    messages: Vec<AgentMessage>,
    revealed: usize,
    phase: PlaybackPhase,
    deadline: Option<Instant>,
}

impl PlaybackController {
    pub fn new(timing: PlaybackTiming) -> Self {
        Self {
            timing,
            messages: Vec::new(),
            revealed: 0,
            phase: PlaybackPhase::Idle,
            deadline: None,
        }
    }

    /// Begin a run over `messages` for the given scenario text.
    ///
    /// Rejects empty or whitespace-only scenario text without touching the
    /// current state. Otherwise any active run is discarded, the first
    /// message is revealed immediately, and the next deadline is armed
    /// relative to `now`.
    pub fn start(
        &mut self,
        scenario: &str,
        messages: Vec<AgentMessage>,
        now: Instant,
    ) -> Result<(), PlaybackError> {
        if scenario.trim().is_empty() {
            return Err(PlaybackError::EmptyScenario);
        }

        self.messages = messages;
        if self.messages.is_empty() {
            // Nothing to reveal; go straight to the settle pause.
            self.revealed = 0;
            self.phase = PlaybackPhase::Settling;
            self.deadline = Some(now + self.timing.settle_delay);
        } else {
            self.revealed = 1;
            if self.messages.len() == 1 {
                self.phase = PlaybackPhase::Settling;
                self.deadline = Some(now + self.timing.settle_delay);
            } else {
                self.phase = PlaybackPhase::Revealing;
                self.deadline = Some(now + self.timing.reveal_interval);
            }
        }
        tracing::debug!(messages = self.messages.len(), "playback started");
        Ok(())
    }

    /// Advance the run to `now`, returning every event that became due.
    ///
    /// Reveals are strictly in sequence order; a large time jump yields one
    /// `Revealed` per message rather than skipping ahead silently, and the
    /// completion signal still arrives last.
    pub fn poll(&mut self, now: Instant) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        while let Some(deadline) = self.deadline {
            if now < deadline {
                break;
            }
            match self.phase {
                PlaybackPhase::Revealing => {
                    self.revealed += 1;
                    events.push(PlaybackEvent::Revealed(self.revealed));
                    if self.revealed == self.messages.len() {
                        self.phase = PlaybackPhase::Settling;
                        self.deadline = Some(deadline + self.timing.settle_delay);
                    } else {
                        self.deadline = Some(deadline + self.timing.reveal_interval);
                    }
                }
                PlaybackPhase::Settling => {
                    self.phase = PlaybackPhase::Complete;
                    self.deadline = None;
                    events.push(PlaybackEvent::Completed);
                }
                PlaybackPhase::Idle | PlaybackPhase::Complete => {
                    self.deadline = None;
                }
            }
        }
        events
    }

    /// Stop the run. The revealed count freezes where it is and no further
    /// events fire until the next `start`.
    pub fn cancel(&mut self) {
        self.phase = PlaybackPhase::Idle;
        self.deadline = None;
    }

    pub fn timing(&self) -> PlaybackTiming {
        self.timing
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn messages(&self) -> &[AgentMessage] {
        &self.messages
    }

    /// The currently visible prefix of the sequence.
    pub fn revealed_messages(&self) -> &[AgentMessage] {
        &self.messages[..self.revealed.min(self.messages.len())]
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, PlaybackPhase::Revealing | PlaybackPhase::Settling)
    }

    pub fn is_complete(&self) -> bool {
        self.phase == PlaybackPhase::Complete
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
