use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn color(&self) -> Color {
        match self {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Success => Color::Green,
            ToastLevel::Error => Color::Red,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Info => "i",
            ToastLevel::Success => "*",
            ToastLevel::Error => "x",
        }
    }
}

/// A transient titled notice, e.g. the empty-scenario validation error or
/// the clipboard confirmation.
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub level: ToastLevel,
    created: Instant,
    /// Explicit lifetime; `None` uses the manager default.
    duration: Option<Duration>,
}

impl Toast {
    pub fn new(title: impl Into<String>, body: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level,
            created: Instant::now(),
            duration: None,
        }
    }

    #[allow(dead_code)]
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, ToastLevel::Info)
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, ToastLevel::Success)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, ToastLevel::Error)
    }

    #[allow(dead_code)]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    fn expired(&self, default: Duration) -> bool {
        self.created.elapsed() >= self.duration.unwrap_or(default)
    }
}

const MAX_TOASTS: usize = 4;
const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

/// Stack of active toasts, newest on top, rendered in the top-right corner.
pub struct ToastManager {
    toasts: VecDeque<Toast>,
    default_duration: Duration,
}

impl ToastManager {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            default_duration,
        }
    }

    /// Push a new toast; the oldest one falls off past the cap.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
        if self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drop expired toasts.
    pub fn tick(&mut self) {
        let default = self.default_duration;
        self.toasts.retain(|t| !t.expired(default));
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Render the stack in the top-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.toasts.is_empty() {
            return;
        }

        let width = TOAST_WIDTH.min(area.width);

        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let y = area.y + 1 + (i as u16) * TOAST_HEIGHT;
            if y + TOAST_HEIGHT > area.y + area.height {
                break;
            }

            let x = area.x + area.width.saturating_sub(width + 1);
            let toast_rect = Rect::new(x, y, width, TOAST_HEIGHT);
            frame.render_widget(Clear, toast_rect);

            let color = toast.level.color();
            let lines = vec![
                Line::from(Span::styled(
                    format!("[{}] {}", toast.level.icon(), toast.title),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::raw(toast.body.as_str())),
            ];

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black));

            frame.render_widget(
                Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
                toast_rect,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> ToastManager {
        ToastManager::new(Duration::from_secs(4))
    }

    #[test]
    fn explicit_zero_duration_expires_immediately() {
        let mgr = manager();
        let toast = Toast::info("t", "b").with_duration(Duration::from_millis(0));
        assert!(toast.expired(mgr.default_duration));
    }

    #[test]
    fn fresh_toast_uses_manager_default() {
        let mgr = manager();
        let toast = Toast::error("t", "b");
        assert!(!toast.expired(mgr.default_duration));
    }

    #[test]
    fn stack_caps_at_max() {
        let mut mgr = manager();
        for i in 0..MAX_TOASTS + 3 {
            mgr.push(Toast::info(format!("toast {i}"), ""));
        }
        assert_eq!(mgr.len(), MAX_TOASTS);
        // oldest dropped first
        assert_eq!(mgr.iter().next().unwrap().title, "toast 3");
    }

    #[test]
    fn tick_removes_expired() {
        let mut mgr = manager();
        mgr.push(Toast::info("gone", "").with_duration(Duration::from_millis(0)));
        mgr.push(Toast::success("stays", ""));
        mgr.tick();
        assert_eq!(mgr.len(), 1);
        assert_eq!(mgr.iter().next().unwrap().title, "stays");
    }
}
