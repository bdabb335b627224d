pub mod accounts;
pub mod agents;
pub mod dashboard;
pub mod results;
pub mod simulation;
pub mod timeline;

use ratatui::style::Color;

use fw_core::types::{AgentActivity, MessageCategory, RiskLevel, StepStatus};

/// `127500` -> `$127,500`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

pub fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::LightRed,
        RiskLevel::Critical => Color::Red,
        RiskLevel::Extreme => Color::Magenta,
    }
}

pub fn category_color(category: MessageCategory) -> Color {
    match category {
        MessageCategory::System => Color::Cyan,
        MessageCategory::Analysis => Color::LightBlue,
        MessageCategory::Risk => Color::Yellow,
        MessageCategory::Legal => Color::Magenta,
        MessageCategory::Customer => Color::Green,
        MessageCategory::Security => Color::Red,
        MessageCategory::Breakthrough => Color::LightYellow,
        MessageCategory::Conclusion => Color::White,
    }
}

pub fn activity_color(activity: AgentActivity) -> Color {
    match activity {
        AgentActivity::Investigating => Color::Cyan,
        AgentActivity::Analyzing => Color::Yellow,
        AgentActivity::Filing => Color::Red,
        AgentActivity::Contacting => Color::Green,
        AgentActivity::Secured => Color::Green,
    }
}

pub fn step_color(status: StepStatus) -> Color {
    match status {
        StepStatus::Completed => Color::Green,
        StepStatus::InProgress => Color::Yellow,
        StepStatus::Pending => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(950), "$950");
        assert_eq!(format_usd(27_000), "$27,000");
        assert_eq!(format_usd(127_500), "$127,500");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }
}
