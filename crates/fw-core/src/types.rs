use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    Extreme,
}

impl RiskLevel {
    /// Uppercase badge text, e.g. `HIGH`.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
            RiskLevel::Extreme => "EXTREME",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// MessageCategory
// ---------------------------------------------------------------------------

/// Badge tag attached to a scripted agent message. Drives styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    System,
    Analysis,
    Risk,
    Legal,
    Customer,
    Security,
    Breakthrough,
    Conclusion,
}

impl MessageCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MessageCategory::System => "SYSTEM",
            MessageCategory::Analysis => "ANALYSIS",
            MessageCategory::Risk => "RISK",
            MessageCategory::Legal => "LEGAL",
            MessageCategory::Customer => "CUSTOMER",
            MessageCategory::Security => "SECURITY",
            MessageCategory::Breakthrough => "BREAKTHROUGH",
            MessageCategory::Conclusion => "CONCLUSION",
        }
    }
}

// ---------------------------------------------------------------------------
// AgentMessage
// ---------------------------------------------------------------------------

/// One scripted line of the playback conversation. The timestamp is a
/// display label from the script, not a clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMessage {
    pub speaker: String,
    pub body: String,
    pub timestamp_label: String,
    pub category: MessageCategory,
}

impl AgentMessage {
    pub fn new(
        speaker: impl Into<String>,
        body: impl Into<String>,
        timestamp_label: impl Into<String>,
        category: MessageCategory,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            body: body.into(),
            timestamp_label: timestamp_label.into(),
            category,
        }
    }
}

// ---------------------------------------------------------------------------
// ScenarioRecord
// ---------------------------------------------------------------------------

/// A canned suspicious-activity narrative offered on the simulation screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub prompt: String,
    pub risk: RiskLevel,
}

// ---------------------------------------------------------------------------
// Account records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspiciousTransaction {
    pub amount_usd: u64,
    pub location: String,
    pub time_label: String,
    pub distance_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspiciousAccount {
    pub account_number: String,
    pub business_name: String,
    pub customer_since_years: u32,
    pub avg_monthly_balance_usd: u64,
    pub normal_withdrawal_range: String,
    pub transactions: Vec<SuspiciousTransaction>,
    pub total_suspicious_usd: u64,
    pub risk: RiskLevel,
}

// ---------------------------------------------------------------------------
// Agent response cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentActivity {
    Investigating,
    Analyzing,
    Filing,
    Contacting,
    Secured,
}

impl AgentActivity {
    pub fn label(&self) -> &'static str {
        match self {
            AgentActivity::Investigating => "INVESTIGATING",
            AgentActivity::Analyzing => "ANALYZING",
            AgentActivity::Filing => "FILING",
            AgentActivity::Contacting => "CONTACTING",
            AgentActivity::Secured => "SECURED",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            AgentActivity::Investigating => "@",
            AgentActivity::Analyzing => "*",
            AgentActivity::Filing => "!",
            AgentActivity::Contacting => "~",
            AgentActivity::Secured => "#",
        }
    }
}

/// Full response card for one specialist on the fraud response team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReport {
    pub name: String,
    pub role: String,
    pub activity: AgentActivity,
    pub summary: String,
    pub key_findings: Vec<String>,
    pub next_actions: Vec<String>,
    pub timestamp_label: String,
}

// ---------------------------------------------------------------------------
// Investigation timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    InProgress,
    Pending,
}

impl StepStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Completed => "Completed",
            StepStatus::InProgress => "In Progress",
            StepStatus::Pending => "Pending",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            StepStatus::Completed => "+",
            StepStatus::InProgress => "*",
            StepStatus::Pending => "o",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    pub timestamp_label: String,
    pub details: Vec<String>,
}

// ---------------------------------------------------------------------------
// Alert and results headers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertInfo {
    pub id: String,
    pub detection_time_label: String,
    pub alert_level: String,
    pub total_suspicious_usd: u64,
    pub affected_accounts: u32,
    pub pattern_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestigationSummary {
    pub status: String,
    pub confidence_pct: u8,
    pub total_amount_usd: u64,
    pub affected_accounts: u32,
    pub risk: RiskLevel,
    pub response_time: String,
    pub recovery_probability_pct: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatIntelligence {
    pub source: String,
    pub method: String,
    pub sophistication: String,
    pub geographic_scope: String,
    pub planning_timeline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseActionGroup {
    pub category: String,
    pub actions: Vec<String>,
    pub status: StepStatus,
    pub timestamp_label: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
