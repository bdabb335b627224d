//! Static scenario content for the demonstration console.
//!
//! Everything here is fixed at build time: the canned scenarios offered on
//! the simulation screen, the scripted agent conversation the playback
//! controller reveals, and the account / report / timeline records the
//! results and dashboard views display. No record is generated at runtime.

use crate::types::{
    AgentActivity, AgentMessage, AgentReport, AlertInfo, InvestigationSummary, MessageCategory,
    ResponseActionGroup, RiskLevel, ScenarioRecord, StepStatus, SuspiciousAccount,
    SuspiciousTransaction, ThreatIntelligence, TimelineEntry,
};

// ---------------------------------------------------------------------------
// Sample scenarios
// ---------------------------------------------------------------------------

pub fn sample_scenarios() -> Vec<ScenarioRecord> {
    vec![
        ScenarioRecord {
            id: "business-fraud".into(),
            title: "Business Account Fraud".into(),
            description: "Multiple large cash withdrawals from business accounts in unusual locations".into(),
            prompt: "Suspicious transaction patterns detected on multiple accounts. Large cash \
                withdrawals from business accounts outside normal patterns. Metro Construction LLC \
                withdrawn $27,000 from Dallas and Houston branches (180+ miles from Austin). \
                Riverside Medical Group withdrawn $43,000 from San Antonio and Waco. TechFlow \
                Solutions withdrawn $30,500 from Fort Worth and Corpus Christi. Lone Star Catering \
                withdrawn $27,000 from El Paso and Lubbock. All transactions occurred within 6-hour \
                window today. Investigate and recommend immediate actions.".into(),
            risk: RiskLevel::High,
        },
        ScenarioRecord {
            id: "identity-theft".into(),
            title: "Identity Theft Pattern".into(),
            description: "Coordinated account takeovers with geographic anomalies".into(),
            prompt: "Multiple customer accounts showing signs of identity theft. New device logins \
                from different states, immediate password changes followed by large transfers. \
                Sarah Chen's account: $85,000 wire to unknown account after login from Nevada. \
                Mike Rodriguez account: $45,000 transferred after access from Florida. Both \
                customers report no travel. Investigate identity theft pattern.".into(),
            risk: RiskLevel::Critical,
        },
        ScenarioRecord {
            id: "credit-card-fraud".into(),
            title: "Credit Card Fraud Ring".into(),
            description: "Coordinated credit card fraud across multiple merchant types".into(),
            prompt: "Credit card fraud ring detected. 15 stolen cards used at electronics stores, \
                gas stations, and ATMs within 2-hour window. Transaction amounts between $200-$900 \
                to avoid triggers. Geographic pattern shows movement along I-35 corridor. Card \
                numbers from different issuing banks but similar fraud pattern. Investigate \
                coordinated fraud ring.".into(),
            risk: RiskLevel::Medium,
        },
    ]
}

// ---------------------------------------------------------------------------
// Scripted agent conversation
// ---------------------------------------------------------------------------

/// The fixed playback sequence, in reveal order.
pub fn agent_conversation() -> Vec<AgentMessage> {
    vec![
        AgentMessage::new(
            "System Orchestrator",
            "FRAUD ALERT ACTIVATED - Priority Level: HIGH. Multiple suspicious cash withdrawals \
             detected across 4 business accounts totaling $127,500. Activating Fraud Response Team.",
            "14:23:15",
            MessageCategory::System,
        ),
        AgentMessage::new(
            "James (Fraud Detection)",
            "Confirmed organized fraud pattern. Geographic anomalies 80-365 miles from normal \
             locations. Amounts 3-6x normal patterns. All transactions within 6-hour window. \
             Structuring indicators present.",
            "14:25:33",
            MessageCategory::Analysis,
        ),
        AgentMessage::new(
            "Robert (Risk Assessment)",
            "Institutional exposure: $127,500 direct. Monitoring 23 similar accounts. Reputational \
             risk HIGH - 4 long-term customers affected. Regulatory compliance required.",
            "14:27:18",
            MessageCategory::Risk,
        ),
        AgentMessage::new(
            "Lisa (Legal Compliance)",
            "SAR filing required within 30 days. FBI notification needed. Regulation CC obligations \
             triggered. All regulatory timelines being met.",
            "14:28:45",
            MessageCategory::Legal,
        ),
        AgentMessage::new(
            "Diana (Customer Experience)",
            "Customer contact strategy implemented. Verifying transactions with business owners \
             while preserving relationships. 4 high-value customers require careful handling.",
            "14:29:12",
            MessageCategory::Customer,
        ),
        AgentMessage::new(
            "Carlos (Customer Support)",
            "Account security measures active. Cards suspended, monitoring enhanced. Business \
             operations protected - payroll and vendor payments maintained.",
            "14:30:07",
            MessageCategory::Security,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Affected accounts
// ---------------------------------------------------------------------------

pub fn suspicious_accounts() -> Vec<SuspiciousAccount> {
    vec![
        SuspiciousAccount {
            account_number: "****-4521".into(),
            business_name: "Metro Construction LLC".into(),
            customer_since_years: 8,
            avg_monthly_balance_usd: 85_000,
            normal_withdrawal_range: "$2,000-8,000".into(),
            transactions: vec![
                SuspiciousTransaction {
                    amount_usd: 15_000,
                    location: "Dallas branch".into(),
                    time_label: "09:45 AM".into(),
                    distance_label: "180 miles".into(),
                },
                SuspiciousTransaction {
                    amount_usd: 12_000,
                    location: "Houston branch".into(),
                    time_label: "11:30 AM".into(),
                    distance_label: "165 miles".into(),
                },
            ],
            total_suspicious_usd: 27_000,
            risk: RiskLevel::High,
        },
        SuspiciousAccount {
            account_number: "****-7892".into(),
            business_name: "Riverside Medical Group".into(),
            customer_since_years: 12,
            avg_monthly_balance_usd: 145_000,
            normal_withdrawal_range: "$1,500-5,000".into(),
            transactions: vec![
                SuspiciousTransaction {
                    amount_usd: 25_000,
                    location: "San Antonio branch".into(),
                    time_label: "10:15 AM".into(),
                    distance_label: "80 miles".into(),
                },
                SuspiciousTransaction {
                    amount_usd: 18_000,
                    location: "Waco branch".into(),
                    time_label: "02:45 PM".into(),
                    distance_label: "100 miles".into(),
                },
            ],
            total_suspicious_usd: 43_000,
            risk: RiskLevel::Critical,
        },
        SuspiciousAccount {
            account_number: "****-3156".into(),
            business_name: "TechFlow Solutions Inc".into(),
            customer_since_years: 4,
            avg_monthly_balance_usd: 62_000,
            normal_withdrawal_range: "$1,000-3,500".into(),
            transactions: vec![
                SuspiciousTransaction {
                    amount_usd: 22_500,
                    location: "Fort Worth branch".into(),
                    time_label: "08:30 AM".into(),
                    distance_label: "195 miles".into(),
                },
                SuspiciousTransaction {
                    amount_usd: 8_000,
                    location: "Corpus Christi branch".into(),
                    time_label: "01:20 PM".into(),
                    distance_label: "210 miles".into(),
                },
            ],
            total_suspicious_usd: 30_500,
            risk: RiskLevel::Critical,
        },
        SuspiciousAccount {
            account_number: "****-9847".into(),
            business_name: "Lone Star Catering".into(),
            customer_since_years: 6,
            avg_monthly_balance_usd: 38_000,
            normal_withdrawal_range: "$800-2,500".into(),
            transactions: vec![
                SuspiciousTransaction {
                    amount_usd: 14_000,
                    location: "El Paso branch".into(),
                    time_label: "11:45 AM".into(),
                    distance_label: "350 miles".into(),
                },
                SuspiciousTransaction {
                    amount_usd: 13_000,
                    location: "Lubbock branch".into(),
                    time_label: "03:15 PM".into(),
                    distance_label: "365 miles".into(),
                },
            ],
            total_suspicious_usd: 27_000,
            risk: RiskLevel::Extreme,
        },
    ]
}

// ---------------------------------------------------------------------------
// Agent response cards
// ---------------------------------------------------------------------------

pub fn agent_reports() -> Vec<AgentReport> {
    vec![
        AgentReport {
            name: "James".into(),
            role: "Fraud Detection Specialist".into(),
            activity: AgentActivity::Investigating,
            summary: "HIGH PRIORITY FRAUD ALERT - Confirmed organized fraud pattern across 4 \
                business accounts. Transaction analysis reveals coordinated geographic and \
                behavioral anomalies with amounts 3-6x normal patterns.".into(),
            key_findings: vec![
                "Geographic anomalies: 80-365 miles from normal locations".into(),
                "Behavioral anomalies: 3-6x normal withdrawal amounts".into(),
                "Timing correlation: All within 6-hour window".into(),
                "Potential structuring: Amounts under $25,000 threshold".into(),
            ],
            next_actions: vec![
                "Complete transaction pattern analysis".into(),
                "Cross-reference with historical fraud cases".into(),
                "Monitor additional accounts for pattern expansion".into(),
            ],
            timestamp_label: "14:25:33".into(),
        },
        AgentReport {
            name: "Robert".into(),
            role: "Risk Assessment Agent".into(),
            activity: AgentActivity::Analyzing,
            summary: "Institutional risk exposure contained at $127,500 direct exposure. \
                Monitoring 23 similar accounts for pattern expansion. Coordinating protective \
                measures while maintaining business operations continuity.".into(),
            key_findings: vec![
                "Direct loss exposure: $127,500".into(),
                "Reputational risk: HIGH - 4 long-term customers affected".into(),
                "Regulatory risk: MODERATE - BSA/AML reporting required".into(),
                "Insurance coverage: 80% of verified losses".into(),
            ],
            next_actions: vec![
                "Implement additional account monitoring".into(),
                "Coordinate with insurance for fraud claims".into(),
                "Assess operational impact on business customers".into(),
            ],
            timestamp_label: "14:27:18".into(),
        },
        AgentReport {
            name: "Lisa".into(),
            role: "Legal Compliance Agent".into(),
            activity: AgentActivity::Filing,
            summary: "Legal obligations analysis complete. SAR filing required within 30 days for \
                suspected fraud >$5,000. Coordinating with law enforcement and regulatory \
                authorities per BSA requirements.".into(),
            key_findings: vec![
                "SAR filing required within 30 days".into(),
                "FBI financial crimes notification needed".into(),
                "Regulation CC provisional credit obligations".into(),
                "Texas Finance Code compliance requirements".into(),
            ],
            next_actions: vec![
                "Prepare Suspicious Activity Report".into(),
                "Contact FBI financial crimes unit".into(),
                "Preserve all transaction documentation".into(),
            ],
            timestamp_label: "14:28:45".into(),
        },
        AgentReport {
            name: "Diana".into(),
            role: "Customer Experience Agent".into(),
            activity: AgentActivity::Contacting,
            summary: "Customer communication strategy implemented. Direct phone contact initiated \
                with all 4 business owners to verify transactions and protect relationships while \
                supporting investigation integrity.".into(),
            key_findings: vec![
                "4 long-term business customers (4-12 years)".into(),
                "High-value relationships requiring careful handling".into(),
                "No customers contacted bank about travel/withdrawals".into(),
                "Communication scripts prepared for each business type".into(),
            ],
            next_actions: vec![
                "Complete customer verification calls".into(),
                "Document all customer responses".into(),
                "Coordinate account restoration timeline".into(),
            ],
            timestamp_label: "14:29:12".into(),
        },
        AgentReport {
            name: "Carlos".into(),
            role: "Customer Support Specialist".into(),
            activity: AgentActivity::Secured,
            summary: "Account security measures implemented across all 4 accounts. Debit cards \
                suspended, transaction monitoring enhanced, while maintaining critical business \
                operations like payroll and vendor payments.".into(),
            key_findings: vec![
                "All accounts restricted with business protections".into(),
                "Debit cards suspended, online banking secured".into(),
                "Payroll and critical payments protected".into(),
                "Branch network alerted to affected customers".into(),
            ],
            next_actions: vec![
                "Monitor for additional suspicious activity".into(),
                "Prepare for account restoration process".into(),
                "Coordinate new card issuance with enhanced security".into(),
            ],
            timestamp_label: "14:30:07".into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Investigation timeline
// ---------------------------------------------------------------------------

pub fn investigation_timeline() -> Vec<TimelineEntry> {
    vec![
        TimelineEntry {
            id: "1".into(),
            title: "Fraud Pattern Detection".into(),
            description: "Suspicious transaction patterns identified across 4 business accounts".into(),
            status: StepStatus::Completed,
            timestamp_label: "14:23:15".into(),
            details: vec![
                "Geographic anomalies detected".into(),
                "Amount patterns analyzed".into(),
                "Timing correlations identified".into(),
            ],
        },
        TimelineEntry {
            id: "2".into(),
            title: "Account Security Implementation".into(),
            description: "Immediate protective measures activated on all affected accounts".into(),
            status: StepStatus::Completed,
            timestamp_label: "14:25:30".into(),
            details: vec![
                "Debit cards suspended".into(),
                "Transaction limits imposed".into(),
                "Enhanced monitoring activated".into(),
            ],
        },
        TimelineEntry {
            id: "3".into(),
            title: "Multi-Agent Response Activated".into(),
            description: "Fraud response team deployed for comprehensive investigation".into(),
            status: StepStatus::Completed,
            timestamp_label: "14:27:00".into(),
            details: vec![
                "5 specialist agents activated".into(),
                "Investigation protocols initiated".into(),
                "Cross-functional coordination established".into(),
            ],
        },
        TimelineEntry {
            id: "4".into(),
            title: "Customer Contact Protocol".into(),
            description: "Direct verification calls initiated with all affected business owners".into(),
            status: StepStatus::InProgress,
            timestamp_label: "14:30:00".into(),
            details: vec![
                "Metro Construction LLC - In progress".into(),
                "Riverside Medical Group - Pending".into(),
                "TechFlow Solutions - Pending".into(),
                "Lone Star Catering - Pending".into(),
            ],
        },
        TimelineEntry {
            id: "5".into(),
            title: "Legal Compliance Filing".into(),
            description: "SAR preparation and regulatory notifications".into(),
            status: StepStatus::InProgress,
            timestamp_label: "14:32:00".into(),
            details: vec![
                "Suspicious Activity Report preparation".into(),
                "FBI financial crimes notification".into(),
                "Documentation preservation".into(),
            ],
        },
        TimelineEntry {
            id: "6".into(),
            title: "Account Restoration".into(),
            description: "Verified legitimate accounts will be restored with enhanced security".into(),
            status: StepStatus::Pending,
            timestamp_label: "Est. 16:00:00".into(),
            details: vec![
                "Customer verification completion".into(),
                "New secure debit cards issued".into(),
                "Enhanced monitoring maintained".into(),
            ],
        },
    ]
}

// ---------------------------------------------------------------------------
// Alert and results headers
// ---------------------------------------------------------------------------

pub fn alert_info() -> AlertInfo {
    AlertInfo {
        id: "FD-2025-0707-001".into(),
        detection_time_label: "2025-07-07 14:23:15 EST".into(),
        alert_level: "HIGH PRIORITY".into(),
        total_suspicious_usd: 127_500,
        affected_accounts: 4,
        pattern_type: "Unusual cash withdrawal behavior".into(),
    }
}

pub fn investigation_summary() -> InvestigationSummary {
    InvestigationSummary {
        status: "CONFIRMED".into(),
        confidence_pct: 98,
        total_amount_usd: 127_500,
        affected_accounts: 4,
        risk: RiskLevel::High,
        response_time: "2 minutes".into(),
        recovery_probability_pct: 95,
    }
}

pub fn threat_intelligence() -> ThreatIntelligence {
    ThreatIntelligence {
        source: "Compromised Payment Processor".into(),
        method: "Insider Knowledge Exploitation".into(),
        sophistication: "Advanced".into(),
        geographic_scope: "Multi-state Operation".into(),
        planning_timeline: "3-week planning period".into(),
    }
}

pub fn response_actions() -> Vec<ResponseActionGroup> {
    vec![
        ResponseActionGroup {
            category: "Immediate Security".into(),
            actions: vec![
                "All accounts frozen and secured".into(),
                "Debit cards suspended immediately".into(),
                "Enhanced monitoring activated".into(),
                "Emergency access protocols established".into(),
            ],
            status: StepStatus::Completed,
            timestamp_label: "14:25:00".into(),
        },
        ResponseActionGroup {
            category: "Legal & Compliance".into(),
            actions: vec![
                "FBI financial crimes unit notified".into(),
                "Suspicious Activity Report (SAR) filed".into(),
                "Documentation preserved and secured".into(),
                "Regulatory authorities contacted".into(),
            ],
            status: StepStatus::InProgress,
            timestamp_label: "14:30:00".into(),
        },
        ResponseActionGroup {
            category: "Customer Protection".into(),
            actions: vec![
                "All customers contacted and verified".into(),
                "Business operations continuity maintained".into(),
                "Recovery process initiated".into(),
                "Enhanced security measures implemented".into(),
            ],
            status: StepStatus::InProgress,
            timestamp_label: "14:35:00".into(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn scenario_ids_are_unique() {
        let scenarios = sample_scenarios();
        let ids: HashSet<&str> = scenarios.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), scenarios.len());
    }

    #[test]
    fn scenario_prompts_are_nonempty() {
        for scenario in sample_scenarios() {
            assert!(!scenario.prompt.trim().is_empty(), "{}", scenario.id);
        }
    }

    #[test]
    fn conversation_is_ordered_and_nonempty() {
        let messages = agent_conversation();
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[0].category, MessageCategory::System);
        assert_eq!(messages.last().unwrap().speaker, "Carlos (Customer Support)");
    }

    #[test]
    fn account_totals_match_transactions() {
        for account in suspicious_accounts() {
            let sum: u64 = account.transactions.iter().map(|t| t.amount_usd).sum();
            assert_eq!(sum, account.total_suspicious_usd, "{}", account.business_name);
        }
    }

    #[test]
    fn alert_total_matches_account_totals() {
        let alert = alert_info();
        let sum: u64 = suspicious_accounts().iter().map(|a| a.total_suspicious_usd).sum();
        assert_eq!(sum, alert.total_suspicious_usd);
        assert_eq!(suspicious_accounts().len() as u32, alert.affected_accounts);
    }

    #[test]
    fn five_specialists_report() {
        assert_eq!(agent_reports().len(), 5);
    }

    #[test]
    fn timeline_steps_carry_details() {
        let timeline = investigation_timeline();
        assert_eq!(timeline.len(), 6);
        assert!(timeline.iter().all(|t| !t.details.is_empty()));
    }
}
