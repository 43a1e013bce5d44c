//! Risk assessment: per-scenario classification, composite scoring, and
//! recommendation text.
//!
//! Two scales live here and they are intentionally different:
//!
//! - [`classify`] rates a single scenario via a static 5×5
//!   impact × likelihood table, used for per-item display.
//! - [`composite`] averages `impact × likelihood` over the selected
//!   scenarios and buckets the rounded mean with its own thresholds
//!   (<6 Low, <12 Medium, <20 High, else Very High), used for the overall
//!   severity verdict.

use serde::{Deserialize, Serialize};

/// Business-type selectors accepted by the assessment.
pub const BUSINESS_TYPES: [&str; 5] =
    ["e-commerce", "healthcare", "finance", "manufacturing", "saas"];

/// Qualitative risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Negligible risk.
    #[serde(rename = "Very Low")]
    VeryLow,
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
    /// Critical risk.
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Display label, e.g. "Very High".
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// CSS class pair used by clients to color the level badge.
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::VeryLow | Self::Low => "bg-green-100 text-green-800",
            Self::Medium => "bg-yellow-100 text-yellow-800",
            Self::High => "bg-orange-100 text-orange-800",
            Self::VeryHigh => "bg-red-100 text-red-800",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 5×5 classification table, rows indexed by impact, columns by
/// likelihood (both 1-based on the wire, 0-based here).
const MATRIX: [[RiskLevel; 5]; 5] = {
    use RiskLevel::*;
    [
        [VeryLow, Low, Low, Medium, Medium],
        [Low, Low, Medium, Medium, High],
        [Low, Medium, Medium, High, High],
        [Medium, Medium, High, High, VeryHigh],
        [Medium, High, High, VeryHigh, VeryHigh],
    ]
};

/// Classify a single scenario by impact and likelihood.
///
/// Both arguments must already be in `1..=5`; callers clamp out-of-range
/// input before the lookup.
pub fn classify(impact: u8, likelihood: u8) -> RiskLevel {
    debug_assert!((1..=5).contains(&impact) && (1..=5).contains(&likelihood));
    MATRIX[(impact - 1) as usize][(likelihood - 1) as usize]
}

/// A selected risk scenario with its assessed impact and likelihood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    /// Scenario identity, e.g. "data-loss".
    pub id: String,
    /// Impact, 1–5.
    pub impact: u8,
    /// Likelihood, 1–5.
    pub likelihood: u8,
}

/// Composite assessment over a scenario selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositeScore {
    /// Rounded mean of `impact × likelihood`, 1–25.
    pub score: u32,
    /// Severity bucket for the score.
    pub level: RiskLevel,
}

/// Score a scenario selection.
///
/// Returns `None` when nothing is selected - the assessment is incomplete
/// and no score exists.
pub fn composite(selected: &[RiskInput]) -> Option<CompositeScore> {
    if selected.is_empty() {
        return None;
    }

    let total: u32 = selected
        .iter()
        .map(|r| u32::from(r.impact) * u32::from(r.likelihood))
        .sum();
    let score = (f64::from(total) / selected.len() as f64).round() as u32;

    let level = if score < 6 {
        RiskLevel::Low
    } else if score < 12 {
        RiskLevel::Medium
    } else if score < 20 {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    };

    Some(CompositeScore { score, level })
}

/// Build the recommended-actions list for an assessment.
///
/// Business-type recommendations come first, then one entry per selected
/// scenario whose `impact × likelihood` exceeds 15, in selection order.
/// Unrecognized business types and scenario ids contribute nothing.
pub fn recommendations(business_type: &str, selected: &[RiskInput]) -> Vec<String> {
    let mut out: Vec<&str> = Vec::new();

    match business_type {
        "e-commerce" => {
            out.push("Implement regular database backups with point-in-time recovery");
            out.push("Establish redundant payment processing systems");
        }
        "healthcare" => {
            out.push("Ensure HIPAA-compliant backup and disaster recovery processes");
            out.push("Implement encrypted backup storage for patient data");
        }
        "finance" => {
            out.push("Setup real-time replication for transaction data");
            out.push("Implement multi-region failover capabilities");
        }
        "manufacturing" => {
            out.push("Create backup systems for production control systems");
            out.push("Implement offline backups of critical production data");
        }
        "saas" => {
            out.push("Implement multi-region container deployment strategies");
            out.push("Design for graceful service degradation during partial outages");
        }
        _ => {}
    }

    for risk in selected {
        if u32::from(risk.impact) * u32::from(risk.likelihood) <= 15 {
            continue;
        }
        match risk.id.as_str() {
            "data-loss" => {
                out.push("Implement 3-2-1 backup strategy (3 copies, 2 media types, 1 offsite)");
            }
            "system-outage" => out.push("Establish redundant systems with automated failover"),
            "ransomware" => {
                out.push("Create immutable backups that cannot be modified once created");
            }
            "container-failure" => {
                out.push("Implement multi-cluster container orchestration with automated failover");
            }
            "cloud-provider" => out.push("Consider multi-cloud strategy for critical applications"),
            "natural-disaster" => out.push("Create geographically-distributed backup sites"),
            other => log::debug!("no recommendation for risk scenario {other:?}"),
        }
    }

    out.into_iter().map(String::from).collect()
}

/// A named risk scenario offered on the assessment checklist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScenario {
    /// Stable scenario identity.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-sentence description.
    pub description: &'static str,
    /// Default impact preselected on the checklist.
    pub default_impact: u8,
    /// Default likelihood preselected on the checklist.
    pub default_likelihood: u8,
}

const SCENARIOS: [RiskScenario; 9] = [
    RiskScenario {
        id: "data-loss",
        name: "Data Loss",
        description: "Loss of critical business data due to hardware failure, human error, or cyber attacks.",
        default_impact: 3,
        default_likelihood: 3,
    },
    RiskScenario {
        id: "system-outage",
        name: "System Outage",
        description: "Unplanned downtime of critical systems affecting business operations.",
        default_impact: 3,
        default_likelihood: 2,
    },
    RiskScenario {
        id: "network-failure",
        name: "Network Failure",
        description: "Loss of connectivity between systems or to external services.",
        default_impact: 2,
        default_likelihood: 2,
    },
    RiskScenario {
        id: "ransomware",
        name: "Ransomware Attack",
        description: "Malicious encryption of data with demands for payment to restore access.",
        default_impact: 5,
        default_likelihood: 3,
    },
    RiskScenario {
        id: "natural-disaster",
        name: "Natural Disaster",
        description: "Physical damage to infrastructure due to fire, flood, earthquake, etc.",
        default_impact: 5,
        default_likelihood: 1,
    },
    RiskScenario {
        id: "cloud-provider",
        name: "Cloud Provider Outage",
        description: "Service disruption from your cloud infrastructure provider.",
        default_impact: 4,
        default_likelihood: 2,
    },
    RiskScenario {
        id: "container-failure",
        name: "Container Orchestration Failure",
        description: "Failures in container management systems like Kubernetes or Docker Swarm.",
        default_impact: 3,
        default_likelihood: 2,
    },
    RiskScenario {
        id: "config-drift",
        name: "Configuration Drift",
        description: "Inconsistencies between environments causing application failures.",
        default_impact: 2,
        default_likelihood: 3,
    },
    RiskScenario {
        id: "ci-cd-pipeline",
        name: "CI/CD Pipeline Failure",
        description: "Failures in automated deployment processes affecting application updates.",
        default_impact: 2,
        default_likelihood: 2,
    },
];

/// The checklist of known risk scenarios, in display order.
pub fn scenarios() -> &'static [RiskScenario] {
    &SCENARIOS
}

// ============================================================================
// Tests
// ============================================================================
