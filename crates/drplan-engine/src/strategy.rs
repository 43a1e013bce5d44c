//! Backup-strategy recommendation.
//!
//! [`recommend`] is a priority-ordered decision tree over the recovery time
//! objective, budget, and data volume - first match wins, and the final
//! branch is a catch-all, so every input produces exactly one of six fixed
//! plan templates. This is a rule table, not a scored model: the template
//! text is content and is kept word-for-word stable.

use serde::{Deserialize, Serialize};

/// Organization-size labels offered by the planning form.
pub const ORGANIZATION_SIZES: [&str; 3] = ["Small (1-50)", "Medium (51-200)", "Large (201+)"];

/// Recovery-time-objective labels offered by the planning form.
pub const RTO_OPTIONS: [&str; 5] = [
    "Immediate (0-15 minutes)",
    "Quick (15 minutes - 1 hour)",
    "Same day (1-8 hours)",
    "Next day (8-24 hours)",
    "Extended (24+ hours)",
];

/// Budget labels offered by the planning form.
pub const BUDGET_OPTIONS: [&str; 3] = ["Limited", "Moderate", "Extensive"];

/// A strategy-generation request. Ephemeral - never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRequest {
    /// Organization-size label. Accepted but does not influence the
    /// branching; kept on the request for wire compatibility.
    pub organization_size: String,
    /// Data volume on the planning form's 0–100 slider scale.
    pub data_volume: f64,
    /// Recovery-time-objective label; matched by prefix.
    pub recovery_time_objective: String,
    /// Budget label; matched exactly, anything unrecognized falls through
    /// to the lowest tier.
    pub budget: String,
}

/// A recommended backup strategy. Derived - never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPlan {
    /// Template identity, 1–6.
    pub id: u32,
    /// Strategy name.
    pub name: String,
    /// One-paragraph description.
    pub description: String,
    /// Cost tier as a dollar-sign label.
    pub estimated_cost: String,
    /// Rollout-time label.
    pub implementation_time: String,
    /// Complexity label.
    pub complexity: String,
    /// Four ordered action recommendations.
    pub recommendations: Vec<String>,
}

fn plan(
    id: u32,
    name: &str,
    description: &str,
    estimated_cost: &str,
    implementation_time: &str,
    complexity: &str,
    recommendations: [&str; 4],
) -> StrategyPlan {
    StrategyPlan {
        id,
        name: name.to_string(),
        description: description.to_string(),
        estimated_cost: estimated_cost.to_string(),
        implementation_time: implementation_time.to_string(),
        complexity: complexity.to_string(),
        recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
    }
}

/// Select the strategy template for a planning request.
///
/// Branch order matters: RTO prefix first ("Immediate"/"Quick", then
/// "Same day"), budget or data volume second, and everything else -
/// including unrecognized RTO labels - lands on the basic template.
pub fn recommend(request: &StrategyRequest) -> StrategyPlan {
    let rto = request.recovery_time_objective.as_str();

    if rto.starts_with("Immediate") || rto.starts_with("Quick") {
        match request.budget.as_str() {
            "Extensive" => plan(
                1,
                "Continuous Data Protection with Hot Standby",
                "A premium solution with real-time data replication and instantly available standby systems for near-zero downtime recovery.",
                "$$$$$",
                "4-8 weeks",
                "High",
                [
                    "Implement continuous data replication",
                    "Maintain hot standby systems",
                    "Automate failover processes",
                    "Conduct monthly recovery tests",
                ],
            ),
            "Moderate" => plan(
                2,
                "Hybrid Cloud Recovery",
                "Combines on-premises backup with cloud-based recovery to provide quick restoration times with moderate costs.",
                "$$$",
                "3-6 weeks",
                "Medium",
                [
                    "Implement local backups for critical data",
                    "Replicate to cloud for disaster recovery",
                    "Set up automated recovery procedures",
                    "Test recovery quarterly",
                ],
            ),
            _ => plan(
                3,
                "Prioritized Local Recovery",
                "Focuses resources on the most critical systems with local backup and optimized recovery procedures.",
                "$$",
                "2-4 weeks",
                "Medium-Low",
                [
                    "Identify and prioritize critical systems",
                    "Implement frequent local backups for critical data",
                    "Create detailed manual recovery procedures",
                    "Test recovery quarterly",
                ],
            ),
        }
    } else if rto.starts_with("Same day") {
        if request.data_volume > 60.0 {
            plan(
                4,
                "Tiered Cloud Backup Solution",
                "A scalable cloud-based backup solution with tiered recovery priorities for large data volumes.",
                "$$$",
                "4-6 weeks",
                "Medium",
                [
                    "Implement tiered data classification",
                    "Use cloud storage with varying retrieval times",
                    "Create automation scripts for restore operations",
                    "Conduct quarterly recovery tests",
                ],
            )
        } else {
            plan(
                5,
                "Standard Cloud Backup",
                "A reliable cloud-based backup solution suitable for most business needs with same-day recovery capabilities.",
                "$$",
                "2-4 weeks",
                "Low",
                [
                    "Configure daily cloud backups",
                    "Implement retention policies",
                    "Document recovery procedures",
                    "Test recovery quarterly",
                ],
            )
        }
    } else {
        plan(
            6,
            "Basic Backup Solution",
            "A cost-effective backup solution focused on essential data protection with acceptable recovery times.",
            "$",
            "1-2 weeks",
            "Low",
            [
                "Implement weekly full backups",
                "Configure daily incremental backups",
                "Document basic recovery procedures",
                "Test recovery semi-annually",
            ],
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
