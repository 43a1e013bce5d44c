//! Risk assessment handlers.

use axum::response::Json;
use drplan_core::validate;
use serde::Serialize;
use serde_json::Value;

use drplan_engine::risk::{self, RiskInput, RiskLevel, RiskScenario, BUSINESS_TYPES};

use crate::error::{ApiError, ApiResult};
use crate::extract::FieldErrors;

/// GET /api/risk-scenarios
pub async fn scenarios() -> Json<&'static [RiskScenario]> {
    Json(risk::scenarios())
}

/// Per-scenario classification in an assessment response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessedRisk {
    /// Scenario identity.
    pub id: String,
    /// Assessed impact (clamped to 1–5).
    pub impact: u8,
    /// Assessed likelihood (clamped to 1–5).
    pub likelihood: u8,
    /// Level from the 5×5 matrix.
    pub level: RiskLevel,
    /// CSS class pair for the level badge.
    pub color_class: &'static str,
}

/// Assessment response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    /// Composite score, 1–25.
    pub score: u32,
    /// Severity bucket for the composite score.
    pub level: RiskLevel,
    /// Per-scenario classification, in selection order.
    pub per_risk: Vec<AssessedRisk>,
    /// Recommended actions, business-type entries first.
    pub recommendations: Vec<String>,
}

/// POST /api/risk-assessment
pub async fn assess(Json(body): Json<Value>) -> ApiResult<Json<AssessmentResponse>> {
    let (business_type, selected) = parse_assessment(&body)?;

    let Some(score) = risk::composite(&selected) else {
        // Unreachable past validation, which rejects empty selections
        return Err(ApiError::validation(
            "Risk assessment incomplete",
            Vec::new(),
        ));
    };

    let per_risk = selected
        .iter()
        .map(|r| {
            let level = risk::classify(r.impact, r.likelihood);
            AssessedRisk {
                id: r.id.clone(),
                impact: r.impact,
                likelihood: r.likelihood,
                level,
                color_class: level.color_class(),
            }
        })
        .collect();

    let recommendations = risk::recommendations(&business_type, &selected);

    Ok(Json(AssessmentResponse {
        score: score.score,
        level: score.level,
        per_risk,
        recommendations,
    }))
}

fn parse_assessment(body: &Value) -> Result<(String, Vec<RiskInput>), ApiError> {
    let mut errs = FieldErrors::new();

    let business_type = errs.require_str(body, "businessType");
    if let Some(business_type) = &business_type {
        errs.check(validate::one_of("businessType", business_type, &BUSINESS_TYPES));
    }

    let mut selected = Vec::new();
    match body.get("risks") {
        None | Some(Value::Null) => errs.push("risks", "is required"),
        Some(Value::Array(items)) => {
            if items.is_empty() {
                errs.push("risks", "select at least one risk scenario");
            }
            for (index, item) in items.iter().enumerate() {
                let mut item_errs = FieldErrors::new();
                let id = item_errs.require_str(item, "id");
                let impact = item_errs.require_int(item, "impact");
                let likelihood = item_errs.require_int(item, "likelihood");
                if !item_errs.is_empty() {
                    errs.push(
                        &format!("risks[{index}]"),
                        "must have id, impact, and likelihood",
                    );
                    continue;
                }
                // Off-matrix values are clamped rather than rejected
                selected.push(RiskInput {
                    id: id.unwrap_or_default(),
                    impact: impact.unwrap_or_default().clamp(1, 5) as u8,
                    likelihood: likelihood.unwrap_or_default().clamp(1, 5) as u8,
                });
            }
        }
        Some(_) => errs.push("risks", "must be an array"),
    }

    errs.finish("Invalid risk assessment request")?;

    Ok((business_type.unwrap_or_default(), selected))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_assessment() {
        let body = json!({
            "businessType": "finance",
            "risks": [
                {"id": "data-loss", "impact": 4, "likelihood": 4},
                {"id": "ransomware", "impact": 5, "likelihood": 3}
            ]
        });
        let (business_type, selected) = parse_assessment(&body).unwrap();
        assert_eq!(business_type, "finance");
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_parse_clamps_out_of_range_axes() {
        let body = json!({
            "businessType": "saas",
            "risks": [{"id": "data-loss", "impact": 9, "likelihood": 0}]
        });
        let (_, selected) = parse_assessment(&body).unwrap();
        assert_eq!(selected[0].impact, 5);
        assert_eq!(selected[0].likelihood, 1);
    }

    #[test]
    fn test_parse_rejects_empty_selection() {
        let body = json!({"businessType": "saas", "risks": []});
        assert!(parse_assessment(&body).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_business_type() {
        let body = json!({
            "businessType": "bakery",
            "risks": [{"id": "data-loss", "impact": 3, "likelihood": 3}]
        });
        assert!(parse_assessment(&body).is_err());
    }

    #[test]
    fn test_parse_flags_malformed_risk_entries() {
        let body = json!({
            "businessType": "saas",
            "risks": [{"id": "data-loss"}]
        });
        assert!(parse_assessment(&body).is_err());
    }
}
