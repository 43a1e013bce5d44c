//! Planning tool handlers: strategy generation and cost estimation.

use axum::response::Json;
use drplan_core::validate;
use serde_json::Value;
use tracing::info;

use drplan_engine::cost::{self, CostEstimate, CostRequest, CostToggles};
use drplan_engine::strategy::{self, StrategyPlan, StrategyRequest};

use crate::error::{ApiError, ApiResult};
use crate::extract::FieldErrors;

/// POST /api/planning-tool/generate
pub async fn generate(Json(body): Json<Value>) -> ApiResult<Json<StrategyPlan>> {
    let request = parse_strategy_request(&body)?;
    let plan = strategy::recommend(&request);
    info!(plan = plan.id, rto = %request.recovery_time_objective, "strategy generated");
    Ok(Json(plan))
}

fn parse_strategy_request(body: &Value) -> Result<StrategyRequest, ApiError> {
    let mut errs = FieldErrors::new();

    let organization_size = errs.require_str(body, "organizationSize");
    let data_volume = errs.require_f64(body, "dataVolume");
    let recovery_time_objective = errs.require_str(body, "recoveryTimeObjective");
    let budget = errs.require_str(body, "budget");

    if let Some(volume) = data_volume {
        errs.check(validate::f64_range("dataVolume", volume, 0.0, 100.0));
    }

    errs.finish("Invalid strategy request")?;

    Ok(StrategyRequest {
        organization_size: organization_size.unwrap_or_default(),
        data_volume: data_volume.unwrap_or_default(),
        recovery_time_objective: recovery_time_objective.unwrap_or_default(),
        budget: budget.unwrap_or_default(),
    })
}

/// POST /api/planning-tool/estimate
pub async fn estimate(Json(body): Json<Value>) -> ApiResult<Json<CostEstimate>> {
    let request = parse_cost_request(&body)?;
    // Label membership is checked by the estimator itself
    let estimate = cost::estimate(&request)?;
    Ok(Json(estimate))
}

fn parse_cost_request(body: &Value) -> Result<CostRequest, ApiError> {
    let mut errs = FieldErrors::new();

    let data_volume_gb = errs.require_f64(body, "dataVolumeGb");
    let retention_days = errs.require_int(body, "retentionDays");
    let rpo = errs.require_str(body, "rpo");
    let rto = errs.require_str(body, "rto");
    let backup_type = errs.require_str(body, "backupType");
    let region = errs.require_str(body, "region");

    if let Some(days) = retention_days {
        errs.check(validate::int_range("retentionDays", days, 0, 36_500));
    }

    let include = match body.get("include") {
        None | Some(Value::Null) => CostToggles::default(),
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(toggles) => toggles,
            Err(_) => {
                errs.push("include", "must be an object of component toggles");
                CostToggles::default()
            }
        },
    };

    errs.finish("Invalid estimate request")?;

    Ok(CostRequest {
        data_volume_gb: data_volume_gb.unwrap_or_default(),
        retention_days: retention_days.unwrap_or_default() as u32,
        rpo: rpo.unwrap_or_default(),
        rto: rto.unwrap_or_default(),
        backup_type: backup_type.unwrap_or_default(),
        region: region.unwrap_or_default(),
        include,
    })
}

// ============================================================================
// Tests
// ============================================================================
