//! Integration tests for the planning tool endpoints.
//!
//! Tests cover:
//! - POST /api/planning-tool/generate - template selection and validation
//! - POST /api/planning-tool/estimate - cost estimation and validation

mod common;

use axum::http::StatusCode;
use common::{error_fields, post_json, test_router};
use serde_json::json;

fn strategy_body(rto: &str, budget: &str, data_volume: f64) -> serde_json::Value {
    json!({
        "organizationSize": "Medium (51-200)",
        "dataVolume": data_volume,
        "recoveryTimeObjective": rto,
        "budget": budget
    })
}

// ============================================================================
// POST /api/planning-tool/generate
// ============================================================================

#[tokio::test]
async fn test_generate_immediate_extensive() {
    let router = test_router();

    let (status, plan) = post_json(
        &router,
        "/api/planning-tool/generate",
        strategy_body("Immediate (0-15 minutes)", "Extensive", 30.0),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["id"], 1);
    assert_eq!(plan["name"], "Continuous Data Protection with Hot Standby");
    assert_eq!(plan["estimatedCost"], "$$$$$");
    assert_eq!(plan["implementationTime"], "4-8 weeks");
    assert_eq!(plan["complexity"], "High");
    assert_eq!(plan["recommendations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_generate_same_day_splits_on_volume() {
    let router = test_router();

    let (_, large) = post_json(
        &router,
        "/api/planning-tool/generate",
        strategy_body("Same day (1-8 hours)", "Limited", 80.0),
    )
    .await;
    assert_eq!(large["name"], "Tiered Cloud Backup Solution");

    let (_, small) = post_json(
        &router,
        "/api/planning-tool/generate",
        strategy_body("Same day (1-8 hours)", "Limited", 10.0),
    )
    .await;
    assert_eq!(small["name"], "Standard Cloud Backup");
}

#[tokio::test]
async fn test_generate_extended_rto_selects_basic() {
    let router = test_router();

    let (_, plan) = post_json(
        &router,
        "/api/planning-tool/generate",
        strategy_body("Extended (24+ hours)", "Extensive", 90.0),
    )
    .await;

    assert_eq!(plan["id"], 6);
    assert_eq!(plan["name"], "Basic Backup Solution");
    assert_eq!(plan["estimatedCost"], "$");
}

#[tokio::test]
async fn test_generate_is_deterministic() {
    let router = test_router();
    let body = strategy_body("Quick (15 minutes - 1 hour)", "Moderate", 42.0);

    let (_, first) = post_json(&router, "/api/planning-tool/generate", body.clone()).await;
    let (_, second) = post_json(&router, "/api/planning-tool/generate", body).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_generate_missing_fields_reported() {
    let router = test_router();

    let (status, body) = post_json(
        &router,
        "/api/planning-tool/generate",
        json!({"budget": "Limited"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid strategy request");
    let fields = error_fields(&body);
    assert!(fields.contains(&"organizationSize".to_string()));
    assert!(fields.contains(&"dataVolume".to_string()));
    assert!(fields.contains(&"recoveryTimeObjective".to_string()));
}

#[tokio::test]
async fn test_generate_rejects_volume_off_slider_scale() {
    let router = test_router();

    let (status, _) = post_json(
        &router,
        "/api/planning-tool/generate",
        strategy_body("Same day (1-8 hours)", "Limited", 250.0),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// POST /api/planning-tool/estimate
// ============================================================================

fn estimate_body() -> serde_json::Value {
    json!({
        "dataVolumeGb": 1000,
        "retentionDays": 30,
        "rpo": "24h",
        "rto": "8h",
        "backupType": "hybrid",
        "region": "us-east"
    })
}

#[tokio::test]
async fn test_estimate_returns_breakdown_and_totals() {
    let router = test_router();

    let (status, body) = post_json(&router, "/api/planning-tool/estimate", estimate_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["storageTiers"].as_array().unwrap().len(), 4);
    assert_eq!(body["lineItems"].as_array().unwrap().len(), 5);
    assert_eq!(body["lineItems"][0]["name"], "Storage Costs");
    assert_eq!(body["volumeDiscountPercent"], 0.0);
    assert!(body["monthlyTotal"].as_f64().unwrap() > 0.0);
    let monthly = body["monthlyTotal"].as_f64().unwrap();
    let yearly = body["yearlyTotal"].as_f64().unwrap();
    assert!((yearly - monthly * 12.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_estimate_applies_volume_discount() {
    let router = test_router();
    let mut body = estimate_body();
    body["dataVolumeGb"] = json!(50_000);

    let (_, response) = post_json(&router, "/api/planning-tool/estimate", body).await;

    assert_eq!(response["volumeDiscountPercent"], 15.0);
}

#[tokio::test]
async fn test_estimate_honors_component_toggles() {
    let router = test_router();
    let mut body = estimate_body();
    body["include"] = json!({
        "storage": false, "backup": false, "recovery": false,
        "network": false, "support": false
    });

    let (_, response) = post_json(&router, "/api/planning-tool/estimate", body).await;

    assert_eq!(response["monthlyTotal"], 0.0);
    // Line items still report their base amounts
    assert!(response["lineItems"][0]["monthly"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_estimate_unknown_region_is_400() {
    let router = test_router();
    let mut body = estimate_body();
    body["region"] = json!("moon-base");

    let (status, response) = post_json(&router, "/api/planning-tool/estimate", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response), vec!["region"]);
}

#[tokio::test]
async fn test_estimate_missing_fields_reported() {
    let router = test_router();

    let (status, body) = post_json(&router, "/api/planning-tool/estimate", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = error_fields(&body);
    assert!(fields.contains(&"dataVolumeGb".to_string()));
    assert!(fields.contains(&"rpo".to_string()));
    assert!(fields.contains(&"region".to_string()));
}
