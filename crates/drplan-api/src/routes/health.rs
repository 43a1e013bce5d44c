//! Health check endpoint.

use axum::response::Json;

/// GET /api/health
pub async fn check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "drplan-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
