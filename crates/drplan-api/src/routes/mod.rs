//! Router configuration.
//!
//! Route definitions live here; handler implementations are in their
//! respective submodules.

mod contact;
mod health;
mod planning;
mod reference;
mod resources;
mod risk;
mod testimonials;

use axum::http::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the API router with all routes.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);

    Router::new()
        // Health
        .route("/api/health", get(health::check))
        // Resource catalog
        .route("/api/resources", get(resources::list))
        .route("/api/resources/{id}", get(resources::get))
        // Reference data
        .route("/api/strategy-comparison", get(reference::strategy_comparison))
        .route("/api/downloadable-resources", get(reference::list_downloadable))
        .route("/api/download-resource/{id}", get(reference::download))
        // Testimonials
        .route(
            "/api/testimonials",
            get(testimonials::list).post(testimonials::create),
        )
        // Contact intake
        .route("/api/contact", post(contact::create))
        // Planning tools
        .route("/api/planning-tool/generate", post(planning::generate))
        .route("/api/planning-tool/estimate", post(planning::estimate))
        .route("/api/risk-scenarios", get(risk::scenarios))
        .route("/api/risk-assessment", post(risk::assess))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([ORIGIN, ACCEPT, CONTENT_TYPE])
}
