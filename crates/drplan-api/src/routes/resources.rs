//! Resource catalog handlers.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use drplan_catalog::query::DEFAULT_PER_PAGE;
use drplan_catalog::{Resource, ResourceFilter};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Sentinel meaning "no skill-level filter".
const ALL_LEVELS: &str = "All Levels";
/// Sentinel meaning "no type filter".
const ALL_TYPES: &str = "All Types";

/// Query parameters for the resource listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Skill-level filter; "All Levels" or absent means no filter.
    pub skill_level: Option<String>,
    /// Type filter; "All Types" or absent means no filter.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Free-text search over title and description.
    pub search: Option<String>,
    /// 1-based page number, default 1.
    pub page: Option<u32>,
    /// Page size, default 6.
    pub per_page: Option<u32>,
}

/// Response for the resource listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// Resources within the requested page.
    pub resources: Vec<Resource>,
    /// Pre-pagination match count.
    pub total: usize,
    /// Echoed page number.
    pub page: u32,
    /// Echoed page size.
    pub per_page: u32,
}

fn not_sentinel(value: Option<String>, sentinel: &str) -> Option<String> {
    value.filter(|v| v != sentinel)
}

/// GET /api/resources
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ListResponse>> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE);

    let filter = ResourceFilter {
        skill_level: not_sentinel(params.skill_level, ALL_LEVELS),
        kind: not_sentinel(params.kind, ALL_TYPES),
        search: params.search.filter(|s| !s.is_empty()),
        page,
        per_page,
    };

    debug!(?filter, "listing resources");
    let result = state.store.list_resources(&filter).await?;

    Ok(Json(ListResponse {
        resources: result.resources,
        total: result.total,
        page,
        per_page,
    }))
}

/// GET /api/resources/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<Resource>> {
    let resource = state
        .store
        .resource(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Resource not found"))?;
    Ok(Json(resource))
}
