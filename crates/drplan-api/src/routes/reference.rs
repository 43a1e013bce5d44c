//! Reference data handlers: comparison matrix and downloadable assets.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;

use drplan_catalog::{DownloadableResource, StrategyComparison};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// GET /api/strategy-comparison
pub async fn strategy_comparison(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StrategyComparison>>> {
    Ok(Json(state.store.strategy_comparisons().await?))
}

/// GET /api/downloadable-resources
pub async fn list_downloadable(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DownloadableResource>>> {
    Ok(Json(state.store.downloadable_resources().await?))
}

/// The asset named in a download acknowledgement.
#[derive(Debug, Serialize)]
pub struct DownloadedAsset {
    /// Asset name.
    pub name: String,
    /// Asset type tag.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Response for a download request.
///
/// No file is streamed; the endpoint acknowledges the download and names
/// the asset.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    /// Acknowledgement message.
    pub message: String,
    /// The asset being downloaded.
    pub resource: DownloadedAsset,
}

/// GET /api/download-resource/{id}
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<DownloadResponse>> {
    let asset = state
        .store
        .downloadable_resource(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Resource not found"))?;

    Ok(Json(DownloadResponse {
        message: "Download started".to_string(),
        resource: DownloadedAsset {
            name: asset.name,
            kind: asset.kind,
        },
    }))
}
