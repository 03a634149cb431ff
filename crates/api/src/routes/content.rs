use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use druk_travel_core::content::Section;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiResult;
use crate::middleware::auth::AdminClaims;
use crate::routes::success;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/content", get(get_content).put(put_content))
        .route("/content/sections/{section_id}", put(put_section))
        .route("/content/reorder", post(reorder))
}

/// One read shape serves both the admin editor and the public renderer:
/// inactive sections are included and filtered client-side.
async fn get_content(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let stored = state.content().get_or_seed().await?;
    Ok(success(stored))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PutContentRequest {
    base_version: i64,
    sections: Vec<Section>,
}

/// Full-document replace, guarded by the version precondition.
async fn put_content(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(req): Json<PutContentRequest>,
) -> ApiResult<Json<Value>> {
    let stored = state
        .content()
        .replace(req.sections, req.base_version)
        .await?;
    Ok(success(stored))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PutSectionRequest {
    base_version: i64,
    section: Value,
}

/// Merge one section's field bag; every sibling section is left untouched.
async fn put_section(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(section_id): Path<String>,
    Json(req): Json<PutSectionRequest>,
) -> ApiResult<Json<Value>> {
    let stored = state
        .content()
        .update_section(&section_id, &req.section, req.base_version)
        .await?;
    Ok(success(stored))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReorderRequest {
    from: usize,
    to: usize,
    base_version: i64,
}

/// Drag-reorder within the home partition; static pages keep their order.
async fn reorder(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(req): Json<ReorderRequest>,
) -> ApiResult<Json<Value>> {
    let stored = state
        .content()
        .reorder(req.from, req.to, req.base_version)
        .await?;
    Ok(success(stored))
}
