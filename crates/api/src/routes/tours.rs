use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use druk_travel_core::tour::TourDraft;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::middleware::auth::AdminClaims;
use crate::routes::success;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tours", get(list_tours).post(create_tour))
        .route(
            "/tours/{slug}",
            get(get_tour).put(update_tour).delete(delete_tour),
        )
}

async fn list_tours(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let tours = state.tours().list().await?;
    Ok(success(tours))
}

async fn get_tour(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Value>> {
    let tour = state.tours().get(&slug).await?;
    Ok(success(tour))
}

async fn create_tour(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(draft): Json<TourDraft>,
) -> ApiResult<Json<Value>> {
    let tour = state.tours().create(draft).await?;
    Ok(success(tour))
}

async fn update_tour(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(slug): Path<String>,
    Json(draft): Json<TourDraft>,
) -> ApiResult<Json<Value>> {
    let tour = state.tours().update(&slug, draft).await?;
    Ok(success(tour))
}

async fn delete_tour(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(slug): Path<String>,
) -> ApiResult<Json<Value>> {
    state.tours().delete(&slug).await?;
    Ok(success(json!({ "deleted": slug })))
}
