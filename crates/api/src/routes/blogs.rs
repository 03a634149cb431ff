use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use druk_travel_core::blog::{BlogDraft, PostStatus};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::middleware::auth::AdminClaims;
use crate::routes::success;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route(
            "/blogs/{slug}",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
}

#[derive(Deserialize)]
struct ListQuery {
    status: Option<PostStatus>,
}

async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let posts = state.blogs().list(query.status).await?;
    Ok(success(posts))
}

async fn get_blog(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Value>> {
    let post = state.blogs().get(&slug).await?;
    Ok(success(post))
}

async fn create_blog(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Json(draft): Json<BlogDraft>,
) -> ApiResult<Json<Value>> {
    let post = state.blogs().create(draft).await?;
    Ok(success(post))
}

async fn update_blog(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(slug): Path<String>,
    Json(draft): Json<BlogDraft>,
) -> ApiResult<Json<Value>> {
    let post = state.blogs().update(&slug, draft).await?;
    Ok(success(post))
}

async fn delete_blog(
    State(state): State<AppState>,
    _claims: AdminClaims,
    Path(slug): Path<String>,
) -> ApiResult<Json<Value>> {
    state.blogs().delete(&slug).await?;
    Ok(success(json!({ "deleted": slug })))
}
