pub mod admin;
pub mod blogs;
pub mod contact;
pub mod content;
pub mod health;
pub mod tours;

use axum::{Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(content::routes())
        .merge(tours::routes())
        .merge(blogs::routes())
        .merge(admin::routes())
        .merge(contact::routes())
        .with_state(state)
}

/// Wrap a payload in the success envelope shared by every endpoint.
pub(crate) fn success<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}
