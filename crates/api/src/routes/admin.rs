use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use druk_travel_core::auth::{hash_password, issue_token, verify_password, TOKEN_TTL_HOURS};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AdminClaims;
use crate::routes::success;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(login))
        .route("/admin/verify", post(verify))
        .route("/admin/password", post(change_password))
}

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

/// Check the password hash and issue a 24-hour session token. Failures are
/// uniformly 401 with no hint as to which part was wrong.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<Value>> {
    let admin = state
        .admins()
        .find_by_email(&req.email)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    if !verify_password(&req.password, &admin.password_hash) {
        return Err(ApiError::Unauthorized);
    }

    let token = issue_token(&admin.email, &state.config().jwt_secret)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(success(json!({
        "token": token,
        "expiresInHours": TOKEN_TTL_HOURS,
    })))
}

async fn verify(
    State(_state): State<AppState>,
    AdminClaims(claims): AdminClaims,
) -> ApiResult<Json<Value>> {
    Ok(success(json!({ "email": claims.sub })))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest {
    current_password: String,
    new_password: String,
}

async fn change_password(
    State(state): State<AppState>,
    AdminClaims(claims): AdminClaims,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<Json<Value>> {
    if req.new_password.len() < 8 {
        return Err(ApiError::BadRequest(
            "newPassword must be at least 8 characters".into(),
        ));
    }

    let admin = state
        .admins()
        .find_by_email(&claims.sub)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    if !verify_password(&req.current_password, &admin.password_hash) {
        return Err(ApiError::Unauthorized);
    }

    let hash = hash_password(&req.new_password).map_err(|e| ApiError::Internal(e.to_string()))?;
    state.admins().set_password(&admin.email, &hash).await?;
    Ok(success(json!({ "updated": true })))
}
