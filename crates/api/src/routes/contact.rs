use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::routes::success;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/contact", post(submit))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContactRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    phone: Option<String>,
    #[serde(default)]
    message: String,
}

/// Contact form submission. Delivery is fire-and-forget; a transport error
/// surfaces as a 500 and the sender retries manually.
async fn submit(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> ApiResult<Json<Value>> {
    let mut missing = Vec::new();
    if req.name.trim().is_empty() {
        missing.push("name");
    }
    if req.email.trim().is_empty() {
        missing.push("email");
    }
    if req.message.trim().is_empty() {
        missing.push("message");
    }
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "missing required fields: {}",
            missing.join(", ")
        )));
    }

    let subject = format!("Enquiry from {}", req.name);
    let body = format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\n{}",
        req.name,
        req.email,
        req.phone.as_deref().unwrap_or("-"),
        req.message,
    );
    state
        .mailer()
        .send(&state.config().contact_recipient, &subject, &body)
        .map_err(|e| ApiError::Internal(format!("mail delivery failed: {e}")))?;

    Ok(success(json!({ "delivered": true })))
}
