use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use druk_travel_core::auth::{verify_token, Claims};

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor guarding admin endpoints: requires a valid, unexpired bearer
/// token. Rejections carry no detail beyond 401.
pub struct AdminClaims(pub Claims);

impl FromRequestParts<AppState> for AdminClaims {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::Unauthorized)?;
        let claims = verify_token(bearer.token(), &state.config().jwt_secret)
            .map_err(|_| ApiError::Unauthorized)?;
        Ok(AdminClaims(claims))
    }
}
