use tower_http::cors::{Any, CorsLayer};

/// CORS layer for the booking API. The public site and the admin editor are
/// served from their own origins, so this stays permissive in development;
/// tighten to those origins for production.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
