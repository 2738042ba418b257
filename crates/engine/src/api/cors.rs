//! CORS policy built from `CORS_ALLOWED_ORIGINS`.

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// `*` allows any origin. An empty or unparsable list disables CORS.
pub fn build_cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
