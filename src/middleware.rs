use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

use crate::http::NUMBER_OF_RECORDS;

// CORS configuration from the configured allowed origins. The record-count
// header must be exposed or browser clients cannot read it.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .map(|s| s.parse().expect("invalid origin in ALLOWED_ORIGINS"))
        .collect::<Vec<HeaderValue>>();

    tracing::info!("CORS allowed origins: {:?}", origins);

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([NUMBER_OF_RECORDS])
        .max_age(Duration::from_secs(3600))
}
