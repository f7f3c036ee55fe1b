//! SOAP Note Backend Library
//!
//! HTTP service for a clinical-note demo: a doctor profile persisted as a
//! JSON file and a stubbed SOAP note endpoint gated on WAV uploads.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use state::SharedState;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Build the application router with all routes and middleware
pub fn build_router(state: SharedState) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        .route("/greet", post(api::greet))
        .route("/api/health", get(api::health_check))
        .route(
            "/api/profile",
            get(api::get_profile).put(api::update_profile),
        )
        .route("/generate-soap", post(api::generate_soap_note))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
