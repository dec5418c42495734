use crate::config::Config;
use crate::services::dispatch_service::DispatchService;
use crate::services::extract_service::ExtractionPolicy;
use axum::body::Body;
use axum::http::Request;
use axum::{
    Router,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod health;
pub mod recipients;
pub mod schemas;
pub mod send;

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub dispatch_service: DispatchService,
    pub extraction: ExtractionPolicy,
}

/// Configures and returns the application router.
pub fn app_router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    let api_routes = Router::new()
        .route("/send", post(send::send_batch))
        .route("/recipients/extract", post(recipients::extract_recipients));

    Router::new()
        .route("/livez", get(health::livez))
        .nest("/api", api_routes)
        .layer(PropagateRequestIdLayer::new(axum::http::HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<tower_http::request_id::RequestId>()
                        .map(|id| id.header_value().to_str().unwrap_or_default())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %response.status().as_u16(),
                            "request completed"
                        );
                    },
                ),
        )
        .layer(SetRequestIdLayer::new(
            axum::http::HeaderName::from_static("x-request-id"),
            MakeRequestUuid,
        ))
        .layer(TimeoutLayer::new(request_timeout))
        // The operator frontend is served from a different origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}
