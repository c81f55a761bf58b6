//! HTTP boundary: routes, shared state, and request handlers.

use axum::{
    extract::State,
    http::Method,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::aggregator::LatencyAggregator;
use crate::models::{RegionMetrics, RegionRequest};

pub struct AppState {
    pub aggregator: LatencyAggregator,
}

impl AppState {
    pub fn new(aggregator: LatencyAggregator) -> Self {
        Self { aggregator }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // Browser dashboards call this API from arbitrary origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/analyze-latency", post(analyze_latency))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Latency analytics service is running" }))
}

async fn health_check() -> &'static str {
    "OK"
}

/// Computes per-region metrics for the requested regions, in request order.
///
/// The aggregator is total over decoded requests, so this handler cannot
/// fail; malformed bodies are rejected by the `Json` extractor with a
/// client-error status before it runs.
async fn analyze_latency(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegionRequest>,
) -> Json<Vec<RegionMetrics>> {
    tracing::debug!(
        regions = request.regions.len(),
        threshold_ms = request.threshold_ms,
        "Analyzing latency"
    );
    Json(state.aggregator.analyze(&request.regions, request.threshold_ms))
}
