//! Health metrics routes

use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use fitjourney_shared::health_metrics::compute_metrics;
use fitjourney_shared::types::{MetricsRequest, MetricsResponse};
use tracing::debug;

pub fn metrics_routes() -> Router<AppState> {
    Router::new().route("/health-metrics", post(calculate_metrics))
}

/// POST /api/v1/health-metrics
///
/// Pure calculation, no upstream calls. Insufficient or non-positive input
/// yields `{"metrics": null}` with 200 rather than a validation error, so
/// partially onboarded clients can poll without special-casing.
async fn calculate_metrics(
    State(_state): State<AppState>,
    Json(req): Json<MetricsRequest>,
) -> Json<MetricsResponse> {
    let metrics = req.into_profile().and_then(|p| compute_metrics(&p));
    if metrics.is_none() {
        debug!("health metrics request had insufficient input");
    }
    Json(MetricsResponse { metrics })
}
