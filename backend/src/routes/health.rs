//! Health check endpoints
//!
//! Kubernetes-compatible probes:
//! - /health - Basic health check
//! - /health/ready - Readiness probe (reports upstream credential state)
//! - /health/live - Liveness probe (always returns OK if server is running)

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub recipe_credentials: CheckStatus,
    pub video_credentials: CheckStatus,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn credential_check(configured: bool, upstream: &str) -> CheckStatus {
    if configured {
        CheckStatus {
            status: "configured".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "missing".to_string(),
            message: Some(format!("{upstream} API key not configured; requests degrade to empty results")),
        }
    }
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Readiness probe.
///
/// Missing upstream credentials degrade responses rather than break the
/// service, so the probe always reports ready and surfaces credential
/// state informationally.
pub async fn readiness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let providers = &state.config.providers;

    Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(HealthChecks {
            recipe_credentials: credential_check(
                providers.spoonacular.api_key.is_some(),
                "recipe",
            ),
            video_credentials: credential_check(providers.youtube.api_key.is_some(), "video"),
        }),
    })
}

/// Liveness probe - always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}
