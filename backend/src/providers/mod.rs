//! Upstream provider adapters
//!
//! One module per external catalog: exercises (wger), recipes (spoonacular),
//! videos (youtube). Each adapter translates a domain request into upstream
//! calls and normalizes the heterogeneous upstream schema into the shared
//! item models.
//!
//! Failure model: the fetch path returns `Result<_, ProviderError>`; the
//! public recommendation methods collapse any error into an empty collection
//! and log the reason (fail-soft). Detail lookups propagate the error, since
//! a single-item view has no sensible empty state.

pub mod spoonacular;
pub mod wger;
pub mod youtube;

pub use spoonacular::RecipeClient;
pub use wger::WgerClient;
pub use youtube::VideoClient;

use crate::error::ApiError;
use reqwest::StatusCode;
use thiserror::Error;

/// Why an upstream call failed; kept internal for logging, collapsed to an
/// empty collection at the adapter boundary for list endpoints
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API credentials not configured")]
    MissingCredentials,

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("unexpected upstream payload: {0}")]
    UnexpectedPayload(String),
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Status(StatusCode::NOT_FOUND) => {
                ApiError::NotFound("resource not found upstream".to_string())
            }
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_upstream_404_maps_to_not_found() {
        let api: ApiError = ProviderError::Status(StatusCode::NOT_FOUND).into();
        let response = api.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_provider_errors_map_to_bad_gateway() {
        let api: ApiError = ProviderError::MissingCredentials.into();
        let response = api.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_GATEWAY);
    }
}
