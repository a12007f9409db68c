//! Common test utilities for integration tests
//!
//! Builds the full router against mock upstream servers so requests run
//! through the real middleware, handlers, and provider adapters.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitjourney_backend::config::{
    AppConfig, CacheConfig, ProviderEndpoint, ProvidersConfig, ServerConfig,
};
use fitjourney_backend::{routes, state::AppState};
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application with all three upstreams pointed at the
    /// given base URLs (typically wiremock servers)
    pub fn new(wger_url: &str, spoonacular_url: &str, youtube_url: &str) -> Self {
        let config = test_config(wger_url, spoonacular_url, youtube_url);
        let state = AppState::new(config).expect("failed to build test state");
        let app = routes::create_router(state);

        Self { app }
    }

    /// Create a test application whose upstreams are unreachable, for
    /// degraded-mode tests
    pub fn with_unreachable_upstreams() -> Self {
        // Reserved port on localhost that nothing listens on
        let dead = "http://127.0.0.1:9";
        Self::new(dead, dead, dead)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config(wger_url: &str, spoonacular_url: &str, youtube_url: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        providers: ProvidersConfig {
            timeout_secs: 2,
            wger: ProviderEndpoint {
                base_url: wger_url.to_string(),
                api_key: None,
            },
            spoonacular: ProviderEndpoint {
                base_url: spoonacular_url.to_string(),
                api_key: Some("test-key".to_string()),
            },
            youtube: ProviderEndpoint {
                base_url: youtube_url.to_string(),
                api_key: Some("test-key".to_string()),
            },
        },
        cache: CacheConfig {
            video_ttl_secs: 86_400,
        },
    }
}
