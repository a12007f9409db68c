//! Shared application state
//!
//! Built once at startup and cloned into every handler. One HTTP client is
//! shared across the provider adapters; the video cache lives for the
//! process lifetime.

use crate::cache::{SystemClock, VideoCache};
use crate::config::AppConfig;
use crate::providers::{RecipeClient, VideoClient, WgerClient};
use crate::services::PlanService;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub workouts: Arc<WgerClient>,
    pub recipes: Arc<RecipeClient>,
    pub videos: Arc<VideoClient>,
    pub plans: Arc<PlanService>,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.providers.timeout_secs))
            .build()?;

        let cache = Arc::new(VideoCache::new(
            config.cache.video_ttl_secs,
            Box::new(SystemClock),
        ));

        let workouts = Arc::new(WgerClient::new(http.clone(), &config.providers.wger));
        let recipes = Arc::new(RecipeClient::new(
            http.clone(),
            &config.providers.spoonacular,
        ));
        let videos = Arc::new(VideoClient::new(http, &config.providers.youtube, cache));
        let plans = Arc::new(PlanService::new(
            workouts.clone(),
            recipes.clone(),
            videos.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            workouts,
            recipes,
            videos,
            plans,
        })
    }
}
