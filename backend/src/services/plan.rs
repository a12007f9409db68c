//! Daily plan aggregator
//!
//! Fans out to the three provider adapters concurrently and assembles a
//! bounded combined plan. The adapters fail soft into empty lists, so the
//! aggregator has no partial-failure branching of its own; it truncates
//! each sequence to its public cap and composes the result by source.

use crate::providers::{RecipeClient, VideoClient, WgerClient};
use fitjourney_shared::models::{DailyPlan, DurationTag};
use fitjourney_shared::types::UserProfile;
use std::sync::Arc;
use tracing::info;

/// Public caps on the combined plan
const MAX_PLAN_WORKOUTS: usize = 3;
const MAX_PLAN_MEALS: usize = 3;
const MAX_PLAN_VIDEOS: usize = 6;

/// Fixed plan-level motivation line; the rotating quotes live behind their
/// own endpoint
const PLAN_QUOTE: &str = "Your daily motivation: Every step counts towards your goals!";

pub struct PlanService {
    workouts: Arc<WgerClient>,
    recipes: Arc<RecipeClient>,
    videos: Arc<VideoClient>,
}

impl PlanService {
    pub fn new(
        workouts: Arc<WgerClient>,
        recipes: Arc<RecipeClient>,
        videos: Arc<VideoClient>,
    ) -> Self {
        Self {
            workouts,
            recipes,
            videos,
        }
    }

    /// Build a complete daily plan for one user.
    ///
    /// The calorie ceiling for meal search is the profile's explicit value
    /// when present, otherwise the target derived from the health metrics;
    /// absent both, the meal adapter applies its own default.
    pub async fn build_daily_plan(&self, profile: &UserProfile) -> DailyPlan {
        let calorie_ceiling = profile
            .calories
            .or_else(|| profile.metrics().map(|m| m.target_calories));

        let (mut workouts, mut meals, mut videos) = tokio::join!(
            self.workouts.recommend_workouts(
                profile.fitness_level,
                &profile.goals,
                &profile.equipment,
            ),
            self.recipes.recommend_meals(
                profile.cuisine.as_deref(),
                profile.diet.as_deref(),
                calorie_ceiling,
                &profile.intolerances,
            ),
            self.videos.recommend_videos("yoga", DurationTag::Medium),
        );

        workouts.truncate(MAX_PLAN_WORKOUTS);
        meals.truncate(MAX_PLAN_MEALS);
        videos.truncate(MAX_PLAN_VIDEOS);

        info!(
            workouts = workouts.len(),
            meals = meals.len(),
            videos = videos.len(),
            "daily plan assembled"
        );

        DailyPlan {
            workouts,
            meals,
            videos,
            quote: PLAN_QUOTE.to_string(),
        }
    }
}
