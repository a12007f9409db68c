//! Meal recommendation routes

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitjourney_shared::models::{RecipeDetails, RecipeItem};
use fitjourney_shared::types::MealRequest;

pub fn meal_routes() -> Router<AppState> {
    Router::new()
        .route("/meal-recommendations", post(recommend_meals))
        .route("/recipes/:id", get(recipe_details))
}

/// POST /api/v1/meal-recommendations
///
/// Returns up to 20 recipes matching the filters; upstream failure
/// degrades to an empty list.
async fn recommend_meals(
    State(state): State<AppState>,
    Json(req): Json<MealRequest>,
) -> Json<Vec<RecipeItem>> {
    let meals = state
        .recipes
        .recommend_meals(
            req.cuisine.as_deref(),
            req.diet.as_deref(),
            req.calories,
            &req.intolerances,
        )
        .await;
    Json(meals)
}

/// GET /api/v1/recipes/:id - Full recipe detail, propagating upstream failure
async fn recipe_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RecipeDetails>> {
    let recipe = state.recipes.recipe_details(id).await?;
    Ok(Json(recipe))
}
