//! Workout recommendation routes

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use fitjourney_shared::models::ExerciseItem;
use fitjourney_shared::types::WorkoutRequest;

pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/workout-recommendations", post(recommend_workouts))
        .route("/exercises", get(list_exercises))
        .route("/exercises/:id", get(exercise_details))
}

/// GET /api/v1/exercises - Plain bodyweight exercise listing
///
/// Uncurated catalog page; unlike the recommendation endpoint this
/// propagates upstream failure as an error descriptor.
async fn list_exercises(State(state): State<AppState>) -> ApiResult<Json<Vec<ExerciseItem>>> {
    let exercises = state.workouts.bodyweight_exercises().await?;
    Ok(Json(exercises))
}

/// POST /api/v1/workout-recommendations
///
/// Returns up to 10 curated exercises for the requested fitness level.
/// Upstream failure degrades to an empty list rather than an error.
async fn recommend_workouts(
    State(state): State<AppState>,
    Json(req): Json<WorkoutRequest>,
) -> Json<Vec<ExerciseItem>> {
    let workouts = state
        .workouts
        .recommend_workouts(req.fitness_level, &req.goals, &req.equipment)
        .await;
    Json(workouts)
}

/// GET /api/v1/exercises/:id - Detail for a single exercise
///
/// Unlike the list endpoint this propagates upstream failure; a missing
/// exercise maps to 404.
async fn exercise_details(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ExerciseItem>> {
    let exercise = state.workouts.exercise_details(id).await?;
    Ok(Json(exercise))
}
