//! Daily plan and quote routes

use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitjourney_shared::models::DailyPlan;
use fitjourney_shared::types::{PlanRequest, QuoteResponse};

pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/daily-plan", post(build_daily_plan))
        .route("/quote", get(motivational_quote))
}

/// POST /api/v1/daily-plan
///
/// Fans out to all three catalogs concurrently and returns the bounded
/// combined plan. Sources that fail contribute empty lists.
async fn build_daily_plan(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Json<DailyPlan> {
    let plan = state.plans.build_daily_plan(&req.user_profile).await;
    Json(plan)
}

/// GET /api/v1/quote - A random motivational quote
async fn motivational_quote() -> Json<QuoteResponse> {
    Json(QuoteResponse {
        quote: crate::services::quotes::random_quote().to_string(),
    })
}
