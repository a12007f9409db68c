//! Wellness video routes

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use fitjourney_shared::models::VideoItem;
use fitjourney_shared::types::VideoQuery;

pub fn video_routes() -> Router<AppState> {
    Router::new().route("/videos", get(recommend_videos))
}

/// GET /api/v1/videos?type=yoga&duration=medium
///
/// Cached per (type, duration) for 24 hours. Upstream failure degrades to
/// an empty list.
async fn recommend_videos(
    State(state): State<AppState>,
    Query(query): Query<VideoQuery>,
) -> Json<Vec<VideoItem>> {
    let videos = state
        .videos
        .recommend_videos(&query.content_type, query.duration)
        .await;
    Json(videos)
}
