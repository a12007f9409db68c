//! Wellness video adapter (YouTube Data API)
//!
//! Quota-limited upstream, so every successful fetch is cached for 24 hours
//! keyed by (content type, duration bucket). Failures never poison the
//! cache; they degrade to an empty list.

use crate::cache::VideoCache;
use crate::config::ProviderEndpoint;
use crate::providers::ProviderError;
use chrono::{DateTime, Utc};
use fitjourney_shared::models::{DurationTag, VideoItem};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Search phrase per content type; unknown types pass through verbatim
fn search_phrase(content_type: &str) -> &str {
    match content_type {
        "yoga" => "yoga for beginners home workout",
        "meditation" => "guided meditation relaxation",
        "stretching" => "stretching exercises flexibility",
        other => other,
    }
}

// ============================================================================
// Upstream schema
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoId {
    video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    thumbnails: Thumbnails,
    channel_title: String,
    published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    medium: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl SearchItem {
    fn into_item(self, content_type: &str, duration: DurationTag) -> VideoItem {
        VideoItem {
            id: self.id.video_id,
            title: self.snippet.title,
            description: self.snippet.description,
            thumbnail: self.snippet.thumbnails.medium.url,
            channel_title: self.snippet.channel_title,
            published_at: self.snippet.published_at,
            duration,
            content_type: content_type.to_string(),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Video catalog client with a shared read-through cache
pub struct VideoClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    cache: Arc<VideoCache>,
}

impl VideoClient {
    pub fn new(http: reqwest::Client, endpoint: &ProviderEndpoint, cache: Arc<VideoCache>) -> Self {
        Self {
            http,
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
            api_key: endpoint.api_key.clone(),
            cache,
        }
    }

    /// Recommend videos for a content type and duration bucket.
    ///
    /// Cache-first: a fresh cached entry short-circuits the upstream call.
    /// Only a successful, non-empty fetch is cached; failures and empty
    /// result sets leave the cache untouched and yield an empty list.
    pub async fn recommend_videos(
        &self,
        content_type: &str,
        duration: DurationTag,
    ) -> Vec<VideoItem> {
        if let Some(cached) = self.cache.get(content_type, duration) {
            debug!(content_type, duration = duration.as_str(), "video cache hit");
            return cached;
        }

        match self.fetch_videos(content_type, duration).await {
            Ok(videos) if videos.is_empty() => {
                warn!(content_type, "video search returned no results");
                Vec::new()
            }
            Ok(videos) => {
                self.cache.insert(content_type, duration, videos.clone());
                videos
            }
            Err(err) => {
                warn!(error = %err, content_type, "video recommendations degraded to empty");
                Vec::new()
            }
        }
    }

    async fn fetch_videos(
        &self,
        content_type: &str,
        duration: DurationTag,
    ) -> Result<Vec<VideoItem>, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingCredentials)?;
        let max_results = duration.max_results().to_string();

        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", search_phrase(content_type)),
                ("type", "video"),
                ("videoDuration", duration.as_str()),
                ("maxResults", max_results.as_str()),
                ("key", api_key.as_str()),
                ("relevanceLanguage", "en"),
                ("videoEmbeddable", "true"),
                ("order", "relevance"),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body
            .items
            .into_iter()
            .take(duration.max_results())
            .map(|item| item.into_item(content_type, duration))
            .collect())
    }
}
