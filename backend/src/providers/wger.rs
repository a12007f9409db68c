//! Exercise catalog adapter (wger)
//!
//! Queries the wger exercise database by category, then runs the selection
//! pipeline to produce a bounded, varied set of recommendations. Upstream
//! items carry per-language translation arrays; display text resolution
//! prefers English, falls back to the first available translation, and
//! substitutes placeholders when none exists.

use crate::config::ProviderEndpoint;
use crate::providers::ProviderError;
use crate::selection;
use fitjourney_shared::health_metrics::Goal;
use fitjourney_shared::models::{Difficulty, ExerciseItem, FitnessLevel};
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, warn};

/// wger language id for English translations
const ENGLISH_LANGUAGE: i64 = 2;
/// Raw items fetched per category before curation
const PER_CATEGORY_LIMIT: u32 = 30;
/// Upper bound on recommended exercises per request
const MAX_RECOMMENDATIONS: usize = 10;
/// Bodyweight category (no equipment needed)
const BODYWEIGHT_CATEGORY: i64 = 10;
/// Page size for the plain bodyweight listing
const BODYWEIGHT_LIMIT: u32 = 50;

const PLACEHOLDER_NAME: &str = "Unnamed Exercise";
const PLACEHOLDER_DESCRIPTION: &str = "No description available.";

/// Exercise categories queried per fitness level (wger category ids).
///
/// Beginners start with abs, cardio, arms, and legs; intermediate adds
/// chest; advanced gets the full set.
fn category_ids(level: FitnessLevel) -> &'static [i64] {
    match level {
        FitnessLevel::Beginner => &[10, 8, 9, 11],
        FitnessLevel::Intermediate => &[10, 8, 9, 11, 12],
        FitnessLevel::Advanced => &[10, 8, 9, 11, 12, 13, 14],
    }
}

// ============================================================================
// Upstream schema
// ============================================================================

#[derive(Debug, Deserialize)]
struct ExerciseInfoPage {
    #[serde(default)]
    results: Vec<ExerciseInfo>,
}

#[derive(Debug, Deserialize)]
struct ExerciseInfo {
    id: i64,
    category: Option<IdRef>,
    #[serde(default)]
    muscles: Vec<IdRef>,
    #[serde(default)]
    muscles_secondary: Vec<IdRef>,
    #[serde(default)]
    equipment: Vec<IdRef>,
    #[serde(default)]
    images: Vec<ImageRef>,
    #[serde(default)]
    translations: Vec<Translation>,
}

/// wger serializes references either as a bare id or an expanded object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IdRef {
    Id(i64),
    Object { id: i64 },
}

impl IdRef {
    fn id(&self) -> i64 {
        match self {
            IdRef::Id(id) | IdRef::Object { id } => *id,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImageRef {
    image: String,
}

#[derive(Debug, Deserialize)]
struct Translation {
    language: i64,
    name: Option<String>,
    description: Option<String>,
}

/// Resolve display text: English first, then any translation, then
/// literal placeholders rather than failing
fn resolve_translation(translations: &[Translation]) -> (String, String) {
    let preferred = translations
        .iter()
        .find(|t| t.language == ENGLISH_LANGUAGE)
        .or_else(|| translations.first());

    match preferred {
        Some(t) => (
            t.name.clone().unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
            t.description
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string()),
        ),
        None => (
            PLACEHOLDER_NAME.to_string(),
            PLACEHOLDER_DESCRIPTION.to_string(),
        ),
    }
}

impl ExerciseInfo {
    fn into_item(self, difficulty: Option<Difficulty>) -> ExerciseItem {
        let (name, description) = resolve_translation(&self.translations);
        ExerciseItem {
            id: self.id,
            name,
            description,
            category_id: self.category.map(|c| c.id()).unwrap_or_default(),
            muscles: self.muscles.iter().map(IdRef::id).collect(),
            muscles_secondary: self.muscles_secondary.iter().map(IdRef::id).collect(),
            equipment: self.equipment.iter().map(IdRef::id).collect(),
            images: self.images.into_iter().map(|i| i.image).collect(),
            difficulty,
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Exercise catalog client
pub struct WgerClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl WgerClient {
    pub fn new(http: reqwest::Client, endpoint: &ProviderEndpoint) -> Self {
        Self {
            http,
            base_url: endpoint.base_url.trim_end_matches('/').to_string(),
            api_key: endpoint.api_key.clone(),
        }
    }

    /// Recommend up to 10 curated exercises for a fitness level.
    ///
    /// `goals` and `equipment` are accepted for interface stability but do
    /// not currently influence category selection or filtering.
    ///
    /// Fail-soft: any upstream error for any category degrades the whole
    /// call to an empty list. Callers must treat an empty result as "no
    /// recommendations available", never as an error.
    pub async fn recommend_workouts(
        &self,
        level: FitnessLevel,
        _goals: &[Goal],
        _equipment: &[String],
    ) -> Vec<ExerciseItem> {
        match self.fetch_recommendations(level).await {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, ?level, "workout recommendations degraded to empty");
                Vec::new()
            }
        }
    }

    async fn fetch_recommendations(
        &self,
        level: FitnessLevel,
    ) -> Result<Vec<ExerciseItem>, ProviderError> {
        let mut raw = Vec::new();
        for category in category_ids(level) {
            let page = self.fetch_category(*category).await?;
            debug!(category, count = page.len(), "fetched exercise category");
            raw.extend(page);
        }

        let difficulty = level.difficulty();
        let curated = selection::curate(
            raw,
            |e: &ExerciseInfo| e.id,
            |e| !e.images.is_empty(),
            MAX_RECOMMENDATIONS,
        );

        Ok(curated
            .into_iter()
            .map(|info| info.into_item(Some(difficulty)))
            .collect())
    }

    /// Plain listing of bodyweight exercises (category 10, up to 50),
    /// uncurated and in upstream order. Propagates upstream failure.
    pub async fn bodyweight_exercises(&self) -> Result<Vec<ExerciseItem>, ProviderError> {
        let page = self
            .fetch_page(BODYWEIGHT_CATEGORY, BODYWEIGHT_LIMIT)
            .await?;
        Ok(page
            .into_iter()
            .map(|info| info.into_item(None))
            .collect())
    }

    async fn fetch_category(&self, category: i64) -> Result<Vec<ExerciseInfo>, ProviderError> {
        self.fetch_page(category, PER_CATEGORY_LIMIT).await
    }

    async fn fetch_page(
        &self,
        category: i64,
        limit: u32,
    ) -> Result<Vec<ExerciseInfo>, ProviderError> {
        let mut request = self
            .http
            .get(format!("{}/exerciseinfo/", self.base_url))
            .query(&[
                ("category", category.to_string()),
                ("limit", limit.to_string()),
                // Approved exercises only
                ("status", "2".to_string()),
            ])
            .header("accept-language", "en");

        if let Some(key) = &self.api_key {
            request = request.header(AUTHORIZATION, format!("Token {key}"));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let page: ExerciseInfoPage = response.json().await?;
        Ok(page.results)
    }

    /// Full detail for a single exercise. Propagates upstream failure:
    /// the detail view has no sensible empty-state substitute.
    ///
    /// The returned item carries no difficulty; that label is derived from
    /// a requested fitness level, and a detail lookup has none.
    pub async fn exercise_details(&self, id: i64) -> Result<ExerciseItem, ProviderError> {
        let mut request = self
            .http
            .get(format!("{}/exerciseinfo/{}/", self.base_url, id))
            .header("accept-language", "en");

        if let Some(key) = &self.api_key {
            request = request.header(AUTHORIZATION, format!("Token {key}"));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status()));
        }

        let info: ExerciseInfo = response.json().await?;
        Ok(info.into_item(None))
    }
}
