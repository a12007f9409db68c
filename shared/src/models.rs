//! Domain item models
//!
//! Normalized shapes for the three upstream catalogs (exercises, recipes,
//! videos) and the assembled daily plan. Provider adapters translate each
//! upstream schema into these types; everything downstream works with them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Self-reported fitness level driving category selection and difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// Difficulty label attached to recommended exercises.
    ///
    /// Derived from the user's level only, independent of any upstream
    /// difficulty metadata on the exercise itself.
    pub fn difficulty(&self) -> Difficulty {
        match self {
            FitnessLevel::Beginner => Difficulty::Easy,
            FitnessLevel::Intermediate => Difficulty::Medium,
            FitnessLevel::Advanced => Difficulty::Hard,
        }
    }
}

/// Exercise difficulty label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Video duration bucket
///
/// Each bucket has a fixed result cap: short 8, medium 10, long 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationTag {
    Short,
    #[default]
    Medium,
    Long,
}

impl DurationTag {
    /// Maximum number of videos returned for this bucket
    pub fn max_results(&self) -> usize {
        match self {
            DurationTag::Short => 8,
            DurationTag::Medium => 10,
            DurationTag::Long => 6,
        }
    }

    /// Upstream query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationTag::Short => "short",
            DurationTag::Medium => "medium",
            DurationTag::Long => "long",
        }
    }
}

/// A recommended exercise, normalized from the exercise catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category_id: i64,
    pub muscles: Vec<i64>,
    pub muscles_secondary: Vec<i64>,
    pub equipment: Vec<i64>,
    /// Image URLs in upstream order; items with at least one image are
    /// prioritized by the selection pipeline
    pub images: Vec<String>,
    /// Present on recommendations (derived from the requested fitness
    /// level); absent on listings and detail lookups, where no level is
    /// requested and the catalog itself carries no difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// Flat macro record mapped from upstream nutrient arrays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A recommended meal, normalized from the recipe catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeItem {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    /// Calories per serving; 0 when the upstream nutrition block is missing
    pub calories: f64,
    pub macros: Macros,
    pub ready_in_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub summary: Option<String>,
}

/// Full recipe detail for the single-recipe view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub summary: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<String>,
    pub ready_in_minutes: Option<i32>,
    pub servings: Option<i32>,
}

/// A recommended wellness video, normalized from the video catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    pub duration: DurationTag,
    /// Requested content type ("yoga", "meditation", ...), echoed back
    #[serde(rename = "type")]
    pub content_type: String,
}

/// The assembled daily plan
///
/// Bounded lists: at most 3 workouts, 3 meals, and 6 videos regardless of
/// what the adapters return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub workouts: Vec<ExerciseItem>,
    pub meals: Vec<RecipeItem>,
    pub videos: Vec<VideoItem>,
    pub quote: String,
}
