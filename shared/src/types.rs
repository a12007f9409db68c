//! API request and response types
//!
//! Wire shapes shared between the backend and its clients. Field names are
//! camelCase on the wire to match the browser clients.

use crate::health_metrics::{
    compute_metrics, ActivityLevel, Gender, Goal, HealthMetrics, HealthProfile,
};
use crate::models::{DurationTag, FitnessLevel};
use serde::{Deserialize, Serialize};

/// Workout recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRequest {
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub equipment: Vec<String>,
}

/// Intolerance filter accepted as either a single value or a collection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Intolerances {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl Intolerances {
    /// Comma-joined upstream filter value, `None` when empty
    pub fn to_filter(&self) -> Option<String> {
        match self {
            Intolerances::None => None,
            Intolerances::One(value) => {
                let trimmed = value.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Intolerances::Many(values) => {
                let joined = values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .collect::<Vec<_>>()
                    .join(",");
                (!joined.is_empty()).then_some(joined)
            }
        }
    }
}

/// Meal recommendation request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MealRequest {
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub calories: Option<i32>,
    #[serde(default)]
    pub intolerances: Intolerances,
}

fn default_content_type() -> String {
    "yoga".to_string()
}

/// Video recommendation query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoQuery {
    #[serde(rename = "type", default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub duration: DurationTag,
}

/// Health metrics request; all fields optional so the calculator can
/// report "insufficient input" instead of failing to parse
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRequest {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl MetricsRequest {
    /// Build a complete profile, `None` when a required field is missing
    pub fn into_profile(self) -> Option<HealthProfile> {
        Some(HealthProfile {
            height_cm: self.height?,
            weight_kg: self.weight?,
            age_years: self.age?,
            gender: self.gender?,
            activity_level: self.activity_level.unwrap_or_default(),
            goals: self.goals,
        })
    }
}

/// Health metrics response; `metrics` is null when input was insufficient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub metrics: Option<HealthMetrics>,
}

/// Everything the daily plan aggregator needs about a user, kept
/// client-side by the surrounding system and sent with each plan request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    /// Explicit calorie ceiling; when absent the aggregator derives one
    /// from the health metrics
    pub calories: Option<i32>,
    #[serde(default)]
    pub intolerances: Intolerances,
}

impl UserProfile {
    /// The measurement subset, `None` when incomplete
    pub fn health_profile(&self) -> Option<HealthProfile> {
        Some(HealthProfile {
            height_cm: self.height?,
            weight_kg: self.weight?,
            age_years: self.age?,
            gender: self.gender?,
            activity_level: self.activity_level,
            goals: self.goals.clone(),
        })
    }

    /// Derived metrics, `None` when measurements are missing or invalid
    pub fn metrics(&self) -> Option<HealthMetrics> {
        self.health_profile()
            .and_then(|profile| compute_metrics(&profile))
    }
}

/// Daily plan request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub user_profile: UserProfile,
}

/// Motivational quote response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
}
