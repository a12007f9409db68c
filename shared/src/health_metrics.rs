//! Health metrics calculations module
//!
//! Converts body measurements, activity level, and goals into BMI, BMR,
//! daily calorie targets, and macro splits.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Evidence-Based**: Mifflin-St Jeor for BMR, WHO thresholds for BMI
//! 3. **Insufficient input is not an error**: `compute_metrics` returns
//!    `None` when measurements are missing or non-positive; callers treat
//!    that as "cannot personalize yet"

use serde::{Deserialize, Serialize};

// ============================================================================
// Profile Types
// ============================================================================

/// Gender for BMR calculation
///
/// Any unrecognized wire value deserializes to `Female`: the female formula
/// is the documented default branch, not an accidental fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    #[serde(other)]
    Female,
}

/// Activity level for the TDEE multiplier
///
/// Unknown or missing values fall back to `Sedentary` (1.20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtremelyActive,
    /// Little or no exercise
    #[default]
    #[serde(other)]
    Sedentary,
}

impl ActivityLevel {
    /// Get the activity multiplier for the daily calorie target
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }
}

/// Fitness goal driving calorie and macro adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

impl Goal {
    /// Daily calorie adjustment applied on top of the activity-scaled BMR
    pub fn calorie_adjustment(&self) -> i32 {
        match self {
            Goal::WeightLoss => -500,
            Goal::Maintenance => 0,
            Goal::MuscleGain => 300,
        }
    }
}

/// Pick the goal that drives calorie/macro adjustments.
///
/// Weight loss takes precedence over muscle gain; anything else is
/// maintenance. The checks are mutually exclusive by construction.
pub fn primary_goal(goals: &[Goal]) -> Goal {
    if goals.contains(&Goal::WeightLoss) {
        Goal::WeightLoss
    } else if goals.contains(&Goal::MuscleGain) {
        Goal::MuscleGain
    } else {
        Goal::Maintenance
    }
}

/// Measurements and preferences needed for health calculations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Age in years
    pub age_years: i32,
    pub gender: Gender,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

// ============================================================================
// Derived Metrics
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

/// Recommended daily macronutrients in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
}

/// Derived health metrics, recomputed on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    /// BMI rounded to one decimal place
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// Basal metabolic rate, rounded to the nearest kcal
    pub bmr: i32,
    /// Activity-scaled and goal-adjusted daily calorie target
    pub target_calories: i32,
    pub macros: MacroSplit,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Recommended macro split for a calorie target and goal
///
/// Grams at 4 kcal/g for protein and carbs, 9 kcal/g for fat.
pub fn recommended_macros(calories: i32, goal: Goal) -> MacroSplit {
    let (protein_ratio, fat_ratio, carb_ratio) = match goal {
        Goal::WeightLoss => (0.30, 0.25, 0.45),
        Goal::MuscleGain => (0.25, 0.20, 0.55),
        Goal::Maintenance => (0.20, 0.25, 0.55),
    };
    let calories = calories as f64;
    MacroSplit {
        protein_g: (calories * protein_ratio / 4.0).round() as i32,
        carbs_g: (calories * carb_ratio / 4.0).round() as i32,
        fat_g: (calories * fat_ratio / 9.0).round() as i32,
    }
}

/// Compute the full set of derived metrics for a profile
///
/// Returns `None` when any measurement is non-positive. Deterministic:
/// the same profile always yields the same metrics.
pub fn compute_metrics(profile: &HealthProfile) -> Option<HealthMetrics> {
    if profile.height_cm <= 0.0 || profile.weight_kg <= 0.0 || profile.age_years <= 0 {
        return None;
    }

    // Classification uses the raw value; rounding is display-only, so a
    // raw BMI of 24.98 reads as 25.0 but still classifies Normal
    let bmi_raw = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmi = (bmi_raw * 10.0).round() / 10.0;

    let bmr = calculate_bmr_mifflin(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );

    let goal = primary_goal(&profile.goals);
    let tdee = bmr * profile.activity_level.multiplier();
    let target_calories = (tdee + goal.calorie_adjustment() as f64).round() as i32;

    Some(HealthMetrics {
        bmi,
        bmi_category: classify_bmi(bmi_raw),
        bmr: bmr.round() as i32,
        target_calories,
        macros: recommended_macros(target_calories, goal),
    })
}
