//! Planning pipeline.
//!
//! This module runs the full computation for one request:
//! - BMI and its category
//! - Calorie target and macro split
//! - Tips
//! - Workout and diet templates

use crate::diet::build_diet_plan;
use crate::export::format_export;
use crate::metrics::health_metrics;
use crate::nutrition::nutrition_plan;
use crate::tips::select_tips;
use crate::workout::build_workout_plan;
use crate::{DietPlan, HealthMetrics, NutritionPlan, Preferences, UserProfile, WorkoutPlan};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything computed for one profile and set of preferences
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct GeneratedPlan {
    pub profile: UserProfile,
    pub preferences: Preferences,
    pub metrics: HealthMetrics,
    pub nutrition: NutritionPlan,
    pub tips: Vec<&'static str>,
    pub workout: WorkoutPlan,
    pub diet: DietPlan,
}

/// Run the pipeline for one request.
///
/// Pure: no I/O and no session state. Use
/// [`PlannerSession::generate`](crate::PlannerSession::generate) to also
/// record progress.
pub fn generate_plan(profile: &UserProfile, preferences: &Preferences) -> GeneratedPlan {
    let metrics = health_metrics(profile.weight_kg, profile.height_cm);
    let nutrition = nutrition_plan(preferences.goal);
    let tips = select_tips(metrics.bmi, preferences.goal);
    let workout = build_workout_plan(preferences.goal, preferences.level);
    let diet = build_diet_plan(preferences.diet, preferences.budget);

    tracing::info!(
        "Generated plan: BMI {:.2} ({}), {} kcal/day, {} tips",
        metrics.bmi,
        metrics.category,
        nutrition.calories,
        tips.len()
    );

    GeneratedPlan {
        profile: profile.clone(),
        preferences: *preferences,
        metrics,
        nutrition,
        tips,
        workout,
        diet,
    }
}

impl GeneratedPlan {
    /// Render the downloadable report for this plan
    pub fn export_text(&self, date: NaiveDate) -> String {
        format_export(
            &self.profile,
            &self.preferences,
            &self.metrics,
            &self.nutrition,
            &self.workout,
            &self.diet,
            date,
        )
    }
}
