//! Calorie targets and macronutrient split.
//!
//! The calorie target depends only on the goal. Age, body metrics and
//! activity level do not enter into it.

use crate::{Goal, NutritionPlan};

const PROTEIN_SHARE: f64 = 0.30;
const CARBS_SHARE: f64 = 0.45;
const FATS_SHARE: f64 = 0.25;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Daily calorie target for a goal
pub fn estimate_calories(goal: Goal) -> u32 {
    match goal {
        Goal::MuscleGain => 2200,
        Goal::WeightLoss => 1800,
        Goal::GeneralFitness => 2000,
    }
}

/// Split calories into (protein_g, carbs_g, fats_g).
///
/// Each share is truncated toward zero, never rounded.
pub fn split_macros(calories: u32) -> (u32, u32, u32) {
    let kcal = f64::from(calories);
    let protein = (kcal * PROTEIN_SHARE / KCAL_PER_G_PROTEIN) as u32;
    let carbs = (kcal * CARBS_SHARE / KCAL_PER_G_CARBS) as u32;
    let fats = (kcal * FATS_SHARE / KCAL_PER_G_FAT) as u32;
    (protein, carbs, fats)
}

/// Calorie target plus macro split for a goal
pub fn nutrition_plan(goal: Goal) -> NutritionPlan {
    let calories = estimate_calories(goal);
    let (protein_g, carbs_g, fats_g) = split_macros(calories);
    tracing::debug!(
        "Nutrition for {}: {} kcal, {}g protein, {}g carbs, {}g fats",
        goal,
        calories,
        protein_g,
        carbs_g,
        fats_g
    );
    NutritionPlan {
        calories,
        protein_g,
        carbs_g,
        fats_g,
    }
}

impl NutritionPlan {
    /// Calories accounted for by the gram targets
    pub fn macro_kcal(&self) -> u32 {
        self.protein_g * 4 + self.carbs_g * 4 + self.fats_g * 9
    }
}
