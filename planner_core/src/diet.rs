//! Meal suggestions by diet preference.

use crate::{Budget, Diet, DietPlan};

const VEGETARIAN_MEALS: [&str; 3] = [
    "Breakfast: Oats / Idli",
    "Lunch: Rice + Dal + Vegetables",
    "Dinner: Chapati + Sabzi",
];

const NON_VEGETARIAN_MEALS: [&str; 3] = [
    "Breakfast: Eggs",
    "Lunch: Chicken + Rice",
    "Dinner: Fish + Vegetables",
];

/// Breakfast, lunch and dinner for a diet.
///
/// The budget is accepted but every budget gets the same meals.
pub fn build_diet_plan(diet: Diet, budget: Budget) -> DietPlan {
    let meals = match diet {
        Diet::Vegetarian => VEGETARIAN_MEALS,
        Diet::NonVegetarian => NON_VEGETARIAN_MEALS,
    };
    tracing::debug!("Diet plan for {} on {} budget", diet, budget);

    DietPlan {
        meals: meals.iter().map(|m| m.to_string()).collect(),
    }
}
