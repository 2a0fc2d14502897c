//! Core domain types for the fitness planner.
//!
//! This module defines the value records passed through the planning pipeline:
//! - Profile and preference inputs (closed enumerations for every choice)
//! - Computed health metrics and nutrition targets
//! - Workout and diet plans
//! - Progress entries for the session chart

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::Error;

// ============================================================================
// Input Bounds
// ============================================================================

/// Accepted age range in years
pub const AGE_RANGE: RangeInclusive<u32> = 16..=60;

/// Accepted height range in centimetres
pub const HEIGHT_RANGE: RangeInclusive<u32> = 140..=200;

/// Accepted weight range in kilograms
pub const WEIGHT_RANGE: RangeInclusive<u32> = 40..=120;

/// Lowercase a choice and drop separators so "Weight Loss", "weight-loss"
/// and "WEIGHT_LOSS" all compare equal.
fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Implements `Display` via the enum's `label()`.
macro_rules! display_label {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

display_label!(Gender);

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(Error::invalid_choice("gender", s)),
        }
    }
}

/// Body-metric inputs for one plan request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height_cm: u32,
    pub weight_kg: u32,
}

// ============================================================================
// Preferences
// ============================================================================

/// Fitness goal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[default]
    WeightLoss,
    MuscleGain,
    GeneralFitness,
}

impl Goal {
    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::GeneralFitness => "General Fitness",
        }
    }
}

display_label!(Goal);

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "weightloss" => Ok(Goal::WeightLoss),
            "musclegain" => Ok(Goal::MuscleGain),
            "generalfitness" => Ok(Goal::GeneralFitness),
            _ => Err(Error::invalid_choice("goal", s)),
        }
    }
}

/// Workout intensity level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

display_label!(Level);

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

/// How long the user intends to follow the plan
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalDuration {
    #[default]
    FourWeeks,
    EightWeeks,
    TwelveWeeks,
}

impl GoalDuration {
    pub fn weeks(&self) -> u32 {
        match self {
            GoalDuration::FourWeeks => 4,
            GoalDuration::EightWeeks => 8,
            GoalDuration::TwelveWeeks => 12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalDuration::FourWeeks => "4 Weeks",
            GoalDuration::EightWeeks => "8 Weeks",
            GoalDuration::TwelveWeeks => "12 Weeks",
        }
    }
}

display_label!(GoalDuration);

impl FromStr for GoalDuration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        let count = normalized
            .trim_end_matches("weeks")
            .trim_end_matches("week")
            .trim_end_matches('w');
        match count {
            "4" | "four" => Ok(GoalDuration::FourWeeks),
            "8" | "eight" => Ok(GoalDuration::EightWeeks),
            "12" | "twelve" => Ok(GoalDuration::TwelveWeeks),
            _ => Err(Error::invalid_choice("duration", s)),
        }
    }
}

/// Dietary preference
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    #[default]
    Vegetarian,
    NonVegetarian,
}

impl Diet {
    pub fn label(&self) -> &'static str {
        match self {
            Diet::Vegetarian => "Vegetarian",
            Diet::NonVegetarian => "Non-Vegetarian",
        }
    }
}

display_label!(Diet);

impl FromStr for Diet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "vegetarian" | "veg" => Ok(Diet::Vegetarian),
            "nonvegetarian" | "nonveg" => Ok(Diet::NonVegetarian),
            _ => Err(Error::invalid_choice("diet", s)),
        }
    }
}

/// Food budget
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    #[default]
    Low,
    Medium,
    High,
}

impl Budget {
    pub fn label(&self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::Medium => "Medium",
            Budget::High => "High",
        }
    }
}

display_label!(Budget);

impl FromStr for Budget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Budget::Low),
            "medium" => Ok(Budget::Medium),
            "high" => Ok(Budget::High),
            _ => Err(Error::invalid_choice("budget", s)),
        }
    }
}

/// Plan preferences selected alongside the profile
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Preferences {
    pub goal: Goal,
    pub level: Level,
    pub duration: GoalDuration,
    pub diet: Diet,
    pub budget: Budget,
}

// ============================================================================
// Computed Outputs
// ============================================================================

/// BMI band
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

display_label!(BmiCategory);

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Daily calorie target and its macronutrient split in grams
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionPlan {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
}

/// One day of the weekly workout template
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutDay {
    pub weekday: Weekday,
    pub details: String,
}

/// Weekly workout plan, always Monday through Sunday in calendar order
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct WorkoutPlan {
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    pub fn iter(&self) -> impl Iterator<Item = &WorkoutDay> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Look up the description for a weekday
    pub fn get(&self, weekday: Weekday) -> Option<&str> {
        self.days
            .iter()
            .find(|d| d.weekday == weekday)
            .map(|d| d.details.as_str())
    }
}

/// Breakfast, lunch and dinner suggestions
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DietPlan {
    pub meals: Vec<String>,
}

impl DietPlan {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.meals.iter().map(String::as_str)
    }
}

// ============================================================================
// Progress Tracking
// ============================================================================

/// A single point on the session's BMI chart
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProgressEntry {
    pub date: NaiveDate,
    pub weight_kg: u32,
    pub bmi: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_labels() {
        assert_eq!("Weight Loss".parse::<Goal>().unwrap(), Goal::WeightLoss);
        assert_eq!("muscle-gain".parse::<Goal>().unwrap(), Goal::MuscleGain);
        assert_eq!("GENERAL_FITNESS".parse::<Goal>().unwrap(), Goal::GeneralFitness);
        assert_eq!("Non-Vegetarian".parse::<Diet>().unwrap(), Diet::NonVegetarian);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("medium".parse::<Budget>().unwrap(), Budget::Medium);
    }

    #[test]
    fn test_parse_duration_forms() {
        assert_eq!("4 Weeks".parse::<GoalDuration>().unwrap(), GoalDuration::FourWeeks);
        assert_eq!("8".parse::<GoalDuration>().unwrap(), GoalDuration::EightWeeks);
        assert_eq!("12w".parse::<GoalDuration>().unwrap(), GoalDuration::TwelveWeeks);
        assert!("6 Weeks".parse::<GoalDuration>().is_err());
    }

    #[test]
    fn test_unknown_level_is_invalid_level() {
        let err = "Expert".parse::<Level>().unwrap_err();
        assert!(matches!(err, Error::InvalidLevel(ref v) if v == "Expert"));
    }

    #[test]
    fn test_unknown_goal_is_rejected() {
        let err = "Bulking".parse::<Goal>().unwrap_err();
        assert!(matches!(err, Error::InvalidChoice { field: "goal", .. }));
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for goal in [Goal::WeightLoss, Goal::MuscleGain, Goal::GeneralFitness] {
            assert_eq!(goal.to_string().parse::<Goal>().unwrap(), goal);
        }
        for level in [Level::Beginner, Level::Intermediate, Level::Advanced] {
            assert_eq!(level.to_string().parse::<Level>().unwrap(), level);
        }
        for duration in [
            GoalDuration::FourWeeks,
            GoalDuration::EightWeeks,
            GoalDuration::TwelveWeeks,
        ] {
            assert_eq!(duration.to_string().parse::<GoalDuration>().unwrap(), duration);
        }
    }

    #[test]
    fn test_default_preferences_match_first_options() {
        let prefs = Preferences::default();
        assert_eq!(prefs.goal, Goal::WeightLoss);
        assert_eq!(prefs.level, Level::Beginner);
        assert_eq!(prefs.duration.weeks(), 4);
        assert_eq!(prefs.diet, Diet::Vegetarian);
        assert_eq!(prefs.budget, Budget::Low);
    }
}
