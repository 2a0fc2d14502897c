//! Plain-text plan report.
//!
//! The report is a fixed template: header, profile, BMI, goal block, weekly
//! workout, diet list, calorie/macro summary, generation date. Given the same
//! inputs and date it is byte-identical.

use crate::workout::weekday_name;
use crate::{
    DietPlan, Error, HealthMetrics, NutritionPlan, Preferences, Result, UserProfile, WorkoutPlan,
};
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Suggested filename for the downloaded report
pub const EXPORT_FILE_NAME: &str = "AI_Personalized_Fitness_Plan.txt";

/// MIME type of the report
pub const EXPORT_MIME: &str = "text/plain";

/// Render the full report
pub fn format_export(
    profile: &UserProfile,
    preferences: &Preferences,
    metrics: &HealthMetrics,
    nutrition: &NutritionPlan,
    workout: &WorkoutPlan,
    diet: &DietPlan,
    date: NaiveDate,
) -> String {
    let mut text = format!(
        "\nAI PERSONALIZED FITNESS PLAN\n\
         ---------------------------\n\
         \n\
         Name: {name}\n\
         Age: {age}\n\
         Gender: {gender}\n\
         \n\
         Height: {height} cm\n\
         Weight: {weight} kg\n\
         BMI: {bmi:.2} ({category})\n\
         \n\
         GOAL:\n\
         {goal}\n\
         Intensity Level: {level}\n\
         Goal Duration: {duration}\n\
         \n\
         WEEKLY WORKOUT PLAN:\n",
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        height = profile.height_cm,
        weight = profile.weight_kg,
        bmi = metrics.bmi,
        category = metrics.category,
        goal = preferences.goal,
        level = preferences.level,
        duration = preferences.duration,
    );

    for day in workout.iter() {
        text.push_str(&format!(
            "\n{}:\n{}\n",
            weekday_name(day.weekday),
            day.details
        ));
    }

    text.push_str("\nDIET PLAN:\n");
    for meal in diet.iter() {
        text.push_str(&format!("- {}\n", meal));
    }

    text.push_str(&format!(
        "\nDAILY CALORIES & MACROS:\n\
         Calories: {} kcal/day\n\
         Protein: {} g\n\
         Carbohydrates: {} g\n\
         Fats: {} g\n\
         \n\
         Generated On: {}\n",
        nutrition.calories, nutrition.protein_g, nutrition.carbs_g, nutrition.fats_g, date,
    ));

    text
}

/// Write a report into `dir` under `file_name`, replacing any previous copy.
///
/// Atomically writes by:
/// 1. Writing to a temp file in the same directory
/// 2. Syncing to disk
/// 3. Renaming over the target
pub fn write_export(dir: &Path, file_name: &str, text: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(text.as_bytes())?;
    temp.flush()?;
    temp.as_file().sync_all()?;

    temp.persist(&path).map_err(|e| Error::Io(e.error))?;

    tracing::info!("Wrote fitness plan to {:?}", path);
    Ok(path)
}
