//! Fitness tips derived from BMI and goal.

use crate::metrics::{NORMAL_BMI, OBESE_BMI};
use crate::Goal;

pub const UNDERWEIGHT_TIP: &str = "Increase calorie intake and avoid excessive cardio.";
pub const OBESITY_TIP: &str = "Avoid high-impact workouts; focus on low-intensity cardio.";
pub const WEIGHT_LOSS_TIP: &str = "Maintain hydration and follow a calorie deficit.";
pub const MUSCLE_GAIN_TIP: &str = "Ensure adequate protein intake and proper rest.";

/// Select tips in fixed order: underweight, obesity, then goal-specific.
///
/// The obesity tip needs a BMI strictly above 30, so a BMI of exactly 30 is
/// classified Obese but gets no obesity tip.
pub fn select_tips(bmi: f64, goal: Goal) -> Vec<&'static str> {
    let mut tips = Vec::new();

    if bmi < NORMAL_BMI {
        tips.push(UNDERWEIGHT_TIP);
    }
    if bmi > OBESE_BMI {
        tips.push(OBESITY_TIP);
    }
    match goal {
        Goal::WeightLoss => tips.push(WEIGHT_LOSS_TIP),
        Goal::MuscleGain => tips.push(MUSCLE_GAIN_TIP),
        Goal::GeneralFitness => {}
    }

    tracing::debug!("Selected {} tips for BMI {:.2} and {}", tips.len(), bmi, goal);
    tips
}
