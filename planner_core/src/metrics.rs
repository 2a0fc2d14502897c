//! Body Mass Index computation and classification.

use crate::{BmiCategory, HealthMetrics};

/// Lower bound of the Normal band
pub const NORMAL_BMI: f64 = 18.5;

/// Lower bound of the Overweight band
pub const OVERWEIGHT_BMI: f64 = 25.0;

/// Lower bound of the Obese band
pub const OBESE_BMI: f64 = 30.0;

/// Compute BMI as `weight_kg / (height_cm / 100)²`.
///
/// Callers guarantee `height_cm > 0`; form bounds keep it within
/// [`crate::HEIGHT_RANGE`].
pub fn compute_bmi(weight_kg: u32, height_cm: u32) -> f64 {
    let height_m = f64::from(height_cm) / 100.0;
    f64::from(weight_kg) / (height_m * height_m)
}

/// Map a BMI value onto its band.
///
/// Bands are closed at the bottom and open at the top:
/// `[0, 18.5)`, `[18.5, 25)`, `[25, 30)`, `[30, ∞)`.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < NORMAL_BMI {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_BMI {
        BmiCategory::Normal
    } else if bmi < OBESE_BMI {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Compute and classify in one step
pub fn health_metrics(weight_kg: u32, height_cm: u32) -> HealthMetrics {
    let bmi = compute_bmi(weight_kg, height_cm);
    let category = classify_bmi(bmi);
    tracing::debug!("BMI {:.2} classified as {}", bmi, category);
    HealthMetrics { bmi, category }
}
