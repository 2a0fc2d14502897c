#![forbid(unsafe_code)]

//! Core computation for the fitness planner.
//!
//! This crate provides:
//! - Domain types (profile, preferences, metrics, plans)
//! - BMI, calorie and macro calculations
//! - Workout and diet templates, tips
//! - Session-scoped progress log
//! - Plain-text report export

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod nutrition;
pub mod tips;
pub mod workout;
pub mod diet;
pub mod progress;
pub mod export;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use metrics::{classify_bmi, compute_bmi};
pub use nutrition::{estimate_calories, split_macros};
pub use tips::select_tips;
pub use workout::build_workout_plan;
pub use diet::build_diet_plan;
pub use progress::{append_progress, ProgressLog};
pub use export::{format_export, write_export, EXPORT_FILE_NAME, EXPORT_MIME};
pub use engine::{generate_plan, GeneratedPlan};
pub use session::PlannerSession;
