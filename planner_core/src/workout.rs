//! Weekly workout template scaled by intensity level.
//!
//! The template is a fixed Monday..Sunday table. Base counts on training
//! days are multiplied by the level's intensity factor and truncated;
//! Saturday and Sunday never change.

use crate::{Goal, Level, WorkoutDay, WorkoutPlan};
use chrono::Weekday;
use once_cell::sync::Lazy;

/// A single exercise line in a day template
#[derive(Clone, Debug)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    /// Base count at intensity 1, `None` for untimed entries like "Complete Rest"
    pub base: Option<u32>,
    pub unit: &'static str,
    pub scales: bool,
}

/// One weekday's title and exercises
#[derive(Clone, Debug)]
pub struct DayTemplate {
    pub weekday: Weekday,
    pub title: &'static str,
    pub exercises: Vec<ExerciseTemplate>,
}

/// Cached weekly template, built once
static WEEKLY_TEMPLATE: Lazy<Vec<DayTemplate>> = Lazy::new(build_weekly_template);

/// Get a reference to the cached weekly template
pub fn weekly_template() -> &'static [DayTemplate] {
    &WEEKLY_TEMPLATE
}

fn scaled(name: &'static str, base: u32, unit: &'static str) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        base: Some(base),
        unit,
        scales: true,
    }
}

fn fixed(name: &'static str, base: u32, unit: &'static str) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        base: Some(base),
        unit,
        scales: false,
    }
}

fn build_weekly_template() -> Vec<DayTemplate> {
    vec![
        DayTemplate {
            weekday: Weekday::Mon,
            title: "Cardio + Strength",
            exercises: vec![
                scaled("Squats", 12, "reps"),
                scaled("Push-ups", 10, "reps"),
                scaled("Walking", 20, "mins"),
            ],
        },
        DayTemplate {
            weekday: Weekday::Tue,
            title: "Core Workout",
            exercises: vec![scaled("Plank", 30, "sec"), scaled("Crunches", 15, "reps")],
        },
        DayTemplate {
            weekday: Weekday::Wed,
            title: "Full Body",
            exercises: vec![
                scaled("Lunges", 12, "reps"),
                scaled("Shoulder Press", 10, "reps"),
            ],
        },
        DayTemplate {
            weekday: Weekday::Thu,
            title: "Cardio",
            exercises: vec![scaled("Jogging", 25, "mins"), scaled("Jump Rope", 10, "mins")],
        },
        DayTemplate {
            weekday: Weekday::Fri,
            title: "Strength Training",
            exercises: vec![scaled("Squats", 15, "reps"), scaled("Deadlifts", 10, "reps")],
        },
        DayTemplate {
            weekday: Weekday::Sat,
            title: "Active Recovery",
            exercises: vec![fixed("Yoga", 30, "mins"), fixed("Stretching", 10, "mins")],
        },
        DayTemplate {
            weekday: Weekday::Sun,
            title: "Rest Day",
            exercises: vec![ExerciseTemplate {
                name: "Complete Rest",
                base: None,
                unit: "",
                scales: false,
            }],
        },
    ]
}

/// Multiplier applied to base counts
pub fn intensity_factor(level: Level) -> f64 {
    match level {
        Level::Beginner => 1.0,
        Level::Intermediate => 1.5,
        Level::Advanced => 2.0,
    }
}

/// Full English weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl ExerciseTemplate {
    /// Count for this exercise at the given intensity, truncated
    pub fn count(&self, factor: f64) -> Option<u32> {
        self.base.map(|base| {
            if self.scales {
                (f64::from(base) * factor) as u32
            } else {
                base
            }
        })
    }

    fn render(&self, factor: f64) -> String {
        match self.count(factor) {
            Some(count) => format!("• {} – {} {}", self.name, count, self.unit),
            None => format!("• {}", self.name),
        }
    }
}

impl DayTemplate {
    fn render(&self, factor: f64) -> String {
        let mut lines = vec![self.title.to_string()];
        lines.extend(self.exercises.iter().map(|e| e.render(factor)));
        lines.join("\n")
    }
}

/// Build the weekly plan for a level.
///
/// The goal does not change the template; every goal gets the same week.
pub fn build_workout_plan(goal: Goal, level: Level) -> WorkoutPlan {
    let factor = intensity_factor(level);
    tracing::debug!(
        "Building workout plan for {} at {} (factor {})",
        goal,
        level,
        factor
    );

    let days = weekly_template()
        .iter()
        .map(|day| WorkoutDay {
            weekday: day.weekday,
            details: day.render(factor),
        })
        .collect();

    WorkoutPlan { days }
}
