//! One interactive planning session.
//!
//! The session owns its progress log exclusively. Each call to
//! [`PlannerSession::generate`] is one "generate plan" trigger: it runs the
//! pipeline and appends exactly one progress entry.

use crate::engine::{generate_plan, GeneratedPlan};
use crate::progress::ProgressLog;
use crate::{Preferences, UserProfile};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct PlannerSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    log: ProgressLog,
}

impl Default for PlannerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerSession {
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            log: ProgressLog::new(),
        };
        tracing::info!("Started planner session {}", session.id);
        session
    }

    /// Generate a plan and record (date, weight, bmi) in the progress log
    pub fn generate(
        &mut self,
        profile: &UserProfile,
        preferences: &Preferences,
        date: NaiveDate,
    ) -> GeneratedPlan {
        let plan = generate_plan(profile, preferences);
        self.log.append(date, profile.weight_kg, plan.metrics.bmi);

        tracing::info!(
            "Session {}: recorded progress entry {} for {}",
            self.id,
            self.log.len(),
            date
        );
        plan
    }

    pub fn progress(&self) -> &ProgressLog {
        &self.log
    }

    /// End the session, keeping its log
    pub fn into_progress(self) -> ProgressLog {
        self.log
    }
}
