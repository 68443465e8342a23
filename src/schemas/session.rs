use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::error::Result;
use crate::models::WorkoutSession;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutSessionCreate {
    pub plan_id: i64,
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkoutSessionCreate {
    /// The supplied completion time, or `now` when the client left it out.
    /// Nothing records sessions over HTTP yet; the column default covers
    /// rows inserted without a timestamp.
    #[allow(dead_code)]
    pub fn completed_at_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.completed_at.unwrap_or(now)
    }
}

// Types alone carry every rule for this shape.
impl Validate for WorkoutSessionCreate {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSessionOut {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub completed_at: DateTime<Utc>,
}

impl From<WorkoutSession> for WorkoutSessionOut {
    fn from(session: WorkoutSession) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id,
            plan_id: session.plan_id,
            completed_at: session.completed_at,
        }
    }
}
