use serde::{Deserialize, Serialize};

use super::{require_text, Validate};
use crate::error::Result;
use crate::models::WorkoutPlan;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutPlanCreate {
    pub name: String,
    pub description: Option<String>,
    pub workout_id: i64,
}

impl Validate for WorkoutPlanCreate {
    fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlanOut {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub workout_id: i64,
}

impl From<WorkoutPlan> for WorkoutPlanOut {
    fn from(plan: WorkoutPlan) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            description: plan.description,
            workout_id: plan.workout_id,
        }
    }
}
