use serde::{Deserialize, Serialize};

use super::{require_text, Validate};
use crate::error::Result;
use crate::models::Workout;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutCreate {
    pub name: String,
    pub description: Option<String>,
    pub collection_id: Option<i64>,
}

impl Validate for WorkoutCreate {
    fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutOut {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub collection_id: Option<i64>,
}

impl From<Workout> for WorkoutOut {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id,
            name: workout.name,
            description: workout.description,
            collection_id: workout.collection_id,
        }
    }
}
