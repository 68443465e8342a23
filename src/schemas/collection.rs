use serde::{Deserialize, Serialize};

use super::{require_text, Validate};
use crate::error::Result;
use crate::models::WorkoutCollection;

#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutCollectionCreate {
    pub name: String,
    pub description: Option<String>,
}

impl Validate for WorkoutCollectionCreate {
    fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutCollectionOut {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<WorkoutCollection> for WorkoutCollectionOut {
    fn from(collection: WorkoutCollection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
            description: collection.description,
        }
    }
}
